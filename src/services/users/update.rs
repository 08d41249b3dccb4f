use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, ResponseError};

use super::{UserService, invalidate_user_cache};
use crate::models::{ErrorCode, users::requests::UpdateUserRequest};
use crate::services::{bad_request, respond_found};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

pub async fn handle_update(
    service: &UserService,
    user_id: i64,
    mut req: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    req.email = req.email.map(|e| e.trim().to_string());
    if let Some(email) = &req.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }

    if let Some(password) = req.password.take() {
        if let Err(msg) = validate_password(&password) {
            return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
        }
        req.password = match hash_password(&password) {
            Ok(hash) => Some(hash),
            Err(e) => return Ok(e.error_response()),
        };
    }

    let storage = service.get_storage(request);
    let result = storage.update_user(user_id, req).await;
    if matches!(result, Ok(Some(_))) {
        invalidate_user_cache(request).await;
    }

    respond_found(
        result,
        ErrorCode::UserNotFound,
        "User not found",
        "User information updated successfully",
    )
}
