use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{UserService, invalidate_user_cache};
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::services::{bad_request, respond_deleted};

pub async fn handle_destroy(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if RequireJWT::extract_user_id(request) == Some(user_id) {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "You cannot delete your own account",
        ));
    }

    let storage = service.get_storage(request);
    let result = storage.delete_user(user_id).await;
    if matches!(result, Ok(true)) {
        invalidate_user_cache(request).await;
    }

    respond_deleted(
        result,
        ErrorCode::UserNotFound,
        "User not found",
        "User deleted successfully",
    )
}
