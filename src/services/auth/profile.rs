use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::AuthService;
use crate::cache::ObjectCache;
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    auth::{requests::UpdateProfileRequest, responses::UserInfoResponse},
    users::requests::UpdateUserRequest,
};
use crate::services::{bad_request, respond_found, unauthorized};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

pub async fn handle_me(service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);
    let detail = storage
        .get_user_detail(user_id)
        .await
        .map(|d| d.map(|user| UserInfoResponse { user }));
    respond_found(
        detail,
        ErrorCode::UserNotFound,
        "User not found",
        "User information retrieved successfully",
    )
}

pub async fn handle_update_profile(
    service: &AuthService,
    update_request: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };

    if let Some(email) = &update_request.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }

    let password = match update_request.password {
        Some(password) => {
            if let Err(msg) = validate_password(&password) {
                return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
            }
            match hash_password(&password) {
                Ok(hash) => Some(hash),
                Err(e) => return Ok(actix_web::ResponseError::error_response(&e)),
            }
        }
        None => None,
    };

    let storage = service.get_storage(request);
    let result = storage
        .update_user(
            user_id,
            UpdateUserRequest {
                email: update_request.email,
                password,
                display_name: update_request.display_name,
                ..Default::default()
            },
        )
        .await;

    // 资料变更后让缓存的用户信息失效
    if result.is_ok()
        && let Some(cache) = request.app_data::<web::Data<Arc<dyn ObjectCache>>>()
        && let Some(token) = request
            .headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
    {
        cache.remove(&format!("user:{}", token.trim())).await;
    }

    respond_found(
        result,
        ErrorCode::UserNotFound,
        "User not found",
        "Profile updated successfully",
    )
}
