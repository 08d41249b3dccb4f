use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::auth::responses::RefreshTokenResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

pub async fn handle_refresh_token(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = JwtUtils::refresh_token_from(request) else {
        return Ok(super::super::unauthorized());
    };

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                expires_in: AppConfig::get().jwt.access_token_expiry * 60,
            },
            "Token refreshed successfully",
        ))),
        Err(e) => {
            tracing::info!("Refresh token rejected: {e}");
            // 清除无效的 cookie
            Ok(HttpResponse::Unauthorized()
                .cookie(JwtUtils::expired_refresh_cookie())
                .json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Login expired or invalid, please login again",
                )))
        }
    }
}
