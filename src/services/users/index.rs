use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{respond, respond_found};

pub async fn handle_index(
    service: &UserService,
    query: IndexQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match query.id {
        Some(id) => respond_found(
            storage.get_user_detail(id).await,
            ErrorCode::UserNotFound,
            "User not found",
            "User retrieved successfully",
        ),
        None => respond(storage.list_users().await, "Users retrieved successfully"),
    }
}
