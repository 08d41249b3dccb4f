use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IndexQuery;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::services::UserService;
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn index(req: HttpRequest, query: web::Query<IndexQuery>) -> ActixResult<HttpResponse> {
    USER_SERVICE.index(query.into_inner(), &req).await
}

pub async fn store(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.store(user_data.into_inner(), &req).await
}

pub async fn update(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update(user_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn destroy(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.destroy(user_id.0, &req).await
}

// 账号管理仅限管理员
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(resource_scope!(
        "/api/v1/users",
        read: UserRole::admin_roles(),
        write: UserRole::admin_roles(),
        index: index,
        store: store,
        update: update,
        destroy: destroy,
    ));
}
