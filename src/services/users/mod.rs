pub mod destroy;
pub mod index;
pub mod store;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::IndexQuery;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};

super::define_service!(UserService);

impl UserService {
    // 获取用户列表或单个用户详情
    pub async fn index(&self, query: IndexQuery, request: &HttpRequest) -> ActixResult<HttpResponse> {
        index::handle_index(self, query, request).await
    }

    // 创建用户
    pub async fn store(
        &self,
        req: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::handle_store(self, req, request).await
    }

    // 更新用户信息
    pub async fn update(
        &self,
        user_id: i64,
        req: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, user_id, req, request).await
    }

    // 删除用户
    pub async fn destroy(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        destroy::handle_destroy(self, user_id, request).await
    }
}

// 缓存按令牌索引，无法定位单个用户，角色或状态变更后整体清空
pub(crate) async fn invalidate_user_cache(request: &HttpRequest) {
    if let Some(cache) = request.app_data::<web::Data<Arc<dyn ObjectCache>>>() {
        cache.invalidate_all().await;
    }
}
