pub mod health;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

super::define_service!(SystemService);

impl SystemService {
    // 健康检查：数据库连通性与运行时长
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        health::handle_health(self, request).await
    }
}
