use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&req).await
}

// 健康检查无需登录，供负载均衡探测
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/health")
            .wrap(middleware::Compress::default())
            .route(web::get().to(health)),
    );
}
