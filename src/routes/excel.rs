use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::ExcelService;

static EXCEL_SERVICE: Lazy<ExcelService> = Lazy::new(ExcelService::new_lazy);

pub async fn upload(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    EXCEL_SERVICE.upload(payload, &req).await
}

pub fn configure_excel_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/excel")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/upload")
                    .wrap(middlewares::RateLimit::file_upload())
                    .route(
                        web::post()
                            .to(upload)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
