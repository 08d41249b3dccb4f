use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::IndexQuery;
use crate::models::trainings::requests::UpdateVisitsPictureRequest;
use crate::models::users::entities::UserRole;
use crate::services::VisitService;
use crate::utils::SafeIDI64;

static VISIT_SERVICE: Lazy<VisitService> = Lazy::new(VisitService::new_lazy);

pub async fn index(req: HttpRequest, query: web::Query<IndexQuery>) -> ActixResult<HttpResponse> {
    VISIT_SERVICE.index(query.into_inner(), &req).await
}

pub async fn update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateVisitsPictureRequest>,
) -> ActixResult<HttpResponse> {
    VISIT_SERVICE.update(id.0, data.into_inner(), &req).await
}

pub async fn destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    VISIT_SERVICE.destroy(id.0, &req).await
}

pub async fn download(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    VISIT_SERVICE.download(id.0, &req).await
}

// 照片通过 /api/v1/visitor_schedules/{id}/pictures 上传
pub fn configure_visit_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/visits_pictures")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(index))
            .route("/{id}/file", web::get().to(download))
            .service(
                web::resource("/{id}")
                    .route(
                        web::put()
                            .to(update)
                            .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles())),
                    )
                    .route(
                        web::patch()
                            .to(update)
                            .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles())),
                    )
                    .route(
                        web::delete()
                            .to(destroy)
                            .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles())),
                    ),
            ),
    );
}
