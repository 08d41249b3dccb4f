use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::letters::{LetterKind, LetterLanguage, LetterRequest};
use crate::models::users::entities::UserRole;
use crate::services::LetterService;

static LETTER_SERVICE: Lazy<LetterService> = Lazy::new(LetterService::new_lazy);

pub async fn static_letter(req: HttpRequest) -> ActixResult<HttpResponse> {
    LETTER_SERVICE.static_letter(&req).await
}

// 挂在 /api/v1/student_enrolls/{id}/letters/{kind}/{lang} 下
pub async fn enrollment_letter(
    req: HttpRequest,
    path: web::Path<(i64, LetterKind, LetterLanguage)>,
    data: web::Json<LetterRequest>,
) -> ActixResult<HttpResponse> {
    let (id, kind, lang) = path.into_inner();
    LETTER_SERVICE
        .enrollment_letter(id, kind, lang, data.into_inner(), &req)
        .await
}

pub fn configure_letter_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/letters")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/static")
                    .wrap(middlewares::RateLimit::letter_render())
                    .route(
                        web::get()
                            .to(static_letter)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
