use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::IndexQuery;
use crate::models::enrollments::requests::{
    CreateStudentEnrollRequest, UpdateStudentEnrollRequest,
};
use crate::models::grades::requests::BulkGradeRequest;
use crate::models::users::entities::UserRole;
use crate::services::EnrollmentService;
use crate::services::enrollments::BulkTarget;
use crate::utils::SafeIDI64;

static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn index(req: HttpRequest, query: web::Query<IndexQuery>) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.index(query.into_inner(), &req).await
}

pub async fn store(
    req: HttpRequest,
    data: web::Json<CreateStudentEnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.store(data.into_inner(), &req).await
}

pub async fn update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateStudentEnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update(id.0, data.into_inner(), &req)
        .await
}

pub async fn destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.destroy(id.0, &req).await
}

pub async fn approval(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.approval_summary(id.0, &req).await
}

pub async fn assignment_history(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.assignment_history(id.0, &req).await
}

pub async fn bulk_grades(
    req: HttpRequest,
    data: web::Json<BulkGradeRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .bulk_update(BulkTarget::Grade, data.into_inner(), &req)
        .await
}

pub async fn bulk_attendances(
    req: HttpRequest,
    data: web::Json<BulkGradeRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .bulk_update(BulkTarget::Attendance, data.into_inner(), &req)
        .await
}

pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    // 学生自行选课并登记实习信息
    cfg.service(
        resource_scope!(
            "/api/v1/student_enrolls",
            read: UserRole::all_roles(),
            write: UserRole::all_roles(),
            index: index,
            store: store,
            update: update,
            destroy: destroy,
        )
        .route("/{id}/approval", web::get().to(approval))
        .route("/{id}/assignment_history", web::get().to(assignment_history))
        .service(
            web::resource("/{id}/letters/{kind}/{lang}")
                .wrap(middlewares::RateLimit::letter_render())
                .route(
                    web::post()
                        .to(super::letters::enrollment_letter)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
        ),
    );

    cfg.service(
        web::scope("/api/v1/instructor")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                    .route("/grades", web::post().to(bulk_grades))
                    .route("/grades", web::put().to(bulk_grades))
                    .route("/attendances", web::post().to(bulk_attendances))
                    .route("/attendances", web::put().to(bulk_attendances))
                    .route(
                        "/enroll_statuses",
                        web::get().to(super::enroll_statuses::instructor_statuses),
                    ),
            ),
    );
}
