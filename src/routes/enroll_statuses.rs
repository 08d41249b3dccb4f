use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::IndexQuery;
use crate::models::enrollments::requests::{
    ChangeInstructorRequest, CommitteeVoteRequest, CreateEnrollStatusRequest,
    InstructorStatusQuery, TransitionStatusRequest, UpdateEnrollStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::EnrollStatusService;
use crate::utils::SafeIDI64;

static ENROLL_STATUS_SERVICE: Lazy<EnrollStatusService> =
    Lazy::new(EnrollStatusService::new_lazy);

pub async fn index(req: HttpRequest, query: web::Query<IndexQuery>) -> ActixResult<HttpResponse> {
    ENROLL_STATUS_SERVICE.index(query.into_inner(), &req).await
}

pub async fn store(
    req: HttpRequest,
    data: web::Json<CreateEnrollStatusRequest>,
) -> ActixResult<HttpResponse> {
    ENROLL_STATUS_SERVICE.store(data.into_inner(), &req).await
}

pub async fn update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateEnrollStatusRequest>,
) -> ActixResult<HttpResponse> {
    ENROLL_STATUS_SERVICE
        .update(id.0, data.into_inner(), &req)
        .await
}

pub async fn destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ENROLL_STATUS_SERVICE.destroy(id.0, &req).await
}

pub async fn transition(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<TransitionStatusRequest>,
) -> ActixResult<HttpResponse> {
    ENROLL_STATUS_SERVICE
        .transition(id.0, data.into_inner(), &req)
        .await
}

pub async fn vote(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<CommitteeVoteRequest>,
) -> ActixResult<HttpResponse> {
    ENROLL_STATUS_SERVICE
        .vote(id.0, data.into_inner(), &req)
        .await
}

pub async fn instructor_statuses(
    req: HttpRequest,
    query: web::Query<InstructorStatusQuery>,
) -> ActixResult<HttpResponse> {
    ENROLL_STATUS_SERVICE
        .instructor_statuses(query.into_inner(), &req)
        .await
}

pub async fn change_instructor(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<ChangeInstructorRequest>,
) -> ActixResult<HttpResponse> {
    ENROLL_STATUS_SERVICE
        .change_instructor(id.0, data.into_inner(), &req)
        .await
}

pub fn configure_enroll_status_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        resource_scope!(
            "/api/v1/student_enroll_statuses",
            read: UserRole::all_roles(),
            write: UserRole::staff_roles(),
            index: index,
            store: store,
            update: update,
            destroy: destroy,
        )
        // 审批流转与投票由教师执行，指导教师变更由职员执行
        .service(
            web::scope("/{id}")
                .route(
                    "/transition",
                    web::post()
                        .to(transition)
                        .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles())),
                )
                .route(
                    "/votes",
                    web::post()
                        .to(vote)
                        .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles())),
                )
                .route(
                    "/assignment",
                    web::post()
                        .to(change_instructor)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
        ),
    );
}
