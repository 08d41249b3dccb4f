use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::IndexQuery;
use crate::models::trainings::requests::{
    AssignVisitorRequest, BulkAssignVisitorRequest, CreateStudentTrainingRequest,
    CreateVisitorScheduleRequest, CreateVisitorTrainingRequest, UpdateStudentTrainingRequest,
    UpdateVisitorScheduleRequest, UpdateVisitorTrainingRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{TrainingService, VisitService};
use crate::utils::SafeIDI64;

static TRAINING_SERVICE: Lazy<TrainingService> = Lazy::new(TrainingService::new_lazy);
static VISIT_SERVICE: Lazy<VisitService> = Lazy::new(VisitService::new_lazy);

pub async fn student_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.student_index(query.into_inner(), &req).await
}

pub async fn student_store(
    req: HttpRequest,
    data: web::Json<CreateStudentTrainingRequest>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.student_store(data.into_inner(), &req).await
}

pub async fn student_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateStudentTrainingRequest>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE
        .student_update(id.0, data.into_inner(), &req)
        .await
}

pub async fn student_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.student_destroy(id.0, &req).await
}

pub async fn evaluation_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.evaluation_status(id.0, &req).await
}

pub async fn visitor_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.visitor_index(query.into_inner(), &req).await
}

pub async fn visitor_store(
    req: HttpRequest,
    data: web::Json<CreateVisitorTrainingRequest>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.visitor_store(data.into_inner(), &req).await
}

pub async fn visitor_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateVisitorTrainingRequest>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE
        .visitor_update(id.0, data.into_inner(), &req)
        .await
}

pub async fn visitor_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.visitor_destroy(id.0, &req).await
}

pub async fn visitor_assign(
    req: HttpRequest,
    data: web::Json<AssignVisitorRequest>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.visitor_assign(data.into_inner(), &req).await
}

pub async fn visitor_bulk_assign(
    req: HttpRequest,
    data: web::Json<BulkAssignVisitorRequest>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE
        .visitor_bulk_assign(data.into_inner(), &req)
        .await
}

pub async fn schedule_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.schedule_index(query.into_inner(), &req).await
}

pub async fn schedule_store(
    req: HttpRequest,
    data: web::Json<CreateVisitorScheduleRequest>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.schedule_store(data.into_inner(), &req).await
}

pub async fn schedule_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateVisitorScheduleRequest>,
) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE
        .schedule_update(id.0, data.into_inner(), &req)
        .await
}

pub async fn schedule_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TRAINING_SERVICE.schedule_destroy(id.0, &req).await
}

pub async fn schedule_pictures(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    VISIT_SERVICE.schedule_pictures(id.0, &req).await
}

pub async fn upload_picture(
    req: HttpRequest,
    id: SafeIDI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    VISIT_SERVICE.upload(id.0, payload, &req).await
}

pub fn configure_training_routes(cfg: &mut web::ServiceConfig) {
    // 实习信息由学生本人填写
    cfg.service(
        resource_scope!(
            "/api/v1/student_trainings",
            read: UserRole::all_roles(),
            write: UserRole::all_roles(),
            index: student_index,
            store: student_store,
            update: student_update,
            destroy: student_destroy,
        )
        .route("/{id}/evaluation_status", web::get().to(evaluation_status)),
    );

    cfg.service(resource_scope!(
        "/api/v1/visitor_trainings",
        read: UserRole::all_roles(),
        write: UserRole::instructor_roles(),
        index: visitor_index,
        store: visitor_store,
        update: visitor_update,
        destroy: visitor_destroy,
    ));

    // 指派巡访教师，每条选课至多一名
    cfg.service(
        web::scope("/api/v1/visitor_assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                    .route("", web::post().to(visitor_assign))
                    .route("/bulk", web::post().to(visitor_bulk_assign)),
            ),
    );

    cfg.service(
        resource_scope!(
            "/api/v1/visitor_schedules",
            read: UserRole::all_roles(),
            write: UserRole::instructor_roles(),
            index: schedule_index,
            store: schedule_store,
            update: schedule_update,
            destroy: schedule_destroy,
        )
        .service(
            web::resource("/{id}/pictures")
                .route(web::get().to(schedule_pictures))
                .route(
                    web::post()
                        .to(upload_picture)
                        .wrap(middlewares::RequireRole::new_any(UserRole::instructor_roles()))
                        .wrap(middlewares::RateLimit::file_upload()),
                ),
        ),
    );
}
