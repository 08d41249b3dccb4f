use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TrainingService;
use crate::models::trainings::requests::{
    CreateVisitorScheduleRequest, UpdateVisitorScheduleRequest,
};
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_created, respond_deleted, respond_found};

const NOT_FOUND: &str = "Visitor schedule not found";

pub async fn handle_index(
    service: &TrainingService,
    query: IndexQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match query.id {
        Some(id) => respond_found(
            storage.get_visitor_schedule_detail(id).await,
            ErrorCode::VisitorScheduleNotFound,
            NOT_FOUND,
            "Visitor schedule retrieved successfully",
        ),
        None => respond(
            storage.list_visitor_schedules().await,
            "Visitor schedules retrieved successfully",
        ),
    }
}

pub async fn handle_store(
    service: &TrainingService,
    req: CreateVisitorScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if req.visit_no < 1 {
        return Ok(bad_request(
            ErrorCode::ValidationFailed,
            "visit_no must be at least 1",
        ));
    }

    let storage = service.get_storage(request);
    respond_created(
        storage.create_visitor_schedule(req).await,
        "Visitor schedule created successfully",
    )
}

pub async fn handle_update(
    service: &TrainingService,
    id: i64,
    req: UpdateVisitorScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if matches!(req.visit_no, Some(n) if n < 1) {
        return Ok(bad_request(
            ErrorCode::ValidationFailed,
            "visit_no must be at least 1",
        ));
    }

    let storage = service.get_storage(request);
    respond_found(
        storage.update_visitor_schedule(id, req).await,
        ErrorCode::VisitorScheduleNotFound,
        NOT_FOUND,
        "Visitor schedule updated successfully",
    )
}

// 照片记录随巡访安排级联删除，磁盘文件保留
pub async fn handle_destroy(
    service: &TrainingService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_deleted(
        storage.delete_visitor_schedule(id).await,
        ErrorCode::VisitorScheduleNotFound,
        NOT_FOUND,
        "Visitor schedule deleted successfully",
    )
}
