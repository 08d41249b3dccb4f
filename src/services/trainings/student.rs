use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TrainingService;
use crate::models::trainings::requests::{
    CreateStudentTrainingRequest, UpdateStudentTrainingRequest,
};
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_created, respond_deleted, respond_found};

const NOT_FOUND: &str = "Student training not found";

pub async fn handle_index(
    service: &TrainingService,
    query: IndexQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match query.id {
        Some(id) => respond_found(
            storage.get_student_training_detail(id).await,
            ErrorCode::StudentTrainingNotFound,
            NOT_FOUND,
            "Student training retrieved successfully",
        ),
        None => respond(
            storage.list_student_trainings().await,
            "Student trainings retrieved successfully",
        ),
    }
}

pub async fn handle_store(
    service: &TrainingService,
    req: CreateStudentTrainingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = req.fields.validate() {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    // 每个选课记录只能有一条实习安排，重复创建由唯一索引拒绝为 409
    let storage = service.get_storage(request);
    respond_created(
        storage.create_student_training(req).await,
        "Student training created successfully",
    )
}

pub async fn handle_update(
    service: &TrainingService,
    id: i64,
    req: UpdateStudentTrainingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = req.fields.validate() {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_found(
        storage.update_student_training(id, req).await,
        ErrorCode::StudentTrainingNotFound,
        NOT_FOUND,
        "Student training updated successfully",
    )
}

pub async fn handle_destroy(
    service: &TrainingService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_deleted(
        storage.delete_student_training(id).await,
        ErrorCode::StudentTrainingNotFound,
        NOT_FOUND,
        "Student training deleted successfully",
    )
}

pub async fn handle_evaluation_status(
    service: &TrainingService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.get_evaluation_status(id).await,
        ErrorCode::StudentTrainingNotFound,
        NOT_FOUND,
        "Evaluation status retrieved successfully",
    )
}
