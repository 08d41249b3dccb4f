use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OrganizationService;
use crate::models::ErrorCode;
use crate::models::organization::requests::{
    UpdateCampusRequest, UpdateCurriculumRequest, UpdateFacultyRequest, UpdateMajorRequest,
    UpdateProgramRequest,
};
use crate::services::respond_found;

pub async fn update_campus(
    service: &OrganizationService,
    id: i64,
    req: UpdateCampusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.update_campus(id, req).await,
        ErrorCode::NotFound,
        "Campus not found",
        "Campus updated successfully",
    )
}

pub async fn update_faculty(
    service: &OrganizationService,
    id: i64,
    req: UpdateFacultyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.update_faculty(id, req).await,
        ErrorCode::NotFound,
        "Faculty not found",
        "Faculty updated successfully",
    )
}

pub async fn update_program(
    service: &OrganizationService,
    id: i64,
    req: UpdateProgramRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.update_program(id, req).await,
        ErrorCode::NotFound,
        "Program not found",
        "Program updated successfully",
    )
}

pub async fn update_curriculum(
    service: &OrganizationService,
    id: i64,
    req: UpdateCurriculumRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.update_curriculum(id, req).await,
        ErrorCode::NotFound,
        "Curriculum not found",
        "Curriculum updated successfully",
    )
}

pub async fn update_major(
    service: &OrganizationService,
    id: i64,
    req: UpdateMajorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.update_major(id, req).await,
        ErrorCode::NotFound,
        "Major not found",
        "Major updated successfully",
    )
}
