use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PeopleService, validate_profile};
use crate::models::ErrorCode;
use crate::models::people::requests::{
    UpdateInstructorRequest, UpdateStaffRequest, UpdateStudentRequest,
};
use crate::services::{bad_request, respond_found};

pub async fn update_student(
    service: &PeopleService,
    id: i64,
    req: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_profile(req.student_code.as_deref(), req.email.as_deref(), req.gpax)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_found(
        storage.update_student(id, req).await,
        ErrorCode::StudentNotFound,
        "Student not found",
        "Student updated successfully",
    )
}

pub async fn update_instructor(
    service: &PeopleService,
    id: i64,
    req: UpdateInstructorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_profile(req.staff_code.as_deref(), req.email.as_deref(), None) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_found(
        storage.update_instructor(id, req).await,
        ErrorCode::InstructorNotFound,
        "Instructor not found",
        "Instructor updated successfully",
    )
}

pub async fn update_staff(
    service: &PeopleService,
    id: i64,
    req: UpdateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_profile(req.staff_code.as_deref(), req.email.as_deref(), None) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_found(
        storage.update_staff(id, req).await,
        ErrorCode::NotFound,
        "Staff not found",
        "Staff updated successfully",
    )
}
