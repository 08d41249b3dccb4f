use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::models::ErrorCode;
use crate::models::enrollments::requests::CreateStudentEnrollRequest;
use crate::services::{bad_request, respond_created};

pub async fn handle_store(
    service: &EnrollmentService,
    req: CreateStudentEnrollRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(training) = &req.training
        && let Err(msg) = training.validate()
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    if req.company_id.is_none()
        && let Some(company) = &req.company
        && company.company_name_th.trim().is_empty()
    {
        return Ok(bad_request(
            ErrorCode::ValidationFailed,
            "company_name_th is required",
        ));
    }

    let storage = service.get_storage(request);
    let result = storage.create_student_enroll(req).await;
    if let Ok(created) = &result {
        info!(
            "Student enrollment {} created with {} approval record(s)",
            created.enroll.id, created.status_count
        );
    }

    respond_created(result, "Student enrollment created successfully")
}
