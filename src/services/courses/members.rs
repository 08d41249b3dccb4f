use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, ResponseError};

use super::CourseService;
use crate::models::courses::entities::SectionMemberKind;
use crate::models::courses::requests::AttachInstructorRequest;
use crate::models::{ApiResponse, ErrorCode};

fn already_attached_code(kind: SectionMemberKind) -> ErrorCode {
    match kind {
        SectionMemberKind::Committee => ErrorCode::CommitteeAlreadyAttached,
        SectionMemberKind::Instructor => ErrorCode::InstructorAlreadyAttached,
    }
}

pub async fn handle_attach(
    service: &CourseService,
    kind: SectionMemberKind,
    course_section_id: i64,
    req: AttachInstructorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .attach_section_member(kind, course_section_id, req.instructor_id)
        .await
    {
        Ok(Some(member)) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(member, kind.attached_message()))),
        Ok(None) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            already_attached_code(kind),
            kind.already_attached_message(),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn handle_detach(
    service: &CourseService,
    kind: SectionMemberKind,
    course_section_id: i64,
    instructor_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .detach_section_member(kind, course_section_id, instructor_id)
        .await
    {
        Ok(removed) => {
            tracing::debug!(
                "Detached {removed} row(s) for section {course_section_id}, instructor {instructor_id}"
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(kind.removed_message())))
        }
        Err(e) => Ok(e.error_response()),
    }
}
