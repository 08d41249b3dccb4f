use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PeopleService, PersonKind};
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{respond, respond_found};

pub async fn handle_index(
    service: &PeopleService,
    kind: PersonKind,
    query: IndexQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match (kind, query.id) {
        (PersonKind::Student, Some(id)) => respond_found(
            storage.get_student_detail(id).await,
            ErrorCode::StudentNotFound,
            "Student not found",
            "Student retrieved successfully",
        ),
        (PersonKind::Student, None) => {
            respond(storage.list_students().await, "Students retrieved successfully")
        }
        (PersonKind::Instructor, Some(id)) => respond_found(
            storage.get_instructor_detail(id).await,
            ErrorCode::InstructorNotFound,
            "Instructor not found",
            "Instructor retrieved successfully",
        ),
        (PersonKind::Instructor, None) => respond(
            storage.list_instructors().await,
            "Instructors retrieved successfully",
        ),
        (PersonKind::Staff, Some(id)) => respond_found(
            storage.get_staff_detail(id).await,
            ErrorCode::NotFound,
            "Staff not found",
            "Staff retrieved successfully",
        ),
        (PersonKind::Staff, None) => {
            respond(storage.list_staffs().await, "Staffs retrieved successfully")
        }
    }
}
