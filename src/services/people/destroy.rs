use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PeopleService, PersonKind};
use crate::models::ErrorCode;
use crate::services::respond_deleted;

pub async fn handle_destroy(
    service: &PeopleService,
    kind: PersonKind,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (result, code) = match kind {
        PersonKind::Student => (storage.delete_student(id).await, ErrorCode::StudentNotFound),
        PersonKind::Instructor => (
            storage.delete_instructor(id).await,
            ErrorCode::InstructorNotFound,
        ),
        PersonKind::Staff => (storage.delete_staff(id).await, ErrorCode::NotFound),
    };

    respond_deleted(
        result,
        code,
        &format!("{} not found", kind.label()),
        &format!("{} deleted successfully", kind.label()),
    )
}
