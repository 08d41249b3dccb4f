use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{OrgResource, OrganizationService};
use crate::models::ErrorCode;
use crate::services::respond_deleted;

pub async fn handle_destroy(
    service: &OrganizationService,
    resource: OrgResource,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let result = match resource {
        OrgResource::Campus => storage.delete_campus(id).await,
        OrgResource::Faculty => storage.delete_faculty(id).await,
        OrgResource::Program => storage.delete_program(id).await,
        OrgResource::Curriculum => storage.delete_curriculum(id).await,
        OrgResource::Major => storage.delete_major(id).await,
    };

    respond_deleted(
        result,
        ErrorCode::NotFound,
        &format!("{} not found", resource.label()),
        &format!("{} deleted successfully", resource.label()),
    )
}
