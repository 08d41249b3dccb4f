use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{OrgResource, OrganizationService};
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{respond, respond_found};

pub async fn handle_index(
    service: &OrganizationService,
    resource: OrgResource,
    query: IndexQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let not_found = format!("{} not found", resource.label());

    match (resource, query.id) {
        (OrgResource::Campus, Some(id)) => respond_found(
            storage.get_campus_detail(id).await,
            ErrorCode::NotFound,
            &not_found,
            "Campus retrieved successfully",
        ),
        (OrgResource::Campus, None) => {
            respond(storage.list_campuses().await, "Campuses retrieved successfully")
        }
        (OrgResource::Faculty, Some(id)) => respond_found(
            storage.get_faculty_detail(id).await,
            ErrorCode::NotFound,
            &not_found,
            "Faculty retrieved successfully",
        ),
        (OrgResource::Faculty, None) => {
            respond(storage.list_faculties().await, "Faculties retrieved successfully")
        }
        (OrgResource::Program, Some(id)) => respond_found(
            storage.get_program_detail(id).await,
            ErrorCode::NotFound,
            &not_found,
            "Program retrieved successfully",
        ),
        (OrgResource::Program, None) => {
            respond(storage.list_programs().await, "Programs retrieved successfully")
        }
        (OrgResource::Curriculum, Some(id)) => respond_found(
            storage.get_curriculum_detail(id).await,
            ErrorCode::NotFound,
            &not_found,
            "Curriculum retrieved successfully",
        ),
        (OrgResource::Curriculum, None) => respond(
            storage.list_curriculums().await,
            "Curriculums retrieved successfully",
        ),
        (OrgResource::Major, Some(id)) => respond_found(
            storage.get_major_detail(id).await,
            ErrorCode::NotFound,
            &not_found,
            "Major retrieved successfully",
        ),
        (OrgResource::Major, None) => {
            respond(storage.list_majors().await, "Majors retrieved successfully")
        }
    }
}
