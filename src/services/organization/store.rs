use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OrganizationService;
use crate::models::organization::requests::{
    CreateCampusRequest, CreateCurriculumRequest, CreateFacultyRequest, CreateMajorRequest,
    CreateProgramRequest,
};
use crate::services::respond_created;

pub async fn store_campus(
    service: &OrganizationService,
    req: CreateCampusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_created(storage.create_campus(req).await, "Campus created successfully")
}

pub async fn store_faculty(
    service: &OrganizationService,
    req: CreateFacultyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_created(storage.create_faculty(req).await, "Faculty created successfully")
}

pub async fn store_program(
    service: &OrganizationService,
    req: CreateProgramRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_created(storage.create_program(req).await, "Program created successfully")
}

pub async fn store_curriculum(
    service: &OrganizationService,
    req: CreateCurriculumRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_created(
        storage.create_curriculum(req).await,
        "Curriculum created successfully",
    )
}

pub async fn store_major(
    service: &OrganizationService,
    req: CreateMajorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_created(storage.create_major(req).await, "Major created successfully")
}
