use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IndexQuery;
use crate::models::organization::requests::{
    CreateCampusRequest, CreateCurriculumRequest, CreateFacultyRequest, CreateMajorRequest,
    CreateProgramRequest, UpdateCampusRequest, UpdateCurriculumRequest, UpdateFacultyRequest,
    UpdateMajorRequest, UpdateProgramRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::OrganizationService;
use crate::services::organization::OrgResource;
use crate::utils::SafeIDI64;

static ORGANIZATION_SERVICE: Lazy<OrganizationService> =
    Lazy::new(OrganizationService::new_lazy);

pub async fn campus_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .index(OrgResource::Campus, query.into_inner(), &req)
        .await
}

pub async fn campus_store(
    req: HttpRequest,
    data: web::Json<CreateCampusRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .store_campus(data.into_inner(), &req)
        .await
}

pub async fn campus_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateCampusRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .update_campus(id.0, data.into_inner(), &req)
        .await
}

pub async fn campus_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .destroy(OrgResource::Campus, id.0, &req)
        .await
}

pub async fn faculty_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .index(OrgResource::Faculty, query.into_inner(), &req)
        .await
}

pub async fn faculty_store(
    req: HttpRequest,
    data: web::Json<CreateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .store_faculty(data.into_inner(), &req)
        .await
}

pub async fn faculty_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .update_faculty(id.0, data.into_inner(), &req)
        .await
}

pub async fn faculty_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .destroy(OrgResource::Faculty, id.0, &req)
        .await
}

pub async fn program_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .index(OrgResource::Program, query.into_inner(), &req)
        .await
}

pub async fn program_store(
    req: HttpRequest,
    data: web::Json<CreateProgramRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .store_program(data.into_inner(), &req)
        .await
}

pub async fn program_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateProgramRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .update_program(id.0, data.into_inner(), &req)
        .await
}

pub async fn program_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .destroy(OrgResource::Program, id.0, &req)
        .await
}

pub async fn curriculum_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .index(OrgResource::Curriculum, query.into_inner(), &req)
        .await
}

pub async fn curriculum_store(
    req: HttpRequest,
    data: web::Json<CreateCurriculumRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .store_curriculum(data.into_inner(), &req)
        .await
}

pub async fn curriculum_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateCurriculumRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .update_curriculum(id.0, data.into_inner(), &req)
        .await
}

pub async fn curriculum_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .destroy(OrgResource::Curriculum, id.0, &req)
        .await
}

pub async fn major_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .index(OrgResource::Major, query.into_inner(), &req)
        .await
}

pub async fn major_store(
    req: HttpRequest,
    data: web::Json<CreateMajorRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .store_major(data.into_inner(), &req)
        .await
}

pub async fn major_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateMajorRequest>,
) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .update_major(id.0, data.into_inner(), &req)
        .await
}

pub async fn major_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORGANIZATION_SERVICE
        .destroy(OrgResource::Major, id.0, &req)
        .await
}

// 组织架构对所有登录用户可读，仅职员与管理员可写
pub fn configure_organization_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(resource_scope!(
        "/api/v1/campuses",
        read: UserRole::all_roles(),
        write: UserRole::staff_roles(),
        index: campus_index,
        store: campus_store,
        update: campus_update,
        destroy: campus_destroy,
    ));
    cfg.service(resource_scope!(
        "/api/v1/faculties",
        read: UserRole::all_roles(),
        write: UserRole::staff_roles(),
        index: faculty_index,
        store: faculty_store,
        update: faculty_update,
        destroy: faculty_destroy,
    ));
    cfg.service(resource_scope!(
        "/api/v1/programs",
        read: UserRole::all_roles(),
        write: UserRole::staff_roles(),
        index: program_index,
        store: program_store,
        update: program_update,
        destroy: program_destroy,
    ));
    cfg.service(resource_scope!(
        "/api/v1/curriculums",
        read: UserRole::all_roles(),
        write: UserRole::staff_roles(),
        index: curriculum_index,
        store: curriculum_store,
        update: curriculum_update,
        destroy: curriculum_destroy,
    ));
    cfg.service(resource_scope!(
        "/api/v1/majors",
        read: UserRole::all_roles(),
        write: UserRole::staff_roles(),
        index: major_index,
        store: major_store,
        update: major_update,
        destroy: major_destroy,
    ));
}
