use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IndexQuery;
use crate::models::people::requests::{
    CreateInstructorRequest, CreateStaffRequest, CreateStudentRequest, UpdateInstructorRequest,
    UpdateStaffRequest, UpdateStudentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::PeopleService;
use crate::services::people::PersonKind;
use crate::utils::SafeIDI64;

static PEOPLE_SERVICE: Lazy<PeopleService> = Lazy::new(PeopleService::new_lazy);

pub async fn student_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE
        .index(PersonKind::Student, query.into_inner(), &req)
        .await
}

pub async fn student_store(
    req: HttpRequest,
    data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE.store_student(data.into_inner(), &req).await
}

pub async fn student_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE
        .update_student(id.0, data.into_inner(), &req)
        .await
}

pub async fn student_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE.destroy(PersonKind::Student, id.0, &req).await
}

pub async fn instructor_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE
        .index(PersonKind::Instructor, query.into_inner(), &req)
        .await
}

pub async fn instructor_store(
    req: HttpRequest,
    data: web::Json<CreateInstructorRequest>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE.store_instructor(data.into_inner(), &req).await
}

pub async fn instructor_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateInstructorRequest>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE
        .update_instructor(id.0, data.into_inner(), &req)
        .await
}

pub async fn instructor_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE.destroy(PersonKind::Instructor, id.0, &req).await
}

pub async fn staff_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE
        .index(PersonKind::Staff, query.into_inner(), &req)
        .await
}

pub async fn staff_store(
    req: HttpRequest,
    data: web::Json<CreateStaffRequest>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE.store_staff(data.into_inner(), &req).await
}

pub async fn staff_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateStaffRequest>,
) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE
        .update_staff(id.0, data.into_inner(), &req)
        .await
}

pub async fn staff_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PEOPLE_SERVICE.destroy(PersonKind::Staff, id.0, &req).await
}

// 学生名单对教师可见；档案由职员维护
pub fn configure_people_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(resource_scope!(
        "/api/v1/students",
        read: UserRole::instructor_roles(),
        write: UserRole::staff_roles(),
        index: student_index,
        store: student_store,
        update: student_update,
        destroy: student_destroy,
    ));
    cfg.service(resource_scope!(
        "/api/v1/instructors",
        read: UserRole::instructor_roles(),
        write: UserRole::staff_roles(),
        index: instructor_index,
        store: instructor_store,
        update: instructor_update,
        destroy: instructor_destroy,
    ));
    cfg.service(resource_scope!(
        "/api/v1/staffs",
        read: UserRole::instructor_roles(),
        write: UserRole::staff_roles(),
        index: staff_index,
        store: staff_store,
        update: staff_update,
        destroy: staff_destroy,
    ));
}
