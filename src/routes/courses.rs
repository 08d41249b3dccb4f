use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::IndexQuery;
use crate::models::courses::entities::SectionMemberKind;
use crate::models::courses::requests::{
    AttachInstructorRequest, CreateCourseRequest, CreateCourseSectionRequest, UpdateCourseRequest,
    UpdateCourseSectionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::{SafeIDI64, SafeInstructorIdI64};

static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn course_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.index(query.into_inner(), &req).await
}

pub async fn course_store(
    req: HttpRequest,
    data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.store(data.into_inner(), &req).await
}

pub async fn course_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.update(id.0, data.into_inner(), &req).await
}

pub async fn course_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.destroy(id.0, &req).await
}

pub async fn section_index(
    req: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.section_index(query.into_inner(), &req).await
}

pub async fn section_store(
    req: HttpRequest,
    data: web::Json<CreateCourseSectionRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.section_store(data.into_inner(), &req).await
}

pub async fn section_update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateCourseSectionRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .section_update(id.0, data.into_inner(), &req)
        .await
}

pub async fn section_destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.section_destroy(id.0, &req).await
}

pub async fn attach_committee(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<AttachInstructorRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .attach_member(SectionMemberKind::Committee, id.0, data.into_inner(), &req)
        .await
}

pub async fn detach_committee(
    req: HttpRequest,
    id: SafeIDI64,
    instructor_id: SafeInstructorIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .detach_member(SectionMemberKind::Committee, id.0, instructor_id.0, &req)
        .await
}

pub async fn attach_instructor(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<AttachInstructorRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .attach_member(SectionMemberKind::Instructor, id.0, data.into_inner(), &req)
        .await
}

pub async fn detach_instructor(
    req: HttpRequest,
    id: SafeIDI64,
    instructor_id: SafeInstructorIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .detach_member(SectionMemberKind::Instructor, id.0, instructor_id.0, &req)
        .await
}

pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(resource_scope!(
        "/api/v1/courses",
        read: UserRole::all_roles(),
        write: UserRole::staff_roles(),
        index: course_index,
        store: course_store,
        update: course_update,
        destroy: course_destroy,
    ));

    // 课程班成员（授课教师与委员会）由职员维护
    cfg.service(
        resource_scope!(
            "/api/v1/course_sections",
            read: UserRole::all_roles(),
            write: UserRole::staff_roles(),
            index: section_index,
            store: section_store,
            update: section_update,
            destroy: section_destroy,
        )
        .service(
            web::scope("/{id}")
                .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                .route("/committees", web::post().to(attach_committee))
                .route(
                    "/committees/{instructor_id}",
                    web::delete().to(detach_committee),
                )
                .route("/instructors", web::post().to(attach_instructor))
                .route(
                    "/instructors/{instructor_id}",
                    web::delete().to(detach_instructor),
                ),
        ),
    );
}
