//! 课程、课程班，以及课程班的授课教师与委员会

pub mod members;
pub mod sections;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::courses::entities::SectionMemberKind;
use crate::models::courses::requests::{
    AttachInstructorRequest, CreateCourseRequest, CreateCourseSectionRequest, UpdateCourseRequest,
    UpdateCourseSectionRequest,
};
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_created, respond_deleted, respond_found};

super::define_service!(CourseService);

impl CourseService {
    pub async fn index(&self, query: IndexQuery, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match query.id {
            Some(id) => respond_found(
                storage.get_course_detail(id).await,
                ErrorCode::NotFound,
                "Course not found",
                "Course retrieved successfully",
            ),
            None => respond(storage.list_courses().await, "Courses retrieved successfully"),
        }
    }

    pub async fn store(
        &self,
        mut req: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        req.course_code = req.course_code.trim().to_string();
        if req.course_code.is_empty() || req.course_name_th.trim().is_empty() {
            return Ok(bad_request(
                ErrorCode::ValidationFailed,
                "course_code and course_name_th are required",
            ));
        }

        let storage = self.get_storage(request);
        respond_created(storage.create_course(req).await, "Course created successfully")
    }

    pub async fn update(
        &self,
        id: i64,
        req: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        respond_found(
            storage.update_course(id, req).await,
            ErrorCode::NotFound,
            "Course not found",
            "Course updated successfully",
        )
    }

    pub async fn destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        respond_deleted(
            storage.delete_course(id).await,
            ErrorCode::NotFound,
            "Course not found",
            "Course deleted successfully",
        )
    }

    pub async fn section_index(
        &self,
        query: IndexQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sections::handle_index(self, query, request).await
    }

    pub async fn section_store(
        &self,
        req: CreateCourseSectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sections::handle_store(self, req, request).await
    }

    pub async fn section_update(
        &self,
        id: i64,
        req: UpdateCourseSectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sections::handle_update(self, id, req, request).await
    }

    pub async fn section_destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        sections::handle_destroy(self, id, request).await
    }

    // 关联教师，已存在关联时不再插入
    pub async fn attach_member(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
        req: AttachInstructorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::handle_attach(self, kind, course_section_id, req, request).await
    }

    // 解除关联，幂等
    pub async fn detach_member(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
        instructor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::handle_detach(self, kind, course_section_id, instructor_id, request).await
    }
}
