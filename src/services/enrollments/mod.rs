//! 学生选课：复合创建、批量成绩与出勤、审批汇总

pub mod approval;
pub mod bulk;
pub mod store;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::enrollments::requests::{
    CreateStudentEnrollRequest, UpdateStudentEnrollRequest,
};
use crate::models::grades::requests::BulkGradeRequest;
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_deleted, respond_found};

super::define_service!(EnrollmentService);

/// 批量写入的目标列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkTarget {
    Grade,
    Attendance,
}

impl EnrollmentService {
    pub async fn index(&self, query: IndexQuery, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match query.id {
            Some(id) => respond_found(
                storage.get_student_enroll_detail(id).await,
                ErrorCode::StudentEnrollNotFound,
                "Student enrollment not found",
                "Student enrollment retrieved successfully",
            ),
            None => respond(
                storage.list_student_enrolls().await,
                "Student enrollments retrieved successfully",
            ),
        }
    }

    pub async fn store(
        &self,
        req: CreateStudentEnrollRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::handle_store(self, req, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        req: UpdateStudentEnrollRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Some(training) = &req.training
            && let Err(msg) = training.validate()
        {
            return Ok(bad_request(ErrorCode::ValidationFailed, msg));
        }

        let storage = self.get_storage(request);
        respond_found(
            storage.update_student_enroll(id, req).await,
            ErrorCode::StudentEnrollNotFound,
            "Student enrollment not found",
            "Student enrollment updated successfully",
        )
    }

    pub async fn destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        respond_deleted(
            storage.delete_student_enroll(id).await,
            ErrorCode::StudentEnrollNotFound,
            "Student enrollment not found",
            "Student enrollment deleted successfully",
        )
    }

    pub async fn bulk_update(
        &self,
        target: BulkTarget,
        req: BulkGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk::handle_bulk_update(self, target, req, request).await
    }

    pub async fn approval_summary(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approval::handle_approval_summary(self, id, request).await
    }

    pub async fn assignment_history(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approval::handle_assignment_history(self, id, request).await
    }
}
