//! 实习安排与巡访记录

pub mod schedules;
pub mod student;
pub mod visitor;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::IndexQuery;
use crate::models::trainings::requests::{
    AssignVisitorRequest, BulkAssignVisitorRequest, CreateStudentTrainingRequest,
    CreateVisitorScheduleRequest, CreateVisitorTrainingRequest, UpdateStudentTrainingRequest,
    UpdateVisitorScheduleRequest, UpdateVisitorTrainingRequest,
};

super::define_service!(TrainingService);

impl TrainingService {
    pub async fn student_index(
        &self,
        query: IndexQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::handle_index(self, query, request).await
    }

    pub async fn student_store(
        &self,
        req: CreateStudentTrainingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::handle_store(self, req, request).await
    }

    pub async fn student_update(
        &self,
        id: i64,
        req: UpdateStudentTrainingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::handle_update(self, id, req, request).await
    }

    pub async fn student_destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        student::handle_destroy(self, id, request).await
    }

    // 学生是否已完成对实习单位的评价
    pub async fn evaluation_status(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::handle_evaluation_status(self, id, request).await
    }

    pub async fn visitor_index(
        &self,
        query: IndexQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        visitor::handle_index(self, query, request).await
    }

    pub async fn visitor_store(
        &self,
        req: CreateVisitorTrainingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        visitor::handle_store(self, req, request).await
    }

    pub async fn visitor_update(
        &self,
        id: i64,
        req: UpdateVisitorTrainingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        visitor::handle_update(self, id, req, request).await
    }

    pub async fn visitor_destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        visitor::handle_destroy(self, id, request).await
    }

    // 每条选课只指派一次，重复指派返回原有记录
    pub async fn visitor_assign(
        &self,
        req: AssignVisitorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        visitor::handle_assign(self, req, request).await
    }

    pub async fn visitor_bulk_assign(
        &self,
        req: BulkAssignVisitorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        visitor::handle_bulk_assign(self, req, request).await
    }

    pub async fn schedule_index(
        &self,
        query: IndexQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        schedules::handle_index(self, query, request).await
    }

    pub async fn schedule_store(
        &self,
        req: CreateVisitorScheduleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        schedules::handle_store(self, req, request).await
    }

    pub async fn schedule_update(
        &self,
        id: i64,
        req: UpdateVisitorScheduleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        schedules::handle_update(self, id, req, request).await
    }

    pub async fn schedule_destroy(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        schedules::handle_destroy(self, id, request).await
    }
}
