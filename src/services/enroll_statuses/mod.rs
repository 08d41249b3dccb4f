//! 审批记录及其流转、委员会投票、指导教师变更

pub mod instructor;
pub mod workflow;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use crate::models::enrollments::requests::{
    ChangeInstructorRequest, CommitteeVoteRequest, CreateEnrollStatusRequest,
    InstructorStatusQuery, TransitionStatusRequest, UpdateEnrollStatusRequest,
};
use crate::models::{ApiResponse, ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_created, respond_deleted, respond_found};
use crate::storage::Storage;

super::define_service!(EnrollStatusService);

/// 确定以哪位教师的身份操作
///
/// 未指定时取当前用户的教师档案；指定他人需要 `may_act_for_others`。
pub(crate) async fn resolve_acting_instructor(
    storage: &Arc<dyn Storage>,
    user_id: i64,
    requested: Option<i64>,
    may_act_for_others: bool,
) -> std::result::Result<i64, HttpResponse> {
    if let Some(id) = requested
        && may_act_for_others
    {
        return Ok(id);
    }

    let own = storage
        .get_instructor_by_user_id(user_id)
        .await
        .map_err(|e| e.error_response())?;
    match (requested, own) {
        (Some(id), Some(own)) if id == own.id => Ok(id),
        (Some(_), _) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only act on your own instructor profile",
        ))),
        (None, Some(own)) => Ok(own.id),
        (None, None) => Err(bad_request(
            ErrorCode::InstructorNotFound,
            "Current user has no instructor profile",
        )),
    }
}

impl EnrollStatusService {
    pub async fn index(&self, query: IndexQuery, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match query.id {
            Some(id) => respond_found(
                storage.get_enroll_status_detail(id).await,
                ErrorCode::EnrollStatusNotFound,
                "Enrollment status not found",
                "Enrollment status retrieved successfully",
            ),
            None => respond(
                storage.list_enroll_statuses().await,
                "Enrollment statuses retrieved successfully",
            ),
        }
    }

    pub async fn store(
        &self,
        req: CreateEnrollStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if matches!(req.required_committee_votes, Some(n) if n < 1) {
            return Ok(bad_request(
                ErrorCode::ValidationFailed,
                "required_committee_votes must be at least 1",
            ));
        }

        let storage = self.get_storage(request);
        respond_created(
            storage.create_enroll_status(req).await,
            "Enrollment status created successfully",
        )
    }

    pub async fn update(
        &self,
        id: i64,
        req: UpdateEnrollStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if matches!(req.required_committee_votes, Some(n) if n < 1) {
            return Ok(bad_request(
                ErrorCode::ValidationFailed,
                "required_committee_votes must be at least 1",
            ));
        }

        let storage = self.get_storage(request);
        respond_found(
            storage.update_enroll_status(id, req).await,
            ErrorCode::EnrollStatusNotFound,
            "Enrollment status not found",
            "Enrollment status updated successfully",
        )
    }

    pub async fn destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        respond_deleted(
            storage.delete_enroll_status(id).await,
            ErrorCode::EnrollStatusNotFound,
            "Enrollment status not found",
            "Enrollment status deleted successfully",
        )
    }

    pub async fn transition(
        &self,
        id: i64,
        req: TransitionStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        workflow::handle_transition(self, id, req, request).await
    }

    pub async fn vote(
        &self,
        id: i64,
        req: CommitteeVoteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        workflow::handle_vote(self, id, req, request).await
    }

    pub async fn instructor_statuses(
        &self,
        query: InstructorStatusQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        instructor::handle_instructor_statuses(self, query, request).await
    }

    pub async fn change_instructor(
        &self,
        id: i64,
        req: ChangeInstructorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        workflow::handle_change_instructor(self, id, req, request).await
    }
}
