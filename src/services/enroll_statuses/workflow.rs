use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EnrollStatusService, resolve_acting_instructor};
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::{
    ChangeInstructorRequest, CommitteeVoteRequest, TransitionStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::ErrorCode;
use crate::services::{respond_found, unauthorized};

const NOT_FOUND: &str = "Enrollment status not found";

pub async fn handle_transition(
    service: &EnrollStatusService,
    id: i64,
    req: TransitionStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(changed_by) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);
    let result = storage
        .transition_enroll_status(id, req.status, changed_by, req.reason)
        .await;
    if let Ok(Some(status)) = &result {
        info!(
            "Enrollment status {} moved to {} by user {}",
            id,
            status.status.as_str(),
            changed_by
        );
    }

    respond_found(
        result,
        ErrorCode::EnrollStatusNotFound,
        NOT_FOUND,
        "Status changed successfully",
    )
}

pub async fn handle_vote(
    service: &EnrollStatusService,
    id: i64,
    req: CommitteeVoteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(changed_by) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    // 只有管理员可以代其他教师投票
    let is_admin = RequireJWT::extract_user_role(request) == Some(UserRole::Admin);
    let instructor_id =
        match resolve_acting_instructor(&storage, changed_by, req.instructor_id, is_admin).await {
            Ok(id) => id,
            Err(resp) => return Ok(resp),
        };

    respond_found(
        storage
            .cast_committee_vote(id, instructor_id, req.vote, req.remarks, changed_by)
            .await,
        ErrorCode::EnrollStatusNotFound,
        NOT_FOUND,
        "Committee vote recorded",
    )
}

pub async fn handle_change_instructor(
    service: &EnrollStatusService,
    id: i64,
    req: ChangeInstructorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(changed_by) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);
    respond_found(
        storage
            .change_status_instructor(id, req.new_instructor_id, changed_by, req.reason)
            .await,
        ErrorCode::EnrollStatusNotFound,
        NOT_FOUND,
        "Instructor changed successfully",
    )
}
