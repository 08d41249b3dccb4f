use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::ErrorCode;
use crate::services::respond_found;

// 汇总该选课记录下所有教师的审批结果
pub async fn handle_approval_summary(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.get_approval_summary(id).await,
        ErrorCode::StudentEnrollNotFound,
        "Student enrollment not found",
        "Approval summary retrieved successfully",
    )
}

// 指导教师变更历史，最新的在前
pub async fn handle_assignment_history(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.get_assignment_history(id).await,
        ErrorCode::StudentEnrollNotFound,
        "Student enrollment not found",
        "Assignment history retrieved successfully",
    )
}
