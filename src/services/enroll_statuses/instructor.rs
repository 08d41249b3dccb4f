use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EnrollStatusService, resolve_acting_instructor};
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::InstructorStatusQuery;
use crate::models::users::entities::UserRole;
use crate::services::{respond, unauthorized};

// 当前教师负责的审批记录，职员与管理员可查看任意教师
pub async fn handle_instructor_statuses(
    service: &EnrollStatusService,
    query: InstructorStatusQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let may_view_others = RequireJWT::extract_user_role(request)
        .is_some_and(|role| UserRole::staff_roles().contains(&&role));

    let storage = service.get_storage(request);
    let instructor_id =
        match resolve_acting_instructor(&storage, user_id, query.instructor_id, may_view_others)
            .await
        {
            Ok(id) => id,
            Err(resp) => return Ok(resp),
        };

    respond(
        storage
            .list_instructor_statuses(instructor_id, query.status)
            .await,
        "Instructor statuses retrieved successfully",
    )
}
