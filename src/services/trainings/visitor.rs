use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::TrainingService;
use crate::models::trainings::requests::{
    AssignVisitorRequest, BulkAssignVisitorRequest, CreateVisitorTrainingRequest,
    UpdateVisitorTrainingRequest,
};
use crate::models::{ApiResponse, ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_created, respond_deleted, respond_found};

pub async fn handle_index(
    service: &TrainingService,
    query: IndexQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match query.id {
        Some(id) => respond_found(
            storage.get_visitor_training_detail(id).await,
            ErrorCode::NotFound,
            "Visitor training not found",
            "Visitor training retrieved successfully",
        ),
        None => respond(
            storage.list_visitor_trainings().await,
            "Visitor trainings retrieved successfully",
        ),
    }
}

pub async fn handle_store(
    service: &TrainingService,
    req: CreateVisitorTrainingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_created(
        storage.create_visitor_training(req).await,
        "Visitor training created successfully",
    )
}

pub async fn handle_update(
    service: &TrainingService,
    id: i64,
    req: UpdateVisitorTrainingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_found(
        storage.update_visitor_training(id, req).await,
        ErrorCode::NotFound,
        "Visitor training not found",
        "Visitor training updated successfully",
    )
}

pub async fn handle_destroy(
    service: &TrainingService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_deleted(
        storage.delete_visitor_training(id).await,
        ErrorCode::NotFound,
        "Visitor training not found",
        "Visitor training deleted successfully",
    )
}

pub async fn handle_assign(
    service: &TrainingService,
    req: AssignVisitorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage
        .assign_visitor(req.student_enroll_id, req.visitor_instructor_id)
        .await
    {
        Ok(assignment) if assignment.created => {
            info!(
                "Visitor {} assigned to student enrollment {}",
                req.visitor_instructor_id, req.student_enroll_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "Visitor assigned")))
        }
        Ok(assignment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Visitor already assigned for this student enrollment",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn handle_bulk_assign(
    service: &TrainingService,
    req: BulkAssignVisitorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if req.student_enroll_ids.is_empty() {
        return Ok(bad_request(
            ErrorCode::ValidationFailed,
            "student_enroll_ids must be a non-empty array",
        ));
    }

    let storage = service.get_storage(request);
    let result = storage
        .bulk_assign_visitor(&req.student_enroll_ids, req.visitor_instructor_id)
        .await;
    let message = match &result {
        Ok(summary) if summary.created_ids.is_empty() => "No new assignments created",
        Ok(summary) => {
            info!(
                "Visitor {} assigned to {} student enrollment(s)",
                req.visitor_instructor_id,
                summary.created_ids.len()
            );
            "Visitor assigned to selected students"
        }
        Err(_) => "",
    };

    respond(result, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::memory_storage;
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn test_bulk_assign_rejects_empty_ids() {
        let storage = memory_storage().await;
        let service = TrainingService::with_storage(storage);
        let request = test::TestRequest::default().to_http_request();

        let resp = service
            .visitor_bulk_assign(
                BulkAssignVisitorRequest {
                    student_enroll_ids: vec![],
                    visitor_instructor_id: 1,
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_assign_unknown_visitor_is_not_found() {
        let storage = memory_storage().await;
        let service = TrainingService::with_storage(storage);
        let request = test::TestRequest::default().to_http_request();

        let resp = service
            .visitor_assign(
                AssignVisitorRequest {
                    student_enroll_id: 1,
                    visitor_instructor_id: 99,
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
