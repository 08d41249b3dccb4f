use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::evaluations::requests::{
    CreateEvaluationRequest, UpdateEvaluationRequest, validate_score,
};
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_created, respond_deleted, respond_found};

super::define_service!(EvaluationService);

impl EvaluationService {
    pub async fn index(&self, query: IndexQuery, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match query.id {
            Some(id) => respond_found(
                storage.get_evaluation(id).await,
                ErrorCode::NotFound,
                "Evaluation not found",
                "Evaluation retrieved successfully",
            ),
            None => respond(
                storage.list_evaluations().await,
                "Evaluations retrieved successfully",
            ),
        }
    }

    pub async fn store(
        &self,
        req: CreateEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if req.question.trim().is_empty() {
            return Ok(bad_request(ErrorCode::ValidationFailed, "question is required"));
        }
        if let Err(msg) = validate_score(req.score) {
            return Ok(bad_request(ErrorCode::ValidationFailed, msg));
        }

        let storage = self.get_storage(request);
        respond_created(
            storage.create_evaluation(req).await,
            "Evaluation created successfully",
        )
    }

    pub async fn update(
        &self,
        id: i64,
        req: UpdateEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(msg) = validate_score(req.score) {
            return Ok(bad_request(ErrorCode::ValidationFailed, msg));
        }

        let storage = self.get_storage(request);
        respond_found(
            storage.update_evaluation(id, req).await,
            ErrorCode::NotFound,
            "Evaluation not found",
            "Evaluation updated successfully",
        )
    }

    pub async fn destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        respond_deleted(
            storage.delete_evaluation(id).await,
            ErrorCode::NotFound,
            "Evaluation not found",
            "Evaluation deleted successfully",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluations::entities::Evaluator;
    use crate::services::test_support::memory_storage;
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn test_out_of_range_score_rejected() {
        let service = EvaluationService::with_storage(memory_storage().await);
        let request = test::TestRequest::default().to_http_request();

        let resp = service
            .store(
                CreateEvaluationRequest {
                    student_training_id: 1,
                    evaluator: Evaluator::Student,
                    question: "Workplace safety".to_string(),
                    score: Some(120),
                    comment: None,
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
