use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{BulkTarget, EnrollmentService};
use crate::models::grades::{requests::BulkGradeRequest, responses::BulkUpdateResponse};
use crate::services::{bad_request, respond};

pub async fn handle_bulk_update(
    service: &EnrollmentService,
    target: BulkTarget,
    req: BulkGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let value = match req.validate() {
        Ok(value) => value,
        Err((code, msg)) => return Ok(bad_request(code, msg)),
    };

    let storage = service.get_storage(request);
    let (result, message) = match target {
        BulkTarget::Grade => (
            storage.bulk_update_grades(&req.ids, value).await,
            "Grades updated successfully",
        ),
        BulkTarget::Attendance => (
            storage.bulk_update_attendance(&req.ids, value).await,
            "Attendance updated successfully",
        ),
    };

    if let Ok(affected) = &result {
        info!(
            "Bulk {:?} update: {} of {} enrollment(s) written",
            target,
            affected,
            req.ids.len()
        );
    }

    respond(result.map(|affected| BulkUpdateResponse { affected }), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::memory_storage;
    use actix_web::{body::to_bytes, http::StatusCode, test};

    #[actix_web::test]
    async fn test_empty_request_rejected_without_writes() {
        let storage = memory_storage().await;
        let service = EnrollmentService::with_storage(storage);
        let request = test::TestRequest::default().to_http_request();

        let resp = service
            .bulk_update(
                BulkTarget::Grade,
                BulkGradeRequest {
                    ids: vec![],
                    grade: "A".to_string(),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = service
            .bulk_update(
                BulkTarget::Attendance,
                BulkGradeRequest {
                    ids: vec![1],
                    grade: " ".to_string(),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_ids_ignored() {
        let storage = memory_storage().await;
        let service = EnrollmentService::with_storage(storage);
        let request = test::TestRequest::default().to_http_request();

        let resp = service
            .bulk_update(
                BulkTarget::Grade,
                BulkGradeRequest {
                    ids: vec![404, 405],
                    grade: "S".to_string(),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["affected"], 0);
    }
}
