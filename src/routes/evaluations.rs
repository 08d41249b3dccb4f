use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IndexQuery;
use crate::models::evaluations::requests::{CreateEvaluationRequest, UpdateEvaluationRequest};
use crate::models::users::entities::UserRole;
use crate::services::EvaluationService;
use crate::utils::SafeIDI64;

static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn index(req: HttpRequest, query: web::Query<IndexQuery>) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.index(query.into_inner(), &req).await
}

pub async fn store(
    req: HttpRequest,
    data: web::Json<CreateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.store(data.into_inner(), &req).await
}

pub async fn update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .update(id.0, data.into_inner(), &req)
        .await
}

pub async fn destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.destroy(id.0, &req).await
}

// 学生评价实习单位，巡访教师评价学生
pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(resource_scope!(
        "/api/v1/evaluations",
        read: UserRole::all_roles(),
        write: UserRole::all_roles(),
        index: index,
        store: store,
        update: update,
        destroy: destroy,
    ));
}
