use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::IndexQuery;
use crate::models::companies::requests::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::models::users::entities::UserRole;
use crate::services::CompanyService;
use crate::utils::SafeIDI64;

static COMPANY_SERVICE: Lazy<CompanyService> = Lazy::new(CompanyService::new_lazy);

pub async fn index(req: HttpRequest, query: web::Query<IndexQuery>) -> ActixResult<HttpResponse> {
    COMPANY_SERVICE.index(query.into_inner(), &req).await
}

pub async fn store(
    req: HttpRequest,
    data: web::Json<CreateCompanyRequest>,
) -> ActixResult<HttpResponse> {
    COMPANY_SERVICE.store(data.into_inner(), &req).await
}

pub async fn update(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateCompanyRequest>,
) -> ActixResult<HttpResponse> {
    COMPANY_SERVICE.update(id.0, data.into_inner(), &req).await
}

pub async fn destroy(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPANY_SERVICE.destroy(id.0, &req).await
}

// 学生通过选课登记实习单位，这里的直接维护仅限职员
pub fn configure_company_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(resource_scope!(
        "/api/v1/companies",
        read: UserRole::all_roles(),
        write: UserRole::staff_roles(),
        index: index,
        store: store,
        update: update,
        destroy: destroy,
    ));
}
