use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::companies::requests::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_created, respond_deleted, respond_found};

super::define_service!(CompanyService);

impl CompanyService {
    pub async fn index(&self, query: IndexQuery, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match query.id {
            Some(id) => respond_found(
                storage.get_company_detail(id).await,
                ErrorCode::NotFound,
                "Company not found",
                "Company retrieved successfully",
            ),
            None => respond(storage.list_companies().await, "Companies retrieved successfully"),
        }
    }

    pub async fn store(
        &self,
        mut req: CreateCompanyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        req.company_name_th = req.company_name_th.trim().to_string();
        if req.company_name_th.is_empty() {
            return Ok(bad_request(
                ErrorCode::ValidationFailed,
                "company_name_th is required",
            ));
        }
        if let Some(email) = req.company_email.as_deref().filter(|e| !e.is_empty())
            && let Err(msg) = crate::utils::validate::validate_email(email)
        {
            return Ok(bad_request(ErrorCode::ValidationFailed, msg));
        }

        let storage = self.get_storage(request);
        respond_created(storage.create_company(req).await, "Company created successfully")
    }

    pub async fn update(
        &self,
        id: i64,
        req: UpdateCompanyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Some(email) = req.company_email.as_deref().filter(|e| !e.is_empty())
            && let Err(msg) = crate::utils::validate::validate_email(email)
        {
            return Ok(bad_request(ErrorCode::ValidationFailed, msg));
        }

        let storage = self.get_storage(request);
        respond_found(
            storage.update_company(id, req).await,
            ErrorCode::NotFound,
            "Company not found",
            "Company updated successfully",
        )
    }

    pub async fn destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        respond_deleted(
            storage.delete_company(id).await,
            ErrorCode::NotFound,
            "Company not found",
            "Company deleted successfully",
        )
    }
}
