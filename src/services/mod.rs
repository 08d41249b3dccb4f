//! 业务服务层
//!
//! 每个服务持有（或从 `app_data` 取得）存储实例，具体操作拆分在子模块中，
//! 统一返回 `ApiResponse` 信封。

pub mod auth;
pub mod companies;
pub mod courses;
pub mod enroll_statuses;
pub mod enrollments;
pub mod evaluations;
pub mod excel;
pub mod letters;
pub mod organization;
pub mod people;
pub mod system;
pub mod trainings;
pub mod users;
pub mod visits;

pub use auth::AuthService;
pub use companies::CompanyService;
pub use courses::CourseService;
pub use enroll_statuses::EnrollStatusService;
pub use enrollments::EnrollmentService;
pub use evaluations::EvaluationService;
pub use excel::ExcelService;
pub use letters::LetterService;
pub use organization::OrganizationService;
pub use people::PeopleService;
pub use system::SystemService;
pub use trainings::TrainingService;
pub use users::UserService;
pub use visits::VisitService;

use actix_web::{HttpResponse, ResponseError, Result as ActixResult};
use serde::Serialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::{ApiResponse, ErrorCode};

/// 生成服务结构体及其存储获取方法
macro_rules! define_service {
    ($name:ident) => {
        pub struct $name {
            storage: Option<std::sync::Arc<dyn crate::storage::Storage>>,
        }

        impl $name {
            pub fn new_lazy() -> Self {
                Self { storage: None }
            }

            #[allow(dead_code)]
            pub fn with_storage(storage: std::sync::Arc<dyn crate::storage::Storage>) -> Self {
                Self {
                    storage: Some(storage),
                }
            }

            pub(crate) fn get_storage(
                &self,
                request: &actix_web::HttpRequest,
            ) -> std::sync::Arc<dyn crate::storage::Storage> {
                if let Some(storage) = &self.storage {
                    storage.clone()
                } else {
                    request
                        .app_data::<actix_web::web::Data<std::sync::Arc<dyn crate::storage::Storage>>>()
                        .expect("Storage not found in app data")
                        .get_ref()
                        .clone()
                }
            }
        }
    };
}
pub(crate) use define_service;

pub(crate) fn respond<T: Serialize + TS>(
    result: Result<T>,
    message: &str,
) -> ActixResult<HttpResponse> {
    match result {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data, message))),
        Err(e) => Ok(e.error_response()),
    }
}

pub(crate) fn respond_created<T: Serialize + TS>(
    result: Result<T>,
    message: &str,
) -> ActixResult<HttpResponse> {
    match result {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data, message))),
        Err(e) => Ok(e.error_response()),
    }
}

/// `Ok(None)` 映射为 404
pub(crate) fn respond_found<T: Serialize + TS>(
    result: Result<Option<T>>,
    code: ErrorCode,
    not_found: &str,
    message: &str,
) -> ActixResult<HttpResponse> {
    match result {
        Ok(Some(data)) => Ok(HttpResponse::Ok().json(ApiResponse::success(data, message))),
        Ok(None) => Ok(not_found_response(code, not_found)),
        Err(e) => Ok(e.error_response()),
    }
}

pub(crate) fn respond_deleted(
    result: Result<bool>,
    code: ErrorCode,
    not_found: &str,
    message: &str,
) -> ActixResult<HttpResponse> {
    match result {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(message))),
        Ok(false) => Ok(not_found_response(code, not_found)),
        Err(e) => Ok(e.error_response()),
    }
}

pub(crate) fn not_found_response(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Unauthorized access, please login",
    ))
}

#[cfg(test)]
pub(crate) mod test_support;
