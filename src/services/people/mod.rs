//! 学生、教师与职员档案

pub mod destroy;
pub mod index;
pub mod store;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::IndexQuery;
use crate::models::people::requests::{
    CreateInstructorRequest, CreateStaffRequest, CreateStudentRequest, UpdateInstructorRequest,
    UpdateStaffRequest, UpdateStudentRequest,
};

super::define_service!(PeopleService);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Student,
    Instructor,
    Staff,
}

impl PersonKind {
    pub fn label(&self) -> &'static str {
        match self {
            PersonKind::Student => "Student",
            PersonKind::Instructor => "Instructor",
            PersonKind::Staff => "Staff",
        }
    }
}

impl PeopleService {
    pub async fn index(
        &self,
        kind: PersonKind,
        query: IndexQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        index::handle_index(self, kind, query, request).await
    }

    pub async fn store_student(
        &self,
        req: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::store_student(self, req, request).await
    }

    pub async fn store_instructor(
        &self,
        req: CreateInstructorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::store_instructor(self, req, request).await
    }

    pub async fn store_staff(
        &self,
        req: CreateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::store_staff(self, req, request).await
    }

    pub async fn update_student(
        &self,
        id: i64,
        req: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, id, req, request).await
    }

    pub async fn update_instructor(
        &self,
        id: i64,
        req: UpdateInstructorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_instructor(self, id, req, request).await
    }

    pub async fn update_staff(
        &self,
        id: i64,
        req: UpdateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_staff(self, id, req, request).await
    }

    pub async fn destroy(
        &self,
        kind: PersonKind,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        destroy::handle_destroy(self, kind, id, request).await
    }
}

/// 档案字段的公共校验：编号、邮箱与 GPAX
pub(crate) fn validate_profile(
    code: Option<&str>,
    email: Option<&str>,
    gpax: Option<f64>,
) -> Result<(), &'static str> {
    if let Some(code) = code {
        crate::utils::validate::validate_person_code(code)?;
    }
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        crate::utils::validate::validate_email(email)?;
    }
    if let Some(gpax) = gpax {
        crate::utils::validate::validate_gpax(gpax)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_profile() {
        assert!(validate_profile(Some("6401001"), Some("a@b.ac.th"), Some(3.25)).is_ok());
        assert!(validate_profile(None, Some(""), None).is_ok());
        assert!(validate_profile(Some("64 01"), None, None).is_err());
        assert!(validate_profile(None, Some("not-an-email"), None).is_err());
        assert!(validate_profile(None, None, Some(4.5)).is_err());
    }
}
