//! 组织架构：校区、学院、专业方向、培养方案、专业

pub mod destroy;
pub mod index;
pub mod store;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::IndexQuery;
use crate::models::organization::requests::{
    CreateCampusRequest, CreateCurriculumRequest, CreateFacultyRequest, CreateMajorRequest,
    CreateProgramRequest, UpdateCampusRequest, UpdateCurriculumRequest, UpdateFacultyRequest,
    UpdateMajorRequest, UpdateProgramRequest,
};

super::define_service!(OrganizationService);

/// 组织架构中的资源类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgResource {
    Campus,
    Faculty,
    Program,
    Curriculum,
    Major,
}

impl OrgResource {
    pub fn label(&self) -> &'static str {
        match self {
            OrgResource::Campus => "Campus",
            OrgResource::Faculty => "Faculty",
            OrgResource::Program => "Program",
            OrgResource::Curriculum => "Curriculum",
            OrgResource::Major => "Major",
        }
    }
}

impl OrganizationService {
    pub async fn index(
        &self,
        resource: OrgResource,
        query: IndexQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        index::handle_index(self, resource, query, request).await
    }

    pub async fn store_campus(
        &self,
        req: CreateCampusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::store_campus(self, req, request).await
    }

    pub async fn store_faculty(
        &self,
        req: CreateFacultyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::store_faculty(self, req, request).await
    }

    pub async fn store_program(
        &self,
        req: CreateProgramRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::store_program(self, req, request).await
    }

    pub async fn store_curriculum(
        &self,
        req: CreateCurriculumRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::store_curriculum(self, req, request).await
    }

    pub async fn store_major(
        &self,
        req: CreateMajorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        store::store_major(self, req, request).await
    }

    pub async fn update_campus(
        &self,
        id: i64,
        req: UpdateCampusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_campus(self, id, req, request).await
    }

    pub async fn update_faculty(
        &self,
        id: i64,
        req: UpdateFacultyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_faculty(self, id, req, request).await
    }

    pub async fn update_program(
        &self,
        id: i64,
        req: UpdateProgramRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_program(self, id, req, request).await
    }

    pub async fn update_curriculum(
        &self,
        id: i64,
        req: UpdateCurriculumRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_curriculum(self, id, req, request).await
    }

    pub async fn update_major(
        &self,
        id: i64,
        req: UpdateMajorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_major(self, id, req, request).await
    }

    pub async fn destroy(
        &self,
        resource: OrgResource,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        destroy::handle_destroy(self, resource, id, request).await
    }
}
