use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::requests::{CreateCourseSectionRequest, UpdateCourseSectionRequest};
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{bad_request, respond, respond_created, respond_deleted, respond_found};

// 学期 1、2 与暑期 3；学年为公历年
fn validate_term(semester: Option<i32>, year: Option<i32>) -> Result<(), &'static str> {
    if let Some(semester) = semester
        && !(1..=3).contains(&semester)
    {
        return Err("Semester must be 1, 2 or 3");
    }
    if let Some(year) = year
        && !(1900..=2500).contains(&year)
    {
        return Err("Year must be a Gregorian calendar year");
    }
    Ok(())
}

pub async fn handle_index(
    service: &CourseService,
    query: IndexQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match query.id {
        Some(id) => respond_found(
            storage.get_course_section_detail(id).await,
            ErrorCode::CourseSectionNotFound,
            "Course section not found",
            "Course section retrieved successfully",
        ),
        None => respond(
            storage.list_course_sections().await,
            "Course sections retrieved successfully",
        ),
    }
}

pub async fn handle_store(
    service: &CourseService,
    req: CreateCourseSectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_term(Some(req.semester), Some(req.year)) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_created(
        storage.create_course_section(req).await,
        "Course section created successfully",
    )
}

pub async fn handle_update(
    service: &CourseService,
    id: i64,
    req: UpdateCourseSectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_term(req.semester, req.year) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_found(
        storage.update_course_section(id, req).await,
        ErrorCode::CourseSectionNotFound,
        "Course section not found",
        "Course section updated successfully",
    )
}

pub async fn handle_destroy(
    service: &CourseService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    respond_deleted(
        storage.delete_course_section(id).await,
        ErrorCode::CourseSectionNotFound,
        "Course section not found",
        "Course section deleted successfully",
    )
}

#[cfg(test)]
mod tests {
    use super::validate_term;

    #[test]
    fn test_validate_term() {
        assert!(validate_term(Some(1), Some(2024)).is_ok());
        assert!(validate_term(Some(3), None).is_ok());
        assert!(validate_term(Some(0), None).is_err());
        assert!(validate_term(None, Some(99)).is_err());
    }
}
