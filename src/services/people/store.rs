use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PeopleService, validate_profile};
use crate::models::ErrorCode;
use crate::models::people::requests::{
    CreateInstructorRequest, CreateStaffRequest, CreateStudentRequest,
};
use crate::services::{bad_request, respond_created};

pub async fn store_student(
    service: &PeopleService,
    mut req: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    req.student_code = req.student_code.trim().to_string();
    if let Err(msg) = validate_profile(Some(&req.student_code), req.email.as_deref(), req.gpax) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_created(storage.create_student(req).await, "Student created successfully")
}

pub async fn store_instructor(
    service: &PeopleService,
    mut req: CreateInstructorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    req.staff_code = req.staff_code.trim().to_string();
    if let Err(msg) = validate_profile(Some(&req.staff_code), req.email.as_deref(), None) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_created(
        storage.create_instructor(req).await,
        "Instructor created successfully",
    )
}

pub async fn store_staff(
    service: &PeopleService,
    mut req: CreateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    req.staff_code = req.staff_code.trim().to_string();
    if let Err(msg) = validate_profile(Some(&req.staff_code), req.email.as_deref(), None) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request);
    respond_created(storage.create_staff(req).await, "Staff created successfully")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::services::test_support::{login_as, memory_storage};
    use actix_web::{http::StatusCode, test};

    fn student_request(user_id: i64, code: &str, gpax: Option<f64>) -> CreateStudentRequest {
        CreateStudentRequest {
            user_id,
            student_code: code.to_string(),
            first_name: "Somchai".to_string(),
            middle_name: None,
            last_name: "Jaidee".to_string(),
            email: None,
            phone: None,
            gpax,
            faculty_id: None,
            program_id: None,
            curriculum_id: None,
            major_id: None,
        }
    }

    #[actix_web::test]
    async fn test_store_student_validates_gpax() {
        let storage = memory_storage().await;
        let (user, _) = login_as(&storage, "6401001", UserRole::Student).await;
        let service = PeopleService::with_storage(storage.clone());
        let request = test::TestRequest::default().to_http_request();

        let resp = service
            .store_student(student_request(user.id, "6401001", Some(4.2)), &request)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = service
            .store_student(student_request(user.id, " 6401001 ", Some(3.5)), &request)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let students = storage.list_students().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].student_code, "6401001");
    }
}
