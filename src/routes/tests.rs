use std::sync::Arc;

use actix_web::{App, http::StatusCode, test};
use serde_json::{Value, json};

use super::configure_api_routes;
use crate::models::courses::entities::{CourseType, SectionMemberKind};
use crate::models::courses::requests::{CreateCourseRequest, CreateCourseSectionRequest};
use crate::models::enrollments::requests::CreateStudentEnrollRequest;
use crate::models::people::requests::{CreateInstructorRequest, CreateStudentRequest};
use crate::models::users::entities::UserRole;
use crate::services::test_support::{TEST_PASSWORD, cache_data, login_as, memory_storage, storage_data};
use crate::storage::Storage;

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(storage_data($storage))
                .app_data(cache_data())
                .configure(configure_api_routes),
        )
        .await
    };
}

async fn seed_section(storage: &Arc<dyn Storage>) -> i64 {
    let course = storage
        .create_course(CreateCourseRequest {
            curriculum_id: None,
            course_code: "CP4001".to_string(),
            course_name_th: "สหกิจศึกษา".to_string(),
            course_name_en: None,
            course_type: CourseType::Coop,
            credits: Some(6),
            description: None,
        })
        .await
        .unwrap();
    storage
        .create_course_section(CreateCourseSectionRequest {
            course_id: course.id,
            section: 1,
            semester: 1,
            year: 2025,
        })
        .await
        .unwrap()
        .id
}

async fn seed_instructor(storage: &Arc<dyn Storage>, code: &str) -> i64 {
    seed_instructor_session(storage, code).await.0
}

async fn seed_instructor_session(storage: &Arc<dyn Storage>, code: &str) -> (i64, String) {
    let (user, token) = login_as(storage, code, UserRole::Instructor).await;
    let id = storage
        .create_instructor(CreateInstructorRequest {
            user_id: user.id,
            staff_code: code.to_string(),
            academic_title: None,
            first_name: "Somchai".to_string(),
            last_name: code.to_string(),
            email: None,
            phone: None,
            faculty_id: None,
            program_id: None,
        })
        .await
        .unwrap()
        .id;
    (id, token)
}

async fn seed_enrollment(storage: &Arc<dyn Storage>, section_id: i64, code: &str) -> i64 {
    let (user, _) = login_as(storage, code, UserRole::Student).await;
    let student = storage
        .create_student(CreateStudentRequest {
            user_id: user.id,
            student_code: code.to_string(),
            first_name: "Suda".to_string(),
            middle_name: None,
            last_name: code.to_string(),
            email: None,
            phone: None,
            gpax: None,
            faculty_id: None,
            program_id: None,
            curriculum_id: None,
            major_id: None,
        })
        .await
        .unwrap();
    storage
        .create_student_enroll(CreateStudentEnrollRequest {
            student_id: student.id,
            course_section_id: section_id,
            grade: None,
            company_id: None,
            company: None,
            training: None,
        })
        .await
        .unwrap()
        .enroll
        .id
}

#[actix_web::test]
async fn test_health_is_public() {
    let storage = memory_storage().await;
    let app = init_app!(&storage);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], true);
}

#[actix_web::test]
async fn test_resource_requires_token() {
    let storage = memory_storage().await;
    let app = init_app!(&storage);

    let req = test::TestRequest::get().uri("/api/v1/campuses").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_student_cannot_write_staff_resource() {
    let storage = memory_storage().await;
    let (_, token) = login_as(&storage, "6401001", UserRole::Student).await;
    let app = init_app!(&storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/campuses")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "campus_code": "BKK", "campus_name_th": "กรุงเทพ" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // 只读接口对学生开放
    let req = test::TestRequest::get()
        .uri("/api/v1/campuses")
        .insert_header(("Authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_index_returns_list_or_detail() {
    let storage = memory_storage().await;
    let (_, token) = login_as(&storage, "staff01", UserRole::Staff).await;
    let app = init_app!(&storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/campuses")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "campus_code": "BKK", "campus_name_th": "กรุงเทพ" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/campuses")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/campuses?id={id}"))
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["campus_code"], "BKK");
    assert!(body["data"]["faculties"].is_array());

    let req = test::TestRequest::get()
        .uri("/api/v1/campuses?id=999")
        .insert_header(("Authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_committee_attach_is_idempotent() {
    let storage = memory_storage().await;
    let (_, token) = login_as(&storage, "staff01", UserRole::Staff).await;
    let section_id = seed_section(&storage).await;
    let instructor_id = seed_instructor(&storage, "T001").await;
    let app = init_app!(&storage);

    let attach = || {
        test::TestRequest::post()
            .uri(&format!("/api/v1/course_sections/{section_id}/committees"))
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({ "instructor_id": instructor_id }))
            .to_request()
    };

    let resp = test::call_service(&app, attach()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, attach()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let detail = storage
        .get_course_section_detail(section_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.committees.len(), 1);
    assert!(detail.instructors.is_empty());
}

#[actix_web::test]
async fn test_detach_missing_member_succeeds() {
    let storage = memory_storage().await;
    let (_, token) = login_as(&storage, "staff01", UserRole::Staff).await;
    let section_id = seed_section(&storage).await;
    let app = init_app!(&storage);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/course_sections/{section_id}/instructors/42"))
        .insert_header(("Authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_bulk_grades_rejects_empty_ids() {
    let storage = memory_storage().await;
    let (_, token) = login_as(&storage, "T002", UserRole::Instructor).await;
    let app = init_app!(&storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/instructor/grades")
        .insert_header(("Authorization", token))
        .set_json(json!({ "ids": [], "grade": "S" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_then_me() {
    let storage = memory_storage().await;
    login_as(&storage, "staff02", UserRole::Staff).await;
    let app = init_app!(&storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": "staff02", "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["user"].get("password_hash").is_none());
    let access_token = body["data"]["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {access_token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["user"]["username"], "staff02");
}

#[actix_web::test]
async fn test_instructor_cannot_vote_as_someone_else() {
    let storage = memory_storage().await;
    let (_, token) = seed_instructor_session(&storage, "T001").await;
    let other = seed_instructor(&storage, "T002").await;
    let app = init_app!(&storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/student_enroll_statuses/1/votes")
        .insert_header(("Authorization", token))
        .set_json(json!({ "instructor_id": other, "vote": "approve" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_vote_without_instructor_profile_is_bad_request() {
    let storage = memory_storage().await;
    let (_, token) = login_as(&storage, "staff01", UserRole::Staff).await;
    let app = init_app!(&storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/student_enroll_statuses/1/votes")
        .insert_header(("Authorization", token))
        .set_json(json!({ "vote": "approve" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_visitor_assignment_created_then_reused() {
    let storage = memory_storage().await;
    let (_, token) = login_as(&storage, "staff01", UserRole::Staff).await;
    let section_id = seed_section(&storage).await;
    let visitor = seed_instructor(&storage, "T001").await;
    let enroll_id = seed_enrollment(&storage, section_id, "6401001").await;
    let app = init_app!(&storage);

    let assign = || {
        test::TestRequest::post()
            .uri("/api/v1/visitor_assignments")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({
                "student_enroll_id": enroll_id,
                "visitor_instructor_id": visitor,
            }))
            .to_request()
    };

    let resp = test::call_service(&app, assign()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["created"], true);

    let resp = test::call_service(&app, assign()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["created"], false);

    let req = test::TestRequest::post()
        .uri("/api/v1/visitor_assignments/bulk")
        .insert_header(("Authorization", token))
        .set_json(json!({
            "student_enroll_ids": [enroll_id, 9999],
            "visitor_instructor_id": visitor,
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["created_ids"], json!([]));
    assert_eq!(body["data"]["skipped_existing"], json!([enroll_id]));
    assert_eq!(body["data"]["notFound"], json!([9999]));
}

#[actix_web::test]
async fn test_instructor_lists_own_statuses() {
    let storage = memory_storage().await;
    let section_id = seed_section(&storage).await;
    let (advisor, token) = seed_instructor_session(&storage, "T001").await;
    let other = seed_instructor(&storage, "T002").await;
    storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, advisor)
        .await
        .unwrap();
    seed_enrollment(&storage, section_id, "6401001").await;
    let app = init_app!(&storage);

    let req = test::TestRequest::get()
        .uri("/api/v1/instructor/enroll_statuses")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let statuses = body["data"].as_array().unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0]["instructor_id"], advisor);

    let req = test::TestRequest::get()
        .uri("/api/v1/instructor/enroll_statuses?status=advisor_approved")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    // 教师不能查看其他教师的记录
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/instructor/enroll_statuses?instructor_id={other}"))
        .insert_header(("Authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_assignment_history_for_unknown_enrollment_is_404() {
    let storage = memory_storage().await;
    let (_, token) = login_as(&storage, "staff01", UserRole::Staff).await;
    let app = init_app!(&storage);

    let req = test::TestRequest::get()
        .uri("/api/v1/student_enrolls/404/assignment_history")
        .insert_header(("Authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
