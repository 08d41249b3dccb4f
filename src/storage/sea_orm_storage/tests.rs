use super::{SeaOrmStorage, now_ts};
use super::courses::attached_or_duplicate;
use crate::entity::course_committees;
use crate::errors::CoopError;
use crate::models::companies::requests::CreateCompanyRequest;
use crate::models::courses::entities::{CourseType, SectionMemberKind};
use crate::models::courses::requests::{CreateCourseRequest, CreateCourseSectionRequest};
use crate::models::enrollments::entities::{EnrollStatus, VoteChoice};
use crate::models::enrollments::requests::CreateStudentEnrollRequest;
use crate::models::evaluations::entities::Evaluator;
use crate::models::organization::requests::{
    CreateCampusRequest, CreateCurriculumRequest, CreateFacultyRequest, CreateMajorRequest,
    CreateProgramRequest,
};
use crate::models::people::requests::{CreateInstructorRequest, CreateStudentRequest};
use crate::models::trainings::requests::TrainingFields;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};

async fn memory_storage() -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    SeaOrmStorage::from_connection(db)
}

async fn user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> i64 {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.ac.th"),
            password: "hash".to_string(),
            role,
            display_name: None,
        })
        .await
        .unwrap()
        .id
}

async fn instructor(storage: &SeaOrmStorage, code: &str) -> i64 {
    let user_id = user(storage, code, UserRole::Instructor).await;
    storage
        .create_instructor(CreateInstructorRequest {
            user_id,
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
        .id
}

async fn student(storage: &SeaOrmStorage, code: &str) -> i64 {
    let user_id = user(storage, code, UserRole::Student).await;
    storage
        .create_student(CreateStudentRequest {
            user_id,
            student_code: code.to_string(),
            first_name: "Suda".to_string(),
            middle_name: None,
            last_name: code.to_string(),
            email: None,
            phone: None,
            gpax: Some(3.25),
            faculty_id: None,
            program_id: None,
            curriculum_id: None,
            major_id: None,
        })
        .await
        .unwrap()
        .id
}

async fn section(storage: &SeaOrmStorage) -> i64 {
    let course = storage
        .create_course(CreateCourseRequest {
            curriculum_id: None,
            course_code: "CP4001".to_string(),
            course_name_th: "สหกิจศึกษา".to_string(),
            course_name_en: Some("Cooperative Education".to_string()),
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

fn enroll_request(student_id: i64, course_section_id: i64) -> CreateStudentEnrollRequest {
    CreateStudentEnrollRequest {
        student_id,
        course_section_id,
        grade: None,
        company_id: None,
        company: None,
        training: None,
    }
}

#[tokio::test]
async fn test_delete_campus_cascades_down_hierarchy() {
    let storage = memory_storage().await;
    let campus = storage
        .create_campus(CreateCampusRequest {
            campus_code: "BKK".to_string(),
            campus_name_th: "กรุงเทพ".to_string(),
            campus_name_en: None,
            address: None,
        })
        .await
        .unwrap();
    let faculty = storage
        .create_faculty(CreateFacultyRequest {
            campus_id: campus.id,
            faculty_name_th: "วิศวกรรมศาสตร์".to_string(),
            faculty_name_en: None,
        })
        .await
        .unwrap();
    let program = storage
        .create_program(CreateProgramRequest {
            faculty_id: faculty.id,
            program_name_th: "วิศวกรรมคอมพิวเตอร์".to_string(),
            program_name_en: None,
            abbreviation: Some("CPE".to_string()),
        })
        .await
        .unwrap();
    let curriculum = storage
        .create_curriculum(CreateCurriculumRequest {
            program_id: program.id,
            curriculum_name_th: "หลักสูตรวิศวกรรมศาสตรบัณฑิต".to_string(),
            curriculum_name_en: None,
            academic_year: Some(2565),
        })
        .await
        .unwrap();
    let major = storage
        .create_major(CreateMajorRequest {
            curriculum_id: curriculum.id,
            major_name_th: "วิศวกรรมซอฟต์แวร์".to_string(),
            major_name_en: None,
        })
        .await
        .unwrap();

    let detail = storage.get_campus_detail(campus.id).await.unwrap().unwrap();
    assert_eq!(detail.faculties.len(), 1);

    assert!(storage.delete_campus(campus.id).await.unwrap());
    assert!(storage.get_faculty_detail(faculty.id).await.unwrap().is_none());
    assert!(storage.get_program_detail(program.id).await.unwrap().is_none());
    assert!(
        storage
            .get_curriculum_detail(curriculum.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(storage.get_major_detail(major.id).await.unwrap().is_none());
    assert!(storage.list_majors().await.unwrap().is_empty());
    assert!(!storage.delete_campus(campus.id).await.unwrap());
}

#[tokio::test]
async fn test_create_faculty_with_unknown_campus_is_validation_error() {
    let storage = memory_storage().await;
    let err = storage
        .create_faculty(CreateFacultyRequest {
            campus_id: 999,
            faculty_name_th: "ไม่มี".to_string(),
            faculty_name_en: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CoopError::Validation(_)));
}

#[tokio::test]
async fn test_attach_twice_keeps_single_row() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let instructor_id = instructor(&storage, "T001").await;

    let first = storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, instructor_id)
        .await
        .unwrap();
    assert!(first.is_some());

    let second = storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, instructor_id)
        .await
        .unwrap();
    assert!(second.is_none());

    let detail = storage
        .get_course_section_detail(section_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.instructors.len(), 1);
    assert!(detail.committees.is_empty());
}

#[tokio::test]
async fn test_unique_index_conflict_counts_as_attached() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let instructor_id = instructor(&storage, "T001").await;

    let pivot = || course_committees::ActiveModel {
        course_section_id: Set(section_id),
        instructor_id: Set(instructor_id),
        created_at: Set(now_ts()),
        ..Default::default()
    };
    pivot().insert(&storage.db).await.unwrap();

    // 绕过预检查直接插入，唯一索引冲突应折叠为“已关联”
    let again = pivot()
        .insert(&storage.db)
        .await
        .map(|m| m.into_member());
    assert!(again.is_err());
    assert!(attached_or_duplicate(again).unwrap().is_none());

    let attached = storage
        .attach_section_member(SectionMemberKind::Committee, section_id, instructor_id)
        .await
        .unwrap();
    assert!(attached.is_none());

    let detail = storage
        .get_course_section_detail(section_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.committees.len(), 1);
}

#[tokio::test]
async fn test_attach_unknown_instructor_is_not_found() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;

    let err = storage
        .attach_section_member(SectionMemberKind::Committee, section_id, 42)
        .await
        .unwrap_err();
    assert!(matches!(err, CoopError::NotFound(_)));
}

#[tokio::test]
async fn test_detach_not_attached_returns_zero() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let instructor_id = instructor(&storage, "T001").await;

    let removed = storage
        .detach_section_member(SectionMemberKind::Committee, section_id, instructor_id)
        .await
        .unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn test_compound_create_builds_training_and_statuses() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let advisor = instructor(&storage, "T001").await;
    let committee = instructor(&storage, "T002").await;
    let student_id = student(&storage, "6401001").await;

    storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, advisor)
        .await
        .unwrap();
    storage
        .attach_section_member(SectionMemberKind::Committee, section_id, committee)
        .await
        .unwrap();
    // 同一教师既授课又在委员会中，只生成一条审批记录
    storage
        .attach_section_member(SectionMemberKind::Committee, section_id, advisor)
        .await
        .unwrap();

    let mut req = enroll_request(student_id, section_id);
    req.company = Some(CreateCompanyRequest {
        company_register_number: None,
        company_name_th: "บริษัท ตัวอย่าง จำกัด".to_string(),
        company_name_en: Some("Example Co., Ltd.".to_string()),
        company_address: None,
        company_map: None,
        company_email: None,
        company_phone_number: None,
        company_type: None,
    });
    req.training = Some(TrainingFields {
        document_language: Some("en".to_string()),
        position: Some("Backend Intern".to_string()),
        ..Default::default()
    });

    let created = storage.create_student_enroll(req).await.unwrap();
    assert_eq!(created.status_count, 2);
    let training_id = created.student_training_id.unwrap();

    let detail = storage
        .get_student_enroll_detail(created.enroll.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.statuses.len(), 2);
    assert!(
        detail
            .statuses
            .iter()
            .all(|s| s.status == EnrollStatus::Pending)
    );
    let training = detail.student_training.unwrap();
    assert!(training.company.is_some());
    assert!(!training.evaluations.is_empty());

    let status = storage
        .get_evaluation_status(training_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!status.has_evaluated);
    assert_eq!(status.company_name.as_deref(), Some("Example Co., Ltd."));
}

#[tokio::test]
async fn test_compound_create_rolls_back_on_invalid_dates() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let student_id = student(&storage, "6401001").await;

    let mut req = enroll_request(student_id, section_id);
    req.training = Some(TrainingFields {
        start_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 30),
        end_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1),
        ..Default::default()
    });

    let err = storage.create_student_enroll(req).await.unwrap_err();
    assert!(matches!(err, CoopError::Validation(_)));
    assert!(storage.list_student_enrolls().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bulk_grades_ignore_unknown_ids() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let first = student(&storage, "6401001").await;
    let second = student(&storage, "6401002").await;

    let a = storage
        .create_student_enroll(enroll_request(first, section_id))
        .await
        .unwrap();
    let b = storage
        .create_student_enroll(enroll_request(second, section_id))
        .await
        .unwrap();

    let third = student(&storage, "6401003").await;
    let c = storage
        .create_student_enroll(enroll_request(third, section_id))
        .await
        .unwrap();

    let updated = storage
        .bulk_update_grades(&[a.enroll.id, c.enroll.id, 9999, 424242], "S")
        .await
        .unwrap();
    assert_eq!(updated, 2);

    // 只有命中的记录被修改
    let enrolls = storage.list_student_enrolls().await.unwrap();
    assert_eq!(enrolls.len(), 3);
    for enroll in enrolls {
        let expected = if enroll.id == b.enroll.id { None } else { Some("S") };
        assert_eq!(enroll.grade.as_deref(), expected, "enroll {}", enroll.id);
    }
}

#[tokio::test]
async fn test_invalid_transition_leaves_record_untouched() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let advisor = instructor(&storage, "T001").await;
    let student_id = student(&storage, "6401001").await;
    storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, advisor)
        .await
        .unwrap();

    let created = storage
        .create_student_enroll(enroll_request(student_id, section_id))
        .await
        .unwrap();
    let status_id = storage.list_enroll_statuses().await.unwrap()[0].id;

    let err = storage
        .transition_enroll_status(status_id, EnrollStatus::DocumentApproved, advisor, None)
        .await
        .unwrap_err();
    assert!(matches!(err, CoopError::InvalidTransition(_)));

    let detail = storage
        .get_enroll_status_detail(status_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.status.status, EnrollStatus::Pending);
    assert!(detail.status.status_history.is_empty());

    let summary = storage
        .get_approval_summary(created.enroll.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.current_status, EnrollStatus::Pending);
}

#[tokio::test]
async fn test_duplicate_committee_vote_is_rejected() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let advisor = instructor(&storage, "T001").await;
    let member = instructor(&storage, "T002").await;
    let student_id = student(&storage, "6401001").await;
    storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, advisor)
        .await
        .unwrap();
    storage
        .create_student_enroll(enroll_request(student_id, section_id))
        .await
        .unwrap();
    let status_id = storage.list_enroll_statuses().await.unwrap()[0].id;
    storage
        .attach_section_member(SectionMemberKind::Committee, section_id, member)
        .await
        .unwrap();

    storage
        .transition_enroll_status(status_id, EnrollStatus::AdvisorApproved, advisor, None)
        .await
        .unwrap()
        .unwrap();

    let voted = storage
        .cast_committee_vote(status_id, member, VoteChoice::Approve, None, member)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(voted.status.committee_vote_count, 1);
    assert!(!voted.result.voting_complete);

    let err = storage
        .cast_committee_vote(status_id, member, VoteChoice::Reject, None, member)
        .await
        .unwrap_err();
    assert!(matches!(err, CoopError::VoteRejected(_)));

    let detail = storage
        .get_enroll_status_detail(status_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.status.committee_votes.len(), 1);
}

#[tokio::test]
async fn test_vote_from_non_committee_member_is_rejected() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let advisor = instructor(&storage, "T001").await;
    let member = instructor(&storage, "T002").await;
    let outsider = instructor(&storage, "T003").await;
    let student_id = student(&storage, "6401001").await;
    storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, advisor)
        .await
        .unwrap();
    storage
        .create_student_enroll(enroll_request(student_id, section_id))
        .await
        .unwrap();
    let status_id = storage.list_enroll_statuses().await.unwrap()[0].id;
    storage
        .attach_section_member(SectionMemberKind::Committee, section_id, member)
        .await
        .unwrap();
    storage
        .transition_enroll_status(status_id, EnrollStatus::AdvisorApproved, advisor, None)
        .await
        .unwrap()
        .unwrap();

    // 指导教师本人不在委员会中，同样不能投票
    for voter in [outsider, advisor] {
        let err = storage
            .cast_committee_vote(status_id, voter, VoteChoice::Approve, None, voter)
            .await
            .unwrap_err();
        assert!(matches!(err, CoopError::VoteRejected(_)));
    }

    let detail = storage
        .get_enroll_status_detail(status_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.status.committee_vote_count, 0);
    assert!(detail.status.committee_votes.is_empty());

    let voted = storage
        .cast_committee_vote(status_id, member, VoteChoice::Approve, None, member)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(voted.status.committee_vote_count, 1);
}

#[tokio::test]
async fn test_change_instructor_to_unknown_is_not_found() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let advisor = instructor(&storage, "T001").await;
    let student_id = student(&storage, "6401001").await;
    storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, advisor)
        .await
        .unwrap();
    storage
        .create_student_enroll(enroll_request(student_id, section_id))
        .await
        .unwrap();
    let status_id = storage.list_enroll_statuses().await.unwrap()[0].id;

    let err = storage
        .change_status_instructor(status_id, 777, advisor, None)
        .await
        .unwrap_err();
    assert!(matches!(err, CoopError::NotFound(_)));
}

#[tokio::test]
async fn test_assign_visitor_once_per_enrollment() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let visitor = instructor(&storage, "T001").await;
    let other = instructor(&storage, "T002").await;
    let student_id = student(&storage, "6401001").await;

    let mut req = enroll_request(student_id, section_id);
    req.training = Some(TrainingFields::default());
    let created = storage.create_student_enroll(req).await.unwrap();
    let training_id = created.student_training_id.unwrap();

    let first = storage
        .assign_visitor(created.enroll.id, visitor)
        .await
        .unwrap();
    assert!(first.created);

    // 再次指派返回原有记录，不会换人
    let second = storage
        .assign_visitor(created.enroll.id, other)
        .await
        .unwrap();
    assert!(!second.created);
    assert_eq!(second.visitor_training.id, first.visitor_training.id);
    assert_eq!(second.visitor_training.visitor_instructor_id, visitor);
    assert_eq!(storage.list_visitor_trainings().await.unwrap().len(), 1);

    let training = storage
        .get_student_training_detail(training_id)
        .await
        .unwrap()
        .unwrap();
    let visitor_questions = training
        .evaluations
        .iter()
        .filter(|e| e.evaluator == Evaluator::Visitor)
        .count();
    assert_eq!(visitor_questions, 11);
    let student_questions = training
        .evaluations
        .iter()
        .filter(|e| e.evaluator == Evaluator::Student)
        .count();
    assert_eq!(student_questions, 5);
}

#[tokio::test]
async fn test_assign_visitor_to_unknown_enrollment_is_not_found() {
    let storage = memory_storage().await;
    let visitor = instructor(&storage, "T001").await;

    let err = storage.assign_visitor(404, visitor).await.unwrap_err();
    assert!(matches!(err, CoopError::NotFound(_)));
    assert!(storage.list_visitor_trainings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bulk_assign_visitor_reports_each_id() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let visitor = instructor(&storage, "T001").await;
    let first = student(&storage, "6401001").await;
    let second = student(&storage, "6401002").await;

    let a = storage
        .create_student_enroll(enroll_request(first, section_id))
        .await
        .unwrap();
    let b = storage
        .create_student_enroll(enroll_request(second, section_id))
        .await
        .unwrap();
    storage.assign_visitor(a.enroll.id, visitor).await.unwrap();

    let summary = storage
        .bulk_assign_visitor(&[a.enroll.id, b.enroll.id, 9999, b.enroll.id], visitor)
        .await
        .unwrap();
    assert_eq!(summary.created_ids, vec![b.enroll.id]);
    assert_eq!(summary.skipped_existing, vec![a.enroll.id]);
    assert_eq!(summary.not_found, vec![9999]);

    let trainings = storage.list_visitor_trainings().await.unwrap();
    assert_eq!(trainings.len(), 2);
    assert!(trainings.iter().all(|t| t.visitor_instructor_id == visitor));
}

#[tokio::test]
async fn test_bulk_assign_unknown_visitor_writes_nothing() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let student_id = student(&storage, "6401001").await;
    let created = storage
        .create_student_enroll(enroll_request(student_id, section_id))
        .await
        .unwrap();

    let err = storage
        .bulk_assign_visitor(&[created.enroll.id], 777)
        .await
        .unwrap_err();
    assert!(matches!(err, CoopError::NotFound(_)));
    assert!(storage.list_visitor_trainings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_instructor_statuses_filter_by_status() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let advisor = instructor(&storage, "T001").await;
    let other = instructor(&storage, "T002").await;
    storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, advisor)
        .await
        .unwrap();
    for code in ["6401001", "6401002"] {
        let student_id = student(&storage, code).await;
        storage
            .create_student_enroll(enroll_request(student_id, section_id))
            .await
            .unwrap();
    }

    let statuses = storage
        .list_instructor_statuses(advisor, None)
        .await
        .unwrap();
    assert_eq!(statuses.len(), 2);
    storage
        .transition_enroll_status(statuses[0].id, EnrollStatus::AdvisorApproved, advisor, None)
        .await
        .unwrap()
        .unwrap();

    let approved = storage
        .list_instructor_statuses(advisor, Some(EnrollStatus::AdvisorApproved))
        .await
        .unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, statuses[0].id);
    assert!(
        storage
            .list_instructor_statuses(other, None)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_assignment_history_newest_first() {
    let storage = memory_storage().await;
    let section_id = section(&storage).await;
    let advisor = instructor(&storage, "T001").await;
    let second = instructor(&storage, "T002").await;
    let third = instructor(&storage, "T003").await;
    let student_id = student(&storage, "6401001").await;
    storage
        .attach_section_member(SectionMemberKind::Instructor, section_id, advisor)
        .await
        .unwrap();
    let created = storage
        .create_student_enroll(enroll_request(student_id, section_id))
        .await
        .unwrap();
    let status_id = storage.list_enroll_statuses().await.unwrap()[0].id;

    let empty = storage
        .get_assignment_history(created.enroll.id)
        .await
        .unwrap()
        .unwrap();
    assert!(empty.is_empty());

    storage
        .change_status_instructor(status_id, second, advisor, Some("on leave".to_string()))
        .await
        .unwrap()
        .unwrap();
    storage
        .change_status_instructor(status_id, third, advisor, None)
        .await
        .unwrap()
        .unwrap();

    let history = storage
        .get_assignment_history(created.enroll.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].enroll_status_id, status_id);
    assert_eq!(history[0].audit.new_instructor_id, third);
    assert_eq!(history[0].audit.previous_instructor_id, Some(second));
    assert_eq!(history[0].new_instructor_name.as_deref(), Some("Somchai T003"));
    assert_eq!(history[1].audit.reason.as_deref(), Some("on leave"));
    assert_eq!(history[1].previous_instructor_name.as_deref(), Some("Somchai T001"));

    assert!(storage.get_assignment_history(404).await.unwrap().is_none());
}
