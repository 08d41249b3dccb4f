//! 启动时写入的初始数据
//!
//! - 数据库中没有任何用户时创建 `admin` 账号
//! - `seed.demo_data` 打开且尚无校区时，写入一套演示用的组织架构、课程班与账号

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::courses::entities::{CourseType, SectionMemberKind};
use crate::models::courses::requests::{CreateCourseRequest, CreateCourseSectionRequest};
use crate::models::organization::requests::{
    CreateCampusRequest, CreateCurriculumRequest, CreateFacultyRequest, CreateMajorRequest,
    CreateProgramRequest,
};
use crate::models::people::requests::{
    CreateInstructorRequest, CreateStaffRequest, CreateStudentRequest,
};
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;

/// 生成随机密码，保证同时含字母和数字
pub(crate) fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
    const DIGITS: &[u8] = b"23456789";
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%";

    let mut rng = rand::rng();
    let mut password: Vec<char> = (0..length.saturating_sub(2))
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    password.push(LETTERS[rng.random_range(0..LETTERS.len())] as char);
    password.push(DIGITS[rng.random_range(0..DIGITS.len())] as char);
    password.into_iter().collect()
}

fn password_from_env(var: &str, label: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  {var} NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated {label} password: {pwd}");
        warn!("  Please save this password or set {var} env var");
        warn!("==========================================================");
        pwd
    })
}

async fn create_account(
    storage: &Arc<dyn Storage>,
    username: &str,
    email: &str,
    password_hash: &str,
    role: UserRole,
    display_name: &str,
) -> Result<User> {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            role,
            display_name: Some(display_name.to_string()),
        })
        .await
}

/// 初始化默认管理员账号
pub async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {count} user(s), skipping admin seed");
            return;
        }
        Ok(_) => info!("No users found in database, creating default admin account..."),
        Err(e) => {
            warn!("Failed to count users: {e}, skipping admin seed");
            return;
        }
    }

    let password = password_from_env("ADMIN_PASSWORD", "admin");
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {e}, skipping admin seed");
            return;
        }
    };

    match create_account(
        storage,
        "admin",
        "admin@localhost",
        &password_hash,
        UserRole::Admin,
        "Administrator",
    )
    .await
    {
        Ok(user) => info!(
            "Default admin account created (ID: {}, username: {})",
            user.id, user.username
        ),
        Err(e) => warn!("Failed to create admin account: {e}"),
    }
}

/// 写入演示数据，失败只记录日志
pub async fn seed_demo_data(storage: &Arc<dyn Storage>) {
    if !AppConfig::get().seed.demo_data {
        return;
    }

    match storage.list_campuses().await {
        Ok(campuses) if !campuses.is_empty() => {
            debug!("Reference data already present, skipping demo seed");
            return;
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Failed to inspect campuses: {e}, skipping demo seed");
            return;
        }
    }

    match insert_demo_data(storage).await {
        Ok(()) => info!("Demo data seeded"),
        Err(e) => warn!("Failed to seed demo data: {e}"),
    }
}

async fn insert_demo_data(storage: &Arc<dyn Storage>) -> Result<()> {
    let campus = storage
        .create_campus(CreateCampusRequest {
            campus_code: "MAIN".to_string(),
            campus_name_th: "วิทยาเขตหลัก".to_string(),
            campus_name_en: Some("Main Campus".to_string()),
            address: None,
        })
        .await?;
    let faculty = storage
        .create_faculty(CreateFacultyRequest {
            campus_id: campus.id,
            faculty_name_th: "คณะวิศวกรรมศาสตร์".to_string(),
            faculty_name_en: Some("Faculty of Engineering".to_string()),
        })
        .await?;
    let program = storage
        .create_program(CreateProgramRequest {
            faculty_id: faculty.id,
            program_name_th: "วิศวกรรมคอมพิวเตอร์".to_string(),
            program_name_en: Some("Computer Engineering".to_string()),
            abbreviation: Some("CPE".to_string()),
        })
        .await?;
    let curriculum = storage
        .create_curriculum(CreateCurriculumRequest {
            program_id: program.id,
            curriculum_name_th: "หลักสูตรวิศวกรรมศาสตรบัณฑิต".to_string(),
            curriculum_name_en: Some("Bachelor of Engineering".to_string()),
            academic_year: Some(2565),
        })
        .await?;
    let major = storage
        .create_major(CreateMajorRequest {
            curriculum_id: curriculum.id,
            major_name_th: "วิศวกรรมซอฟต์แวร์".to_string(),
            major_name_en: Some("Software Engineering".to_string()),
        })
        .await?;

    let course = storage
        .create_course(CreateCourseRequest {
            curriculum_id: Some(curriculum.id),
            course_code: "CPE4901".to_string(),
            course_name_th: "สหกิจศึกษา".to_string(),
            course_name_en: Some("Cooperative Education".to_string()),
            course_type: CourseType::Coop,
            credits: Some(6),
            description: None,
        })
        .await?;
    let section = storage
        .create_course_section(CreateCourseSectionRequest {
            course_id: course.id,
            section: 1,
            semester: 1,
            year: 2568,
        })
        .await?;

    // 演示账号共用一个密码
    let password = password_from_env("DEMO_PASSWORD", "demo account");
    let password_hash = hash_password(&password)?;

    let staff_user = create_account(
        storage,
        "staff",
        "staff@example.ac.th",
        &password_hash,
        UserRole::Staff,
        "Demo Staff",
    )
    .await?;
    storage
        .create_staff(CreateStaffRequest {
            user_id: staff_user.id,
            staff_code: "S0001".to_string(),
            first_name: "Malee".to_string(),
            last_name: "Sukjai".to_string(),
            email: Some(staff_user.email.clone()),
            phone: None,
            campus_id: Some(campus.id),
            faculty_id: Some(faculty.id),
        })
        .await?;

    let instructor_user = create_account(
        storage,
        "instructor",
        "instructor@example.ac.th",
        &password_hash,
        UserRole::Instructor,
        "Demo Instructor",
    )
    .await?;
    let instructor = storage
        .create_instructor(CreateInstructorRequest {
            user_id: instructor_user.id,
            staff_code: "T0001".to_string(),
            academic_title: Some("Asst. Prof.".to_string()),
            first_name: "Somchai".to_string(),
            last_name: "Rakdee".to_string(),
            email: Some(instructor_user.email.clone()),
            phone: None,
            faculty_id: Some(faculty.id),
            program_id: Some(program.id),
        })
        .await?;
    storage
        .attach_section_member(SectionMemberKind::Instructor, section.id, instructor.id)
        .await?;
    storage
        .attach_section_member(SectionMemberKind::Committee, section.id, instructor.id)
        .await?;

    let student_user = create_account(
        storage,
        "student",
        "student@example.ac.th",
        &password_hash,
        UserRole::Student,
        "Demo Student",
    )
    .await?;
    storage
        .create_student(CreateStudentRequest {
            user_id: student_user.id,
            student_code: "6501001".to_string(),
            first_name: "Suda".to_string(),
            middle_name: None,
            last_name: "Jaidee".to_string(),
            email: Some(student_user.email.clone()),
            phone: None,
            gpax: Some(3.25),
            faculty_id: Some(faculty.id),
            program_id: Some(program.id),
            curriculum_id: Some(curriculum.id),
            major_id: Some(major.id),
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::memory_storage;
    use crate::utils::validate::validate_password;

    #[test]
    fn test_generated_password_is_strong() {
        for _ in 0..20 {
            let pwd = generate_random_password(16);
            assert_eq!(pwd.chars().count(), 16);
            assert!(validate_password(&pwd).is_ok());
        }
    }

    #[tokio::test]
    async fn test_seed_admin_only_once() {
        let storage = memory_storage().await;
        seed_admin(&storage).await;
        seed_admin(&storage).await;
        let users = storage.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_insert_demo_data_builds_hierarchy() {
        let storage = memory_storage().await;
        insert_demo_data(&storage).await.unwrap();

        let majors = storage.list_majors().await.unwrap();
        assert_eq!(majors.len(), 1);
        let sections = storage.list_course_sections().await.unwrap();
        let detail = storage
            .get_course_section_detail(sections[0].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.instructors.len(), 1);
        assert_eq!(detail.committees.len(), 1);
    }
}
