//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod companies;
mod courses;
mod enroll_statuses;
mod enrollments;
mod evaluations;
mod organization;
mod people;
mod trainings;
mod users;
mod visits;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{CoopError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 数据库错误映射：约束类错误保留原分类，其余附上操作名称
pub(crate) fn db_err(action: &'static str) -> impl Fn(DbErr) -> CoopError {
    move |e| match CoopError::from(e) {
        CoopError::DatabaseOperation(msg) => {
            CoopError::database_operation(format!("{action}失败: {msg}"))
        }
        other => other,
    }
}

pub(crate) fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CoopError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 使用已建立的连接（测试与工具场景）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CoopError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CoopError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CoopError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CoopError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    async fn ping_impl(&self) -> Result<()> {
        self.db.ping().await.map_err(db_err("数据库连通性检查"))
    }
}

// Storage trait 实现
use crate::models::{
    companies::{
        entities::Company,
        requests::{CreateCompanyRequest, UpdateCompanyRequest},
        responses::CompanyDetail,
    },
    courses::{
        entities::{Course, CourseSection, CourseSectionMember, SectionMemberKind},
        requests::{
            CreateCourseRequest, CreateCourseSectionRequest, UpdateCourseRequest,
            UpdateCourseSectionRequest,
        },
        responses::{CourseDetail, CourseSectionDetail},
    },
    enrollments::{
        entities::{EnrollStatus, StudentEnroll, StudentEnrollStatus, VoteChoice},
        requests::{
            CreateEnrollStatusRequest, CreateStudentEnrollRequest, UpdateEnrollStatusRequest,
            UpdateStudentEnrollRequest,
        },
        responses::{
            ApprovalSummary, AssignmentHistoryEntry, CommitteeVoteResponse, EnrollStatusDetail,
            StudentEnrollCreated, StudentEnrollDetail,
        },
    },
    evaluations::{
        entities::Evaluation,
        requests::{CreateEvaluationRequest, UpdateEvaluationRequest},
    },
    letters::LetterContext,
    organization::{
        entities::{Campus, Curriculum, Faculty, Major, Program},
        requests::{
            CreateCampusRequest, CreateCurriculumRequest, CreateFacultyRequest,
            CreateMajorRequest, CreateProgramRequest, UpdateCampusRequest,
            UpdateCurriculumRequest, UpdateFacultyRequest, UpdateMajorRequest,
            UpdateProgramRequest,
        },
        responses::{CampusDetail, CurriculumDetail, FacultyDetail, MajorDetail, ProgramDetail},
    },
    people::{
        entities::{Instructor, Staff, Student},
        requests::{
            CreateInstructorRequest, CreateStaffRequest, CreateStudentRequest,
            UpdateInstructorRequest, UpdateStaffRequest, UpdateStudentRequest,
        },
        responses::{InstructorDetail, StaffDetail, StudentDetail},
    },
    trainings::{
        entities::{StudentTraining, VisitorSchedule, VisitorTraining, VisitsPicture},
        requests::{
            CreateStudentTrainingRequest, CreateVisitorScheduleRequest,
            CreateVisitorTrainingRequest, NewVisitsPicture, UpdateStudentTrainingRequest,
            UpdateVisitorScheduleRequest, UpdateVisitorTrainingRequest,
            UpdateVisitsPictureRequest,
        },
        responses::{
            BulkVisitorAssignResponse, EvaluationStatusResponse, StudentTrainingDetail,
            VisitorAssignment, VisitorScheduleDetail, VisitorTrainingDetail,
        },
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserDetail,
    },
};

use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn ping(&self) -> Result<()> {
        self.ping_impl().await
    }

    async fn list_campuses(&self) -> Result<Vec<Campus>> {
        self.list_campuses_impl().await
    }

    async fn get_campus_detail(&self, id: i64) -> Result<Option<CampusDetail>> {
        self.get_campus_detail_impl(id).await
    }

    async fn create_campus(&self, req: CreateCampusRequest) -> Result<Campus> {
        self.create_campus_impl(req).await
    }

    async fn update_campus(&self, id: i64, req: UpdateCampusRequest) -> Result<Option<Campus>> {
        self.update_campus_impl(id, req).await
    }

    async fn delete_campus(&self, id: i64) -> Result<bool> {
        self.delete_campus_impl(id).await
    }

    async fn list_faculties(&self) -> Result<Vec<Faculty>> {
        self.list_faculties_impl().await
    }

    async fn get_faculty_detail(&self, id: i64) -> Result<Option<FacultyDetail>> {
        self.get_faculty_detail_impl(id).await
    }

    async fn create_faculty(&self, req: CreateFacultyRequest) -> Result<Faculty> {
        self.create_faculty_impl(req).await
    }

    async fn update_faculty(&self, id: i64, req: UpdateFacultyRequest) -> Result<Option<Faculty>> {
        self.update_faculty_impl(id, req).await
    }

    async fn delete_faculty(&self, id: i64) -> Result<bool> {
        self.delete_faculty_impl(id).await
    }

    async fn list_programs(&self) -> Result<Vec<Program>> {
        self.list_programs_impl().await
    }

    async fn get_program_detail(&self, id: i64) -> Result<Option<ProgramDetail>> {
        self.get_program_detail_impl(id).await
    }

    async fn create_program(&self, req: CreateProgramRequest) -> Result<Program> {
        self.create_program_impl(req).await
    }

    async fn update_program(&self, id: i64, req: UpdateProgramRequest) -> Result<Option<Program>> {
        self.update_program_impl(id, req).await
    }

    async fn delete_program(&self, id: i64) -> Result<bool> {
        self.delete_program_impl(id).await
    }

    async fn list_curriculums(&self) -> Result<Vec<Curriculum>> {
        self.list_curriculums_impl().await
    }

    async fn get_curriculum_detail(&self, id: i64) -> Result<Option<CurriculumDetail>> {
        self.get_curriculum_detail_impl(id).await
    }

    async fn create_curriculum(&self, req: CreateCurriculumRequest) -> Result<Curriculum> {
        self.create_curriculum_impl(req).await
    }

    async fn update_curriculum(
        &self,
        id: i64,
        req: UpdateCurriculumRequest,
    ) -> Result<Option<Curriculum>> {
        self.update_curriculum_impl(id, req).await
    }

    async fn delete_curriculum(&self, id: i64) -> Result<bool> {
        self.delete_curriculum_impl(id).await
    }

    async fn list_majors(&self) -> Result<Vec<Major>> {
        self.list_majors_impl().await
    }

    async fn get_major_detail(&self, id: i64) -> Result<Option<MajorDetail>> {
        self.get_major_detail_impl(id).await
    }

    async fn create_major(&self, req: CreateMajorRequest) -> Result<Major> {
        self.create_major_impl(req).await
    }

    async fn update_major(&self, id: i64, req: UpdateMajorRequest) -> Result<Option<Major>> {
        self.update_major_impl(id, req).await
    }

    async fn delete_major(&self, id: i64) -> Result<bool> {
        self.delete_major_impl(id).await
    }

    async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        self.create_user_impl(req).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn get_user_detail(&self, id: i64) -> Result<Option<UserDetail>> {
        self.get_user_detail_impl(id).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn update_user(&self, id: i64, req: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, req).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn get_student_detail(&self, id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_detail_impl(id).await
    }

    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn update_student(&self, id: i64, req: UpdateStudentRequest) -> Result<Option<Student>> {
        self.update_student_impl(id, req).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn list_instructors(&self) -> Result<Vec<Instructor>> {
        self.list_instructors_impl().await
    }

    async fn get_instructor_detail(&self, id: i64) -> Result<Option<InstructorDetail>> {
        self.get_instructor_detail_impl(id).await
    }

    async fn get_instructor_by_user_id(&self, user_id: i64) -> Result<Option<Instructor>> {
        self.get_instructor_by_user_id_impl(user_id).await
    }

    async fn create_instructor(&self, req: CreateInstructorRequest) -> Result<Instructor> {
        self.create_instructor_impl(req).await
    }

    async fn update_instructor(
        &self,
        id: i64,
        req: UpdateInstructorRequest,
    ) -> Result<Option<Instructor>> {
        self.update_instructor_impl(id, req).await
    }

    async fn delete_instructor(&self, id: i64) -> Result<bool> {
        self.delete_instructor_impl(id).await
    }

    async fn list_staffs(&self) -> Result<Vec<Staff>> {
        self.list_staffs_impl().await
    }

    async fn get_staff_detail(&self, id: i64) -> Result<Option<StaffDetail>> {
        self.get_staff_detail_impl(id).await
    }

    async fn create_staff(&self, req: CreateStaffRequest) -> Result<Staff> {
        self.create_staff_impl(req).await
    }

    async fn update_staff(&self, id: i64, req: UpdateStaffRequest) -> Result<Option<Staff>> {
        self.update_staff_impl(id, req).await
    }

    async fn delete_staff(&self, id: i64) -> Result<bool> {
        self.delete_staff_impl(id).await
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.list_companies_impl().await
    }

    async fn get_company_detail(&self, id: i64) -> Result<Option<CompanyDetail>> {
        self.get_company_detail_impl(id).await
    }

    async fn create_company(&self, req: CreateCompanyRequest) -> Result<Company> {
        self.create_company_impl(req).await
    }

    async fn update_company(&self, id: i64, req: UpdateCompanyRequest) -> Result<Option<Company>> {
        self.update_company_impl(id, req).await
    }

    async fn delete_company(&self, id: i64) -> Result<bool> {
        self.delete_company_impl(id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn get_course_detail(&self, id: i64) -> Result<Option<CourseDetail>> {
        self.get_course_detail_impl(id).await
    }

    async fn create_course(&self, req: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(req).await
    }

    async fn update_course(&self, id: i64, req: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, req).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn list_course_sections(&self) -> Result<Vec<CourseSection>> {
        self.list_course_sections_impl().await
    }

    async fn get_course_section_detail(&self, id: i64) -> Result<Option<CourseSectionDetail>> {
        self.get_course_section_detail_impl(id).await
    }

    async fn create_course_section(
        &self,
        req: CreateCourseSectionRequest,
    ) -> Result<CourseSection> {
        self.create_course_section_impl(req).await
    }

    async fn update_course_section(
        &self,
        id: i64,
        req: UpdateCourseSectionRequest,
    ) -> Result<Option<CourseSection>> {
        self.update_course_section_impl(id, req).await
    }

    async fn delete_course_section(&self, id: i64) -> Result<bool> {
        self.delete_course_section_impl(id).await
    }

    async fn attach_section_member(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
        instructor_id: i64,
    ) -> Result<Option<CourseSectionMember>> {
        self.attach_section_member_impl(kind, course_section_id, instructor_id).await
    }

    async fn detach_section_member(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
        instructor_id: i64,
    ) -> Result<u64> {
        self.detach_section_member_impl(kind, course_section_id, instructor_id).await
    }

    async fn list_student_enrolls(&self) -> Result<Vec<StudentEnroll>> {
        self.list_student_enrolls_impl().await
    }

    async fn get_student_enroll_detail(&self, id: i64) -> Result<Option<StudentEnrollDetail>> {
        self.get_student_enroll_detail_impl(id).await
    }

    async fn create_student_enroll(
        &self,
        req: CreateStudentEnrollRequest,
    ) -> Result<StudentEnrollCreated> {
        self.create_student_enroll_impl(req).await
    }

    async fn update_student_enroll(
        &self,
        id: i64,
        req: UpdateStudentEnrollRequest,
    ) -> Result<Option<StudentEnroll>> {
        self.update_student_enroll_impl(id, req).await
    }

    async fn delete_student_enroll(&self, id: i64) -> Result<bool> {
        self.delete_student_enroll_impl(id).await
    }

    async fn bulk_update_grades(&self, ids: &[i64], grade: &str) -> Result<u64> {
        self.bulk_update_grades_impl(ids, grade).await
    }

    async fn bulk_update_attendance(&self, ids: &[i64], value: &str) -> Result<u64> {
        self.bulk_update_attendance_impl(ids, value).await
    }

    async fn get_approval_summary(
        &self,
        student_enroll_id: i64,
    ) -> Result<Option<ApprovalSummary>> {
        self.get_approval_summary_impl(student_enroll_id).await
    }

    async fn get_letter_context(&self, student_enroll_id: i64) -> Result<Option<LetterContext>> {
        self.get_letter_context_impl(student_enroll_id).await
    }

    async fn list_enroll_statuses(&self) -> Result<Vec<StudentEnrollStatus>> {
        self.list_enroll_statuses_impl().await
    }

    async fn get_enroll_status_detail(&self, id: i64) -> Result<Option<EnrollStatusDetail>> {
        self.get_enroll_status_detail_impl(id).await
    }

    async fn create_enroll_status(
        &self,
        req: CreateEnrollStatusRequest,
    ) -> Result<StudentEnrollStatus> {
        self.create_enroll_status_impl(req).await
    }

    async fn update_enroll_status(
        &self,
        id: i64,
        req: UpdateEnrollStatusRequest,
    ) -> Result<Option<StudentEnrollStatus>> {
        self.update_enroll_status_impl(id, req).await
    }

    async fn delete_enroll_status(&self, id: i64) -> Result<bool> {
        self.delete_enroll_status_impl(id).await
    }

    async fn transition_enroll_status(
        &self,
        id: i64,
        next: EnrollStatus,
        changed_by: i64,
        reason: Option<String>,
    ) -> Result<Option<StudentEnrollStatus>> {
        self.transition_enroll_status_impl(id, next, changed_by, reason).await
    }

    async fn cast_committee_vote(
        &self,
        id: i64,
        instructor_id: i64,
        vote: VoteChoice,
        remarks: Option<String>,
        changed_by: i64,
    ) -> Result<Option<CommitteeVoteResponse>> {
        self.cast_committee_vote_impl(id, instructor_id, vote, remarks, changed_by).await
    }

    async fn change_status_instructor(
        &self,
        id: i64,
        new_instructor_id: i64,
        changed_by: i64,
        reason: Option<String>,
    ) -> Result<Option<StudentEnrollStatus>> {
        self.change_status_instructor_impl(id, new_instructor_id, changed_by, reason).await
    }

    async fn list_instructor_statuses(
        &self,
        instructor_id: i64,
        status: Option<EnrollStatus>,
    ) -> Result<Vec<StudentEnrollStatus>> {
        self.list_instructor_statuses_impl(instructor_id, status).await
    }

    async fn get_assignment_history(
        &self,
        student_enroll_id: i64,
    ) -> Result<Option<Vec<AssignmentHistoryEntry>>> {
        self.get_assignment_history_impl(student_enroll_id).await
    }

    async fn list_student_trainings(&self) -> Result<Vec<StudentTraining>> {
        self.list_student_trainings_impl().await
    }

    async fn get_student_training_detail(&self, id: i64) -> Result<Option<StudentTrainingDetail>> {
        self.get_student_training_detail_impl(id).await
    }

    async fn create_student_training(
        &self,
        req: CreateStudentTrainingRequest,
    ) -> Result<StudentTraining> {
        self.create_student_training_impl(req).await
    }

    async fn update_student_training(
        &self,
        id: i64,
        req: UpdateStudentTrainingRequest,
    ) -> Result<Option<StudentTraining>> {
        self.update_student_training_impl(id, req).await
    }

    async fn delete_student_training(&self, id: i64) -> Result<bool> {
        self.delete_student_training_impl(id).await
    }

    async fn get_evaluation_status(
        &self,
        student_training_id: i64,
    ) -> Result<Option<EvaluationStatusResponse>> {
        self.get_evaluation_status_impl(student_training_id).await
    }

    async fn list_visitor_trainings(&self) -> Result<Vec<VisitorTraining>> {
        self.list_visitor_trainings_impl().await
    }

    async fn get_visitor_training_detail(&self, id: i64) -> Result<Option<VisitorTrainingDetail>> {
        self.get_visitor_training_detail_impl(id).await
    }

    async fn create_visitor_training(
        &self,
        req: CreateVisitorTrainingRequest,
    ) -> Result<VisitorTraining> {
        self.create_visitor_training_impl(req).await
    }

    async fn update_visitor_training(
        &self,
        id: i64,
        req: UpdateVisitorTrainingRequest,
    ) -> Result<Option<VisitorTraining>> {
        self.update_visitor_training_impl(id, req).await
    }

    async fn delete_visitor_training(&self, id: i64) -> Result<bool> {
        self.delete_visitor_training_impl(id).await
    }

    async fn assign_visitor(
        &self,
        student_enroll_id: i64,
        visitor_instructor_id: i64,
    ) -> Result<VisitorAssignment> {
        self.assign_visitor_impl(student_enroll_id, visitor_instructor_id).await
    }

    async fn bulk_assign_visitor(
        &self,
        student_enroll_ids: &[i64],
        visitor_instructor_id: i64,
    ) -> Result<BulkVisitorAssignResponse> {
        self.bulk_assign_visitor_impl(student_enroll_ids, visitor_instructor_id)
            .await
    }

    async fn list_visitor_schedules(&self) -> Result<Vec<VisitorSchedule>> {
        self.list_visitor_schedules_impl().await
    }

    async fn get_visitor_schedule_detail(&self, id: i64) -> Result<Option<VisitorScheduleDetail>> {
        self.get_visitor_schedule_detail_impl(id).await
    }

    async fn create_visitor_schedule(
        &self,
        req: CreateVisitorScheduleRequest,
    ) -> Result<VisitorSchedule> {
        self.create_visitor_schedule_impl(req).await
    }

    async fn update_visitor_schedule(
        &self,
        id: i64,
        req: UpdateVisitorScheduleRequest,
    ) -> Result<Option<VisitorSchedule>> {
        self.update_visitor_schedule_impl(id, req).await
    }

    async fn delete_visitor_schedule(&self, id: i64) -> Result<bool> {
        self.delete_visitor_schedule_impl(id).await
    }

    async fn list_visits_pictures(&self) -> Result<Vec<VisitsPicture>> {
        self.list_visits_pictures_impl().await
    }

    async fn list_schedule_pictures(&self, visitor_schedule_id: i64) -> Result<Vec<VisitsPicture>> {
        self.list_schedule_pictures_impl(visitor_schedule_id).await
    }

    async fn get_visits_picture(&self, id: i64) -> Result<Option<VisitsPicture>> {
        self.get_visits_picture_impl(id).await
    }

    async fn create_visits_picture(&self, picture: NewVisitsPicture) -> Result<VisitsPicture> {
        self.create_visits_picture_impl(picture).await
    }

    async fn update_visits_picture(
        &self,
        id: i64,
        req: UpdateVisitsPictureRequest,
    ) -> Result<Option<VisitsPicture>> {
        self.update_visits_picture_impl(id, req).await
    }

    async fn delete_visits_picture(&self, id: i64) -> Result<Option<VisitsPicture>> {
        self.delete_visits_picture_impl(id).await
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>> {
        self.list_evaluations_impl().await
    }

    async fn get_evaluation(&self, id: i64) -> Result<Option<Evaluation>> {
        self.get_evaluation_impl(id).await
    }

    async fn create_evaluation(&self, req: CreateEvaluationRequest) -> Result<Evaluation> {
        self.create_evaluation_impl(req).await
    }

    async fn update_evaluation(
        &self,
        id: i64,
        req: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        self.update_evaluation_impl(id, req).await
    }

    async fn delete_evaluation(&self, id: i64) -> Result<bool> {
        self.delete_evaluation_impl(id).await
    }
}
