use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 每类资源提供 list / get_*_detail / create / update / delete 五个基本操作：
/// update 与 get 在记录不存在时返回 `Ok(None)`，delete 返回是否删除了记录。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // 数据库连通性检查
    async fn ping(&self) -> Result<()>;

    /// 组织架构
    async fn list_campuses(&self) -> Result<Vec<Campus>>;
    async fn get_campus_detail(&self, id: i64) -> Result<Option<CampusDetail>>;
    async fn create_campus(&self, req: CreateCampusRequest) -> Result<Campus>;
    async fn update_campus(&self, id: i64, req: UpdateCampusRequest) -> Result<Option<Campus>>;
    async fn delete_campus(&self, id: i64) -> Result<bool>;

    async fn list_faculties(&self) -> Result<Vec<Faculty>>;
    async fn get_faculty_detail(&self, id: i64) -> Result<Option<FacultyDetail>>;
    async fn create_faculty(&self, req: CreateFacultyRequest) -> Result<Faculty>;
    async fn update_faculty(&self, id: i64, req: UpdateFacultyRequest)
    -> Result<Option<Faculty>>;
    async fn delete_faculty(&self, id: i64) -> Result<bool>;

    async fn list_programs(&self) -> Result<Vec<Program>>;
    async fn get_program_detail(&self, id: i64) -> Result<Option<ProgramDetail>>;
    async fn create_program(&self, req: CreateProgramRequest) -> Result<Program>;
    async fn update_program(&self, id: i64, req: UpdateProgramRequest)
    -> Result<Option<Program>>;
    async fn delete_program(&self, id: i64) -> Result<bool>;

    async fn list_curriculums(&self) -> Result<Vec<Curriculum>>;
    async fn get_curriculum_detail(&self, id: i64) -> Result<Option<CurriculumDetail>>;
    async fn create_curriculum(&self, req: CreateCurriculumRequest) -> Result<Curriculum>;
    async fn update_curriculum(
        &self,
        id: i64,
        req: UpdateCurriculumRequest,
    ) -> Result<Option<Curriculum>>;
    async fn delete_curriculum(&self, id: i64) -> Result<bool>;

    async fn list_majors(&self) -> Result<Vec<Major>>;
    async fn get_major_detail(&self, id: i64) -> Result<Option<MajorDetail>>;
    async fn create_major(&self, req: CreateMajorRequest) -> Result<Major>;
    async fn update_major(&self, id: i64, req: UpdateMajorRequest) -> Result<Option<Major>>;
    async fn delete_major(&self, id: i64) -> Result<bool>;

    /// 用户
    // 密码字段需由服务层先行哈希
    async fn create_user(&self, req: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    async fn get_user_detail(&self, id: i64) -> Result<Option<UserDetail>>;
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn count_users(&self) -> Result<u64>;
    async fn update_user(&self, id: i64, req: UpdateUserRequest) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 人员档案
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn get_student_detail(&self, id: i64) -> Result<Option<StudentDetail>>;
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn update_student(&self, id: i64, req: UpdateStudentRequest)
    -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    async fn list_instructors(&self) -> Result<Vec<Instructor>>;
    async fn get_instructor_detail(&self, id: i64) -> Result<Option<InstructorDetail>>;
    async fn get_instructor_by_user_id(&self, user_id: i64) -> Result<Option<Instructor>>;
    async fn create_instructor(&self, req: CreateInstructorRequest) -> Result<Instructor>;
    async fn update_instructor(
        &self,
        id: i64,
        req: UpdateInstructorRequest,
    ) -> Result<Option<Instructor>>;
    async fn delete_instructor(&self, id: i64) -> Result<bool>;

    async fn list_staffs(&self) -> Result<Vec<Staff>>;
    async fn get_staff_detail(&self, id: i64) -> Result<Option<StaffDetail>>;
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<Staff>;
    async fn update_staff(&self, id: i64, req: UpdateStaffRequest) -> Result<Option<Staff>>;
    async fn delete_staff(&self, id: i64) -> Result<bool>;

    /// 实习单位
    async fn list_companies(&self) -> Result<Vec<Company>>;
    async fn get_company_detail(&self, id: i64) -> Result<Option<CompanyDetail>>;
    async fn create_company(&self, req: CreateCompanyRequest) -> Result<Company>;
    async fn update_company(&self, id: i64, req: UpdateCompanyRequest)
    -> Result<Option<Company>>;
    async fn delete_company(&self, id: i64) -> Result<bool>;

    /// 课程与课程班
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn get_course_detail(&self, id: i64) -> Result<Option<CourseDetail>>;
    async fn create_course(&self, req: CreateCourseRequest) -> Result<Course>;
    async fn update_course(&self, id: i64, req: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    async fn list_course_sections(&self) -> Result<Vec<CourseSection>>;
    async fn get_course_section_detail(&self, id: i64) -> Result<Option<CourseSectionDetail>>;
    async fn create_course_section(&self, req: CreateCourseSectionRequest)
    -> Result<CourseSection>;
    async fn update_course_section(
        &self,
        id: i64,
        req: UpdateCourseSectionRequest,
    ) -> Result<Option<CourseSection>>;
    async fn delete_course_section(&self, id: i64) -> Result<bool>;

    // 关联教师或委员会成员；已关联时返回 None，教师或课程班不存在时返回 NotFound
    async fn attach_section_member(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
        instructor_id: i64,
    ) -> Result<Option<CourseSectionMember>>;
    // 解除关联，未关联时什么也不做，返回删除行数
    async fn detach_section_member(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
        instructor_id: i64,
    ) -> Result<u64>;

    /// 选课
    async fn list_student_enrolls(&self) -> Result<Vec<StudentEnroll>>;
    async fn get_student_enroll_detail(&self, id: i64) -> Result<Option<StudentEnrollDetail>>;
    // 选课、实习单位、实习信息、评价题目与审批记录在同一事务中写入
    async fn create_student_enroll(
        &self,
        req: CreateStudentEnrollRequest,
    ) -> Result<StudentEnrollCreated>;
    async fn update_student_enroll(
        &self,
        id: i64,
        req: UpdateStudentEnrollRequest,
    ) -> Result<Option<StudentEnroll>>;
    async fn delete_student_enroll(&self, id: i64) -> Result<bool>;
    // 批量写入成绩，返回实际更新行数
    async fn bulk_update_grades(&self, ids: &[i64], grade: &str) -> Result<u64>;
    // 批量写入出勤
    async fn bulk_update_attendance(&self, ids: &[i64], value: &str) -> Result<u64>;
    async fn get_approval_summary(&self, student_enroll_id: i64)
    -> Result<Option<ApprovalSummary>>;
    async fn get_letter_context(&self, student_enroll_id: i64) -> Result<Option<LetterContext>>;

    /// 审批记录
    async fn list_enroll_statuses(&self) -> Result<Vec<StudentEnrollStatus>>;
    async fn get_enroll_status_detail(&self, id: i64) -> Result<Option<EnrollStatusDetail>>;
    async fn create_enroll_status(
        &self,
        req: CreateEnrollStatusRequest,
    ) -> Result<StudentEnrollStatus>;
    async fn update_enroll_status(
        &self,
        id: i64,
        req: UpdateEnrollStatusRequest,
    ) -> Result<Option<StudentEnrollStatus>>;
    async fn delete_enroll_status(&self, id: i64) -> Result<bool>;
    async fn transition_enroll_status(
        &self,
        id: i64,
        next: EnrollStatus,
        changed_by: i64,
        reason: Option<String>,
    ) -> Result<Option<StudentEnrollStatus>>;
    async fn cast_committee_vote(
        &self,
        id: i64,
        instructor_id: i64,
        vote: VoteChoice,
        remarks: Option<String>,
        changed_by: i64,
    ) -> Result<Option<CommitteeVoteResponse>>;
    async fn change_status_instructor(
        &self,
        id: i64,
        new_instructor_id: i64,
        changed_by: i64,
        reason: Option<String>,
    ) -> Result<Option<StudentEnrollStatus>>;
    // 某位教师负责的审批记录
    async fn list_instructor_statuses(
        &self,
        instructor_id: i64,
        status: Option<EnrollStatus>,
    ) -> Result<Vec<StudentEnrollStatus>>;
    // 选课不存在时返回 None
    async fn get_assignment_history(
        &self,
        student_enroll_id: i64,
    ) -> Result<Option<Vec<AssignmentHistoryEntry>>>;

    /// 实习安排
    async fn list_student_trainings(&self) -> Result<Vec<StudentTraining>>;
    async fn get_student_training_detail(&self, id: i64)
    -> Result<Option<StudentTrainingDetail>>;
    async fn create_student_training(
        &self,
        req: CreateStudentTrainingRequest,
    ) -> Result<StudentTraining>;
    async fn update_student_training(
        &self,
        id: i64,
        req: UpdateStudentTrainingRequest,
    ) -> Result<Option<StudentTraining>>;
    async fn delete_student_training(&self, id: i64) -> Result<bool>;
    async fn get_evaluation_status(
        &self,
        student_training_id: i64,
    ) -> Result<Option<EvaluationStatusResponse>>;

    /// 巡访
    async fn list_visitor_trainings(&self) -> Result<Vec<VisitorTraining>>;
    async fn get_visitor_training_detail(&self, id: i64)
    -> Result<Option<VisitorTrainingDetail>>;
    async fn create_visitor_training(
        &self,
        req: CreateVisitorTrainingRequest,
    ) -> Result<VisitorTraining>;
    async fn update_visitor_training(
        &self,
        id: i64,
        req: UpdateVisitorTrainingRequest,
    ) -> Result<Option<VisitorTraining>>;
    async fn delete_visitor_training(&self, id: i64) -> Result<bool>;
    // 每条选课至多一名巡访教师，巡访教师或选课不存在时返回 NotFound
    async fn assign_visitor(
        &self,
        student_enroll_id: i64,
        visitor_instructor_id: i64,
    ) -> Result<VisitorAssignment>;
    async fn bulk_assign_visitor(
        &self,
        student_enroll_ids: &[i64],
        visitor_instructor_id: i64,
    ) -> Result<BulkVisitorAssignResponse>;

    async fn list_visitor_schedules(&self) -> Result<Vec<VisitorSchedule>>;
    async fn get_visitor_schedule_detail(&self, id: i64)
    -> Result<Option<VisitorScheduleDetail>>;
    async fn create_visitor_schedule(
        &self,
        req: CreateVisitorScheduleRequest,
    ) -> Result<VisitorSchedule>;
    async fn update_visitor_schedule(
        &self,
        id: i64,
        req: UpdateVisitorScheduleRequest,
    ) -> Result<Option<VisitorSchedule>>;
    async fn delete_visitor_schedule(&self, id: i64) -> Result<bool>;

    async fn list_visits_pictures(&self) -> Result<Vec<VisitsPicture>>;
    async fn list_schedule_pictures(&self, visitor_schedule_id: i64)
    -> Result<Vec<VisitsPicture>>;
    async fn get_visits_picture(&self, id: i64) -> Result<Option<VisitsPicture>>;
    async fn create_visits_picture(&self, picture: NewVisitsPicture) -> Result<VisitsPicture>;
    async fn update_visits_picture(
        &self,
        id: i64,
        req: UpdateVisitsPictureRequest,
    ) -> Result<Option<VisitsPicture>>;
    // 返回被删除的记录，便于调用方清理磁盘文件
    async fn delete_visits_picture(&self, id: i64) -> Result<Option<VisitsPicture>>;

    /// 评价
    async fn list_evaluations(&self) -> Result<Vec<Evaluation>>;
    async fn get_evaluation(&self, id: i64) -> Result<Option<Evaluation>>;
    async fn create_evaluation(&self, req: CreateEvaluationRequest) -> Result<Evaluation>;
    async fn update_evaluation(
        &self,
        id: i64,
        req: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>>;
    async fn delete_evaluation(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
