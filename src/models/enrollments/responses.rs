use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use super::entities::{
    CommitteeVote, EnrollStatus, InstructorAssignmentAudit, StatusTransition, StudentEnroll,
    StudentEnrollStatus,
};
use crate::models::courses::entities::{Course, CourseSection};
use crate::models::people::entities::{Instructor, Student};
use crate::models::trainings::responses::{StudentTrainingDetail, VisitorTrainingDetail};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct StudentEnrollDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enroll: StudentEnroll,
    pub student: Option<Student>,
    pub course_section: Option<CourseSection>,
    pub course: Option<Course>,
    pub statuses: Vec<StudentEnrollStatus>,
    pub student_training: Option<StudentTrainingDetail>,
    pub visitor_trainings: Vec<VisitorTrainingDetail>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollStatusDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub status: StudentEnrollStatus,
    pub status_display_name: String,
    pub instructor: Option<Instructor>,
}

// 委员会投票统计
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CommitteeVotingResult {
    pub approved: bool,
    pub approve_count: i32,
    pub reject_count: i32,
    pub approval_percentage: i32,
    pub voting_complete: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CommitteeVoteResponse {
    pub status: StudentEnrollStatus,
    pub result: CommitteeVotingResult,
}

// 选课记录的审批汇总
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct ApprovalSummary {
    pub student_enroll_id: i64,
    pub current_status: EnrollStatus,
    pub status_text: String,
    pub status_updated_at: DateTime<Utc>,
    pub committee_votes: Vec<CommitteeVote>,
    pub approval_percentage: i32,
    pub status_history: Vec<StatusTransition>,
    pub advisor_id: Option<i64>,
    pub advisor_approval_date: Option<DateTime<Utc>>,
    pub needs_attention: bool,
}

// 复合创建的结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct StudentEnrollCreated {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enroll: StudentEnroll,
    pub student_training_id: Option<i64>,
    pub status_count: usize,
}

// 指导教师变更记录，附带前后教师的姓名
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct AssignmentHistoryEntry {
    pub enroll_status_id: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub audit: InstructorAssignmentAudit,
    pub previous_instructor_name: Option<String>,
    pub new_instructor_name: Option<String>,
}
