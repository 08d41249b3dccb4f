use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{EnrollStatus, VoteChoice};
use crate::models::companies::requests::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::models::trainings::requests::TrainingFields;

// 学生选课，可同时登记实习单位与实习信息
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateStudentEnrollRequest {
    pub student_id: i64,
    pub course_section_id: i64,
    pub grade: Option<String>,
    /// 已存在的实习单位；与 company 同时给出时以 company_id 为准
    pub company_id: Option<i64>,
    pub company: Option<CreateCompanyRequest>,
    pub training: Option<TrainingFields>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateStudentEnrollRequest {
    pub student_id: Option<i64>,
    pub course_section_id: Option<i64>,
    pub grade: Option<String>,
    pub attend_training: Option<String>,
    pub company: Option<UpdateCompanyRequest>,
    pub training: Option<TrainingFields>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateEnrollStatusRequest {
    pub student_enroll_id: i64,
    pub instructor_id: i64,
    /// 缺省为 pending
    pub status: Option<EnrollStatus>,
    pub remarks: Option<String>,
    pub required_committee_votes: Option<i32>,
    pub committee_voting_deadline: Option<DateTime<Utc>>,
}

// 普通更新不修改状态，状态变更走流转接口
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateEnrollStatusRequest {
    pub remarks: Option<String>,
    pub required_committee_votes: Option<i32>,
    pub committee_voting_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct TransitionStatusRequest {
    pub status: EnrollStatus,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CommitteeVoteRequest {
    /// 缺省为当前登录教师，只有管理员可以指定其他教师
    pub instructor_id: Option<i64>,
    pub vote: VoteChoice,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct ChangeInstructorRequest {
    pub new_instructor_id: i64,
    pub reason: Option<String>,
}

// 教师查看自己负责的审批记录
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct InstructorStatusQuery {
    /// 职员与管理员可查看指定教师
    pub instructor_id: Option<i64>,
    pub status: Option<EnrollStatus>,
}
