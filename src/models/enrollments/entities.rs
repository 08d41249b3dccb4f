use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选课记录：学生与课程班的关联
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct StudentEnroll {
    pub id: i64,
    pub student_id: i64,
    pub course_section_id: i64,
    pub grade: Option<String>,
    pub attend_training: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 审批状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum EnrollStatus {
    Registered,        // 已登记
    AdvisorApproved,   // 指导教师已批准
    CommitteeApproved, // 委员会已批准
    DocumentApproved,  // 文件已批准
    DocumentCancelled, // 批准后撤销
    Approve,           // 旧版：批准
    Denied,            // 拒绝
    Pending,           // 旧版：待处理
}

impl EnrollStatus {
    pub const ALL: [EnrollStatus; 8] = [
        EnrollStatus::Registered,
        EnrollStatus::AdvisorApproved,
        EnrollStatus::CommitteeApproved,
        EnrollStatus::DocumentApproved,
        EnrollStatus::DocumentCancelled,
        EnrollStatus::Approve,
        EnrollStatus::Denied,
        EnrollStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollStatus::Registered => "registered",
            EnrollStatus::AdvisorApproved => "advisor_approved",
            EnrollStatus::CommitteeApproved => "committee_approved",
            EnrollStatus::DocumentApproved => "document_approved",
            EnrollStatus::DocumentCancelled => "document_cancelled",
            EnrollStatus::Approve => "approve",
            EnrollStatus::Denied => "denied",
            EnrollStatus::Pending => "pending",
        }
    }

    /// 泰文显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            EnrollStatus::Registered => "ลงทะเบียน",
            EnrollStatus::AdvisorApproved => "อาจารย์ที่ปรึกษาอนุมัติ",
            EnrollStatus::CommitteeApproved => "คณะกรรมการอนุมัติ",
            EnrollStatus::DocumentApproved => "เอกสารอนุมัติ",
            EnrollStatus::DocumentCancelled => "ยกเลิกหลังอนุมัติ",
            EnrollStatus::Approve => "อนุมัติ",
            EnrollStatus::Denied => "ปฏิเสธ",
            EnrollStatus::Pending => "รอดำเนินการ",
        }
    }
}

impl<'de> Deserialize<'de> for EnrollStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的审批状态: '{s}'. 支持的状态: registered, advisor_approved, committee_approved, document_approved, document_cancelled, approve, denied, pending"
            ))
        })
    }
}

impl std::fmt::Display for EnrollStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EnrollStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnrollStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid enroll status: {s}"))
    }
}

// 委员会投票选项
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum VoteChoice {
    Approve,
    Reject,
}

// 单条委员会投票
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CommitteeVote {
    pub instructor_id: i64,
    pub vote: VoteChoice,
    pub voted_at: DateTime<Utc>,
    pub remarks: Option<String>,
}

// 状态变更记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct StatusTransition {
    pub from_status: EnrollStatus,
    pub to_status: EnrollStatus,
    pub changed_by: i64,
    pub changed_at: DateTime<Utc>,
    pub reason: Option<String>,
}

// 指导教师变更记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct InstructorAssignmentAudit {
    pub previous_instructor_id: Option<i64>,
    pub new_instructor_id: i64,
    pub changed_by: i64,
    pub changed_at: DateTime<Utc>,
    pub reason: Option<String>,
    pub notification_sent: bool,
}

// 某位教师对一条选课记录的审批
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct StudentEnrollStatus {
    pub id: i64,
    pub student_enroll_id: i64,
    pub instructor_id: i64,
    pub status: EnrollStatus,
    pub remarks: Option<String>,
    pub committee_votes: Vec<CommitteeVote>,
    pub committee_vote_count: i32,
    pub required_committee_votes: i32,
    pub committee_voting_deadline: Option<DateTime<Utc>>,
    pub status_history: Vec<StatusTransition>,
    pub instructor_assignment_history: Vec<InstructorAssignmentAudit>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
