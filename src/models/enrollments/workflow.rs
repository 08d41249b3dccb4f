//! 选课审批流程
//!
//! 状态流转、委员会投票与指导教师变更均在内存中的 [`StudentEnrollStatus`] 上完成，
//! 由存储层在事务内加载、调用并写回。

use chrono::{DateTime, Duration, Utc};

use super::entities::{
    CommitteeVote, EnrollStatus, InstructorAssignmentAudit, StatusTransition, StudentEnrollStatus,
    VoteChoice,
};
use super::responses::{ApprovalSummary, CommitteeVotingResult};
use crate::errors::{CoopError, Result};

/// 未配置时所需的委员会票数
pub const DEFAULT_REQUIRED_COMMITTEE_VOTES: i32 = 3;

/// 记录超过该天数未更新即需要管理员关注
const STALE_RECORD_DAYS: i64 = 7;

const ATTENTION_SUFFIX: &str = " (ต้องการความสนใจจากผู้ดูแลระบบ)";

impl EnrollStatus {
    /// 当前状态允许流转到的目标状态
    pub fn allowed_transitions(&self) -> &'static [EnrollStatus] {
        use EnrollStatus::*;
        match self {
            Registered => &[AdvisorApproved, Denied],
            AdvisorApproved => &[CommitteeApproved, Denied],
            CommitteeApproved => &[DocumentApproved, DocumentCancelled],
            DocumentApproved => &[DocumentCancelled],
            DocumentCancelled => &[],
            Approve => &[Denied],
            Denied => &[Registered],
            Pending => &[Approve, Denied, AdvisorApproved],
        }
    }

    pub fn can_transition_to(&self, next: EnrollStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// 终态下不允许再更换指导教师
    pub fn is_final(&self) -> bool {
        matches!(self, EnrollStatus::DocumentCancelled)
    }

    /// 汇总多位教师审批时的优先级，数值高者代表整体状态
    pub fn summary_priority(&self) -> i32 {
        match self {
            EnrollStatus::DocumentCancelled => 6,
            EnrollStatus::CommitteeApproved => 5,
            EnrollStatus::DocumentApproved => 4,
            EnrollStatus::AdvisorApproved => 3,
            EnrollStatus::Approve | EnrollStatus::Denied => 2,
            EnrollStatus::Pending => 1,
            EnrollStatus::Registered => 0,
        }
    }

    /// 审批汇总使用的泰文描述
    pub fn summary_text(&self) -> &'static str {
        match self {
            EnrollStatus::Registered => "ลงทะเบียนแล้ว",
            EnrollStatus::AdvisorApproved => "อนุมัติโดยอาจารย์ที่ปรึกษา",
            EnrollStatus::CommitteeApproved => "อนุมัติโดยคณะกรรมการ",
            EnrollStatus::DocumentApproved => "อนุมัติเอกสาร",
            EnrollStatus::DocumentCancelled => "ยกเลิกเอกสาร",
            EnrollStatus::Approve => "อนุมัติ",
            EnrollStatus::Denied => "ปฏิเสธ",
            EnrollStatus::Pending => "รอดำเนินการ",
        }
    }
}

impl StudentEnrollStatus {
    pub fn can_transition_to(&self, next: EnrollStatus) -> bool {
        self.status.can_transition_to(next)
    }

    /// 流转到新状态并追加历史；非法流转不做任何修改
    pub fn transition_to(
        &mut self,
        next: EnrollStatus,
        changed_by: i64,
        reason: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if !self.can_transition_to(next) {
            return Err(CoopError::invalid_transition(format!(
                "Cannot transition from {} to {}",
                self.status, next
            )));
        }

        self.status_history.push(StatusTransition {
            from_status: self.status,
            to_status: next,
            changed_by,
            changed_at: now,
            reason,
        });
        self.status = next;
        self.updated_at = now;
        Ok(())
    }

    pub fn requires_committee_voting(&self) -> bool {
        self.status == EnrollStatus::AdvisorApproved
    }

    pub fn has_instructor_voted(&self, instructor_id: i64) -> bool {
        self.committee_votes
            .iter()
            .any(|v| v.instructor_id == instructor_id)
    }

    pub fn is_voting_expired(&self, now: DateTime<Utc>) -> bool {
        self.committee_voting_deadline
            .is_some_and(|deadline| now > deadline)
    }

    pub fn is_committee_voting_complete(&self) -> bool {
        self.committee_vote_count >= self.required_committee_votes
    }

    pub fn committee_voting_result(&self) -> CommitteeVotingResult {
        let approve_count = count_votes(&self.committee_votes, VoteChoice::Approve);
        let reject_count = count_votes(&self.committee_votes, VoteChoice::Reject);
        CommitteeVotingResult {
            approved: approve_count > reject_count,
            approve_count,
            reject_count,
            approval_percentage: approval_percentage(&self.committee_votes),
            voting_complete: self.is_committee_voting_complete(),
        }
    }

    /// 记录一张委员会投票
    ///
    /// 票数达到要求后自动流转：赞成多于反对为 committee_approved，否则为 denied。
    pub fn add_committee_vote(
        &mut self,
        instructor_id: i64,
        vote: VoteChoice,
        remarks: Option<String>,
        changed_by: i64,
        now: DateTime<Utc>,
    ) -> Result<CommitteeVotingResult> {
        if !self.requires_committee_voting() {
            return Err(CoopError::vote_rejected(format!(
                "Committee voting is not open while status is {}",
                self.status
            )));
        }
        if self.has_instructor_voted(instructor_id) {
            return Err(CoopError::vote_rejected(
                "Instructor has already voted on this enrollment",
            ));
        }
        if self.is_voting_expired(now) {
            return Err(CoopError::vote_rejected("Committee voting deadline has passed"));
        }

        self.committee_votes.push(CommitteeVote {
            instructor_id,
            vote,
            voted_at: now,
            remarks,
        });
        self.committee_vote_count = self.committee_votes.len() as i32;
        self.updated_at = now;

        let result = self.committee_voting_result();
        if result.voting_complete {
            let next = if result.approved {
                EnrollStatus::CommitteeApproved
            } else {
                EnrollStatus::Denied
            };
            self.transition_to(
                next,
                changed_by,
                Some("Committee voting completed".to_string()),
                now,
            )?;
        }
        Ok(result)
    }

    pub fn can_change_instructor(&self, new_instructor_id: i64) -> bool {
        new_instructor_id > 0 && new_instructor_id != self.instructor_id && !self.status.is_final()
    }

    /// 更换负责审批的教师并记录审计信息
    pub fn change_instructor(
        &mut self,
        new_instructor_id: i64,
        changed_by: i64,
        reason: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if !self.can_change_instructor(new_instructor_id) {
            return Err(CoopError::assignment_rejected(format!(
                "Cannot reassign status {} to instructor {}",
                self.id, new_instructor_id
            )));
        }

        self.instructor_assignment_history
            .push(InstructorAssignmentAudit {
                previous_instructor_id: Some(self.instructor_id),
                new_instructor_id,
                changed_by,
                changed_at: now,
                reason,
                notification_sent: false,
            });
        self.instructor_id = new_instructor_id;
        self.updated_at = now;
        Ok(())
    }

    pub fn latest_instructor_change(&self) -> Option<&InstructorAssignmentAudit> {
        self.instructor_assignment_history.last()
    }
}

fn count_votes(votes: &[CommitteeVote], choice: VoteChoice) -> i32 {
    votes.iter().filter(|v| v.vote == choice).count() as i32
}

/// 赞成票百分比，四舍五入；无投票时为 0
pub fn approval_percentage(votes: &[CommitteeVote]) -> i32 {
    if votes.is_empty() {
        return 0;
    }
    let approve = count_votes(votes, VoteChoice::Approve) as f64;
    (approve / votes.len() as f64 * 100.0).round() as i32
}

/// 按优先级选出整体状态，优先级相同时取靠前的记录
pub fn determine_overall_status(records: &[StudentEnrollStatus]) -> EnrollStatus {
    let mut overall = EnrollStatus::Registered;
    let mut highest = -1;
    for record in records {
        let priority = record.status.summary_priority();
        if priority > highest {
            highest = priority;
            overall = record.status;
        }
    }
    overall
}

/// 是否需要管理员介入：停留在中间状态、长时间未更新，或历史原因中出现错误/冲突
pub fn requires_administrative_attention(
    records: &[StudentEnrollStatus],
    now: DateTime<Utc>,
) -> bool {
    let is_stuck = records.iter().any(|r| {
        matches!(
            r.status,
            EnrollStatus::AdvisorApproved | EnrollStatus::DocumentApproved
        )
    });
    let has_stale = records
        .iter()
        .any(|r| now - r.updated_at > Duration::days(STALE_RECORD_DAYS));
    let has_conflicts = records.iter().any(|r| {
        r.status_history.iter().any(|t| {
            t.reason
                .as_deref()
                .is_some_and(|reason| reason.contains("error") || reason.contains("conflict"))
        })
    });
    is_stuck || has_stale || has_conflicts
}

/// 汇总一条选课记录下所有教师的审批情况；没有审批记录时返回 None
pub fn summarize_approval(
    student_enroll_id: i64,
    records: &[StudentEnrollStatus],
    now: DateTime<Utc>,
) -> Option<ApprovalSummary> {
    let mut sorted: Vec<&StudentEnrollStatus> = records.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    let latest = *sorted.first()?;

    let ordered: Vec<StudentEnrollStatus> = sorted.iter().map(|r| (*r).clone()).collect();
    let current_status = determine_overall_status(&ordered);
    let needs_attention = requires_administrative_attention(&ordered, now);

    let mut status_text = current_status.summary_text().to_string();
    if needs_attention {
        status_text.push_str(ATTENTION_SUFFIX);
    }

    let advisor = ordered.iter().find(|r| {
        matches!(
            r.status,
            EnrollStatus::AdvisorApproved | EnrollStatus::Approve
        )
    });

    Some(ApprovalSummary {
        student_enroll_id,
        current_status,
        status_text,
        status_updated_at: latest.updated_at,
        committee_votes: latest.committee_votes.clone(),
        approval_percentage: approval_percentage(&latest.committee_votes),
        status_history: latest.status_history.clone(),
        advisor_id: advisor.map(|r| r.instructor_id),
        advisor_approval_date: advisor.map(|r| r.updated_at),
        needs_attention,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn record(id: i64, status: EnrollStatus) -> StudentEnrollStatus {
        StudentEnrollStatus {
            id,
            student_enroll_id: 1,
            instructor_id: 10,
            status,
            remarks: None,
            committee_votes: Vec::new(),
            committee_vote_count: 0,
            required_committee_votes: DEFAULT_REQUIRED_COMMITTEE_VOTES,
            committee_voting_deadline: None,
            status_history: Vec::new(),
            instructor_assignment_history: Vec::new(),
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn test_transition_table() {
        use EnrollStatus::*;
        assert!(Registered.can_transition_to(AdvisorApproved));
        assert!(Registered.can_transition_to(Denied));
        assert!(!Registered.can_transition_to(CommitteeApproved));
        assert!(AdvisorApproved.can_transition_to(CommitteeApproved));
        assert!(CommitteeApproved.can_transition_to(DocumentCancelled));
        assert!(DocumentApproved.can_transition_to(DocumentCancelled));
        assert!(Denied.can_transition_to(Registered));
        assert!(Pending.can_transition_to(AdvisorApproved));
        assert!(!Approve.can_transition_to(Registered));
        for next in EnrollStatus::ALL {
            assert!(!DocumentCancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_transition_appends_history() {
        let mut status = record(1, EnrollStatus::Registered);
        status
            .transition_to(EnrollStatus::AdvisorApproved, 7, Some("ok".into()), now())
            .unwrap();

        assert_eq!(status.status, EnrollStatus::AdvisorApproved);
        assert_eq!(status.status_history.len(), 1);
        let entry = &status.status_history[0];
        assert_eq!(entry.from_status, EnrollStatus::Registered);
        assert_eq!(entry.to_status, EnrollStatus::AdvisorApproved);
        assert_eq!(entry.changed_by, 7);
        assert_eq!(entry.reason.as_deref(), Some("ok"));
    }

    #[test]
    fn test_invalid_transition_leaves_record_untouched() {
        let mut status = record(1, EnrollStatus::Registered);
        let err = status
            .transition_to(EnrollStatus::DocumentApproved, 7, None, now())
            .unwrap_err();

        assert!(matches!(err, CoopError::InvalidTransition(_)));
        assert_eq!(status.status, EnrollStatus::Registered);
        assert!(status.status_history.is_empty());
    }

    #[test]
    fn test_vote_requires_advisor_approved() {
        let mut status = record(1, EnrollStatus::Registered);
        let err = status
            .add_committee_vote(20, VoteChoice::Approve, None, 1, now())
            .unwrap_err();
        assert!(matches!(err, CoopError::VoteRejected(_)));
        assert!(status.committee_votes.is_empty());
    }

    #[test]
    fn test_duplicate_vote_rejected() {
        let mut status = record(1, EnrollStatus::AdvisorApproved);
        status
            .add_committee_vote(20, VoteChoice::Approve, None, 1, now())
            .unwrap();
        let err = status
            .add_committee_vote(20, VoteChoice::Reject, None, 1, now())
            .unwrap_err();

        assert!(matches!(err, CoopError::VoteRejected(_)));
        assert_eq!(status.committee_vote_count, 1);
    }

    #[test]
    fn test_vote_after_deadline_rejected() {
        let mut status = record(1, EnrollStatus::AdvisorApproved);
        status.committee_voting_deadline = Some(now() - Duration::hours(1));

        assert!(status.is_voting_expired(now()));
        assert!(
            status
                .add_committee_vote(20, VoteChoice::Approve, None, 1, now())
                .is_err()
        );
    }

    #[test]
    fn test_voting_completion_approves() {
        let mut status = record(1, EnrollStatus::AdvisorApproved);
        status
            .add_committee_vote(20, VoteChoice::Approve, None, 1, now())
            .unwrap();
        status
            .add_committee_vote(21, VoteChoice::Reject, None, 1, now())
            .unwrap();
        assert_eq!(status.status, EnrollStatus::AdvisorApproved);

        let result = status
            .add_committee_vote(22, VoteChoice::Approve, Some("good".into()), 1, now())
            .unwrap();

        assert!(result.voting_complete);
        assert!(result.approved);
        assert_eq!(result.approve_count, 2);
        assert_eq!(result.approval_percentage, 67);
        assert_eq!(status.status, EnrollStatus::CommitteeApproved);
        assert_eq!(status.status_history.len(), 1);
    }

    #[test]
    fn test_voting_completion_denies_on_tie() {
        let mut status = record(1, EnrollStatus::AdvisorApproved);
        status.required_committee_votes = 2;
        status
            .add_committee_vote(20, VoteChoice::Approve, None, 1, now())
            .unwrap();
        status
            .add_committee_vote(21, VoteChoice::Reject, None, 1, now())
            .unwrap();

        assert_eq!(status.status, EnrollStatus::Denied);
    }

    #[test]
    fn test_change_instructor_rules() {
        let mut status = record(1, EnrollStatus::Registered);
        assert!(status.change_instructor(10, 1, None, now()).is_err());
        assert!(status.change_instructor(0, 1, None, now()).is_err());

        status
            .change_instructor(11, 1, Some("leave".into()), now())
            .unwrap();
        assert_eq!(status.instructor_id, 11);
        let audit = status.latest_instructor_change().unwrap();
        assert_eq!(audit.previous_instructor_id, Some(10));
        assert_eq!(audit.new_instructor_id, 11);
        assert!(!audit.notification_sent);

        status.status = EnrollStatus::DocumentCancelled;
        assert!(matches!(
            status.change_instructor(12, 1, None, now()),
            Err(CoopError::AssignmentRejected(_))
        ));
    }

    #[test]
    fn test_summary_uses_priority_and_attention() {
        let mut advisor = record(1, EnrollStatus::AdvisorApproved);
        advisor.instructor_id = 30;
        let committee = record(2, EnrollStatus::CommitteeApproved);
        let records = vec![record(3, EnrollStatus::Pending), advisor, committee];

        let summary = summarize_approval(1, &records, now()).unwrap();
        assert_eq!(summary.current_status, EnrollStatus::CommitteeApproved);
        assert_eq!(summary.advisor_id, Some(30));
        assert!(summary.needs_attention);
        assert!(summary.status_text.starts_with("อนุมัติโดยคณะกรรมการ"));
        assert!(summary.status_text.ends_with(ATTENTION_SUFFIX));
    }

    #[test]
    fn test_summary_without_attention() {
        let records = vec![record(1, EnrollStatus::Registered)];
        let summary = summarize_approval(1, &records, now()).unwrap();
        assert_eq!(summary.current_status, EnrollStatus::Registered);
        assert_eq!(summary.status_text, "ลงทะเบียนแล้ว");
        assert_eq!(summary.approval_percentage, 0);
        assert!(!summary.needs_attention);
    }

    #[test]
    fn test_stale_and_conflict_records_need_attention() {
        let mut stale = record(1, EnrollStatus::Registered);
        stale.updated_at = now() - Duration::days(8);
        assert!(requires_administrative_attention(&[stale], now()));

        let mut conflicted = record(2, EnrollStatus::Denied);
        conflicted.status_history.push(StatusTransition {
            from_status: EnrollStatus::Registered,
            to_status: EnrollStatus::Denied,
            changed_by: 1,
            changed_at: now(),
            reason: Some("schedule conflict".into()),
        });
        assert!(requires_administrative_attention(&[conflicted], now()));
    }

    #[test]
    fn test_summary_empty_records() {
        assert!(summarize_approval(1, &[], now()).is_none());
    }
}
