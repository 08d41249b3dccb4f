//! 审批状态实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_enroll_statuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_enroll_id: i64,
    pub instructor_id: i64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub committee_votes: Option<String>,
    pub committee_vote_count: i32,
    pub required_committee_votes: i32,
    pub committee_voting_deadline: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub status_history: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub instructor_assignment_history: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_enrolls::Entity",
        from = "Column::StudentEnrollId",
        to = "super::student_enrolls::Column::Id",
        on_delete = "Cascade"
    )]
    StudentEnroll,
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::Id",
        on_delete = "Cascade"
    )]
    Instructor,
}

impl Related<super::student_enrolls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentEnroll.def()
    }
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// JSON 文本列解析失败时按空列表处理
fn parse_json_list<T: serde::de::DeserializeOwned>(raw: Option<&str>) -> Vec<T> {
    raw.filter(|s| !s.trim().is_empty())
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

impl Model {
    pub fn into_enroll_status(self) -> crate::models::enrollments::entities::StudentEnrollStatus {
        use crate::models::enrollments::entities::{EnrollStatus, StudentEnrollStatus};
        use chrono::{DateTime, Utc};

        StudentEnrollStatus {
            id: self.id,
            student_enroll_id: self.student_enroll_id,
            instructor_id: self.instructor_id,
            status: self
                .status
                .parse::<EnrollStatus>()
                .unwrap_or(EnrollStatus::Pending),
            remarks: self.remarks,
            committee_votes: parse_json_list(self.committee_votes.as_deref()),
            committee_vote_count: self.committee_vote_count,
            required_committee_votes: self.required_committee_votes,
            committee_voting_deadline: self
                .committee_voting_deadline
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            status_history: parse_json_list(self.status_history.as_deref()),
            instructor_assignment_history: parse_json_list(
                self.instructor_assignment_history.as_deref(),
            ),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollments::entities::CommitteeVote;

    #[test]
    fn test_parse_json_list_tolerates_bad_input() {
        assert!(parse_json_list::<CommitteeVote>(None).is_empty());
        assert!(parse_json_list::<CommitteeVote>(Some("")).is_empty());
        assert!(parse_json_list::<CommitteeVote>(Some("not json")).is_empty());
    }
}
