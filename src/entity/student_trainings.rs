//! 实习安排实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_trainings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub student_enroll_id: i64,
    pub company_id: Option<i64>,
    pub document_language: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub coordinator: Option<String>,
    pub coordinator_phone_number: Option<String>,
    pub coordinator_email: Option<String>,
    pub supervisor: Option<String>,
    pub supervisor_phone_number: Option<String>,
    pub supervisor_email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub job_description: Option<String>,
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
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id",
        on_delete = "SetNull"
    )]
    Company,
    #[sea_orm(has_many = "super::evaluations::Entity")]
    Evaluations,
}

impl Related<super::student_enrolls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentEnroll.def()
    }
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_training(self) -> crate::models::trainings::entities::StudentTraining {
        use chrono::{DateTime, NaiveDate, Utc};

        let parse_date =
            |raw: Option<String>| raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());

        crate::models::trainings::entities::StudentTraining {
            id: self.id,
            student_enroll_id: self.student_enroll_id,
            company_id: self.company_id,
            document_language: self.document_language,
            start_date: parse_date(self.start_date),
            end_date: parse_date(self.end_date),
            coordinator: self.coordinator,
            coordinator_phone_number: self.coordinator_phone_number,
            coordinator_email: self.coordinator_email,
            supervisor: self.supervisor,
            supervisor_phone_number: self.supervisor_phone_number,
            supervisor_email: self.supervisor_email,
            department: self.department,
            position: self.position,
            job_description: self.job_description,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
