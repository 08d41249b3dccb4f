//! 巡访记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "visitor_trainings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_enroll_id: i64,
    pub visitor_instructor_id: i64,
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
        from = "Column::VisitorInstructorId",
        to = "super::instructors::Column::Id",
        on_delete = "Cascade"
    )]
    Instructor,
    #[sea_orm(has_many = "super::visitor_schedules::Entity")]
    VisitorSchedules,
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

impl Related<super::visitor_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorSchedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_visitor_training(self) -> crate::models::trainings::entities::VisitorTraining {
        use chrono::{DateTime, Utc};

        crate::models::trainings::entities::VisitorTraining {
            id: self.id,
            student_enroll_id: self.student_enroll_id,
            visitor_instructor_id: self.visitor_instructor_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
