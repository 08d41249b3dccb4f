//! 选课实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_enrolls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_section_id: i64,
    pub grade: Option<String>,
    pub attend_training: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course_sections::Entity",
        from = "Column::CourseSectionId",
        to = "super::course_sections::Column::Id",
        on_delete = "Cascade"
    )]
    CourseSection,
    #[sea_orm(has_one = "super::student_trainings::Entity")]
    StudentTraining,
    #[sea_orm(has_many = "super::student_enroll_statuses::Entity")]
    StudentEnrollStatuses,
    #[sea_orm(has_many = "super::visitor_trainings::Entity")]
    VisitorTrainings,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSection.def()
    }
}

impl Related<super::student_trainings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentTraining.def()
    }
}

impl Related<super::student_enroll_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentEnrollStatuses.def()
    }
}

impl Related<super::visitor_trainings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorTrainings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_enroll(self) -> crate::models::enrollments::entities::StudentEnroll {
        use chrono::{DateTime, Utc};

        crate::models::enrollments::entities::StudentEnroll {
            id: self.id,
            student_id: self.student_id,
            course_section_id: self.course_section_id,
            grade: self.grade,
            attend_training: self.attend_training,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
