//! 课程班实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub section: i32,
    pub semester: i32,
    pub year: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(has_many = "super::course_instructors::Entity")]
    CourseInstructors,
    #[sea_orm(has_many = "super::course_committees::Entity")]
    CourseCommittees,
    #[sea_orm(has_many = "super::student_enrolls::Entity")]
    StudentEnrolls,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::course_instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseInstructors.def()
    }
}

impl Related<super::course_committees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseCommittees.def()
    }
}

impl Related<super::student_enrolls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentEnrolls.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course_section(self) -> crate::models::courses::entities::CourseSection {
        use chrono::{DateTime, Utc};

        crate::models::courses::entities::CourseSection {
            id: self.id,
            course_id: self.course_id,
            section: self.section,
            semester: self.semester,
            year: self.year,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
