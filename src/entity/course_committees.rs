//! 委员会关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_committees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_section_id: i64,
    pub instructor_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_sections::Entity",
        from = "Column::CourseSectionId",
        to = "super::course_sections::Column::Id",
        on_delete = "Cascade"
    )]
    CourseSection,
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::Id",
        on_delete = "Cascade"
    )]
    Instructor,
}

impl Related<super::course_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSection.def()
    }
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_member(self) -> crate::models::courses::entities::CourseSectionMember {
        use chrono::{DateTime, Utc};

        crate::models::courses::entities::CourseSectionMember {
            id: self.id,
            course_section_id: self.course_section_id,
            instructor_id: self.instructor_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
