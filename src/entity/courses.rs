//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub curriculum_id: Option<i64>,
    pub course_code: String,
    pub course_name_th: String,
    pub course_name_en: Option<String>,
    pub course_type: String,
    pub credits: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curriculums::Entity",
        from = "Column::CurriculumId",
        to = "super::curriculums::Column::Id",
        on_delete = "SetNull"
    )]
    Curriculum,
    #[sea_orm(has_many = "super::course_sections::Entity")]
    CourseSections,
}

impl Related<super::curriculums::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculum.def()
    }
}

impl Related<super::course_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, CourseType};
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            curriculum_id: self.curriculum_id,
            course_code: self.course_code,
            course_name_th: self.course_name_th,
            course_name_en: self.course_name_en,
            course_type: self
                .course_type
                .parse::<CourseType>()
                .unwrap_or(CourseType::Internship),
            credits: self.credits,
            description: self.description,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
