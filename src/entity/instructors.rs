//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub staff_code: String,
    pub academic_title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub faculty_id: Option<i64>,
    pub program_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::course_instructors::Entity")]
    CourseInstructors,
    #[sea_orm(has_many = "super::course_committees::Entity")]
    CourseCommittees,
    #[sea_orm(has_many = "super::student_enroll_statuses::Entity")]
    StudentEnrollStatuses,
    #[sea_orm(has_many = "super::visitor_trainings::Entity")]
    VisitorTrainings,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
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
    pub fn into_instructor(self) -> crate::models::people::entities::Instructor {
        use chrono::{DateTime, Utc};

        crate::models::people::entities::Instructor {
            id: self.id,
            user_id: self.user_id,
            staff_code: self.staff_code,
            academic_title: self.academic_title,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            faculty_id: self.faculty_id,
            program_id: self.program_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
