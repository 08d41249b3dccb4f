//! 巡访照片实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "visits_pictures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub visitor_schedule_id: i64,
    pub photo_no: i32,
    pub file_name: String,
    pub original_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::visitor_schedules::Entity",
        from = "Column::VisitorScheduleId",
        to = "super::visitor_schedules::Column::Id",
        on_delete = "Cascade"
    )]
    VisitorSchedule,
}

impl Related<super::visitor_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorSchedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_visits_picture(self) -> crate::models::trainings::entities::VisitsPicture {
        use chrono::{DateTime, Utc};

        crate::models::trainings::entities::VisitsPicture {
            id: self.id,
            visitor_schedule_id: self.visitor_schedule_id,
            photo_no: self.photo_no,
            file_name: self.file_name,
            original_name: self.original_name,
            file_size: self.file_size,
            file_type: self.file_type,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
