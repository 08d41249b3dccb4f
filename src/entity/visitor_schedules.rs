//! 巡访日程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "visitor_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub visitor_training_id: i64,
    pub visit_no: i32,
    pub visit_at: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub status: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::visitor_trainings::Entity",
        from = "Column::VisitorTrainingId",
        to = "super::visitor_trainings::Column::Id",
        on_delete = "Cascade"
    )]
    VisitorTraining,
    #[sea_orm(has_many = "super::visits_pictures::Entity")]
    VisitsPictures,
}

impl Related<super::visitor_trainings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorTraining.def()
    }
}

impl Related<super::visits_pictures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitsPictures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_visitor_schedule(self) -> crate::models::trainings::entities::VisitorSchedule {
        use chrono::{DateTime, Utc};

        crate::models::trainings::entities::VisitorSchedule {
            id: self.id,
            visitor_training_id: self.visitor_training_id,
            visit_no: self.visit_no,
            visit_at: self
                .visit_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            comment: self.comment,
            status: self.status,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
