//! 方向实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "majors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub curriculum_id: i64,
    pub major_name_th: String,
    pub major_name_en: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curriculums::Entity",
        from = "Column::CurriculumId",
        to = "super::curriculums::Column::Id",
        on_delete = "Cascade"
    )]
    Curriculum,
}

impl Related<super::curriculums::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculum.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_major(self) -> crate::models::organization::entities::Major {
        use chrono::{DateTime, Utc};

        crate::models::organization::entities::Major {
            id: self.id,
            curriculum_id: self.curriculum_id,
            major_name_th: self.major_name_th,
            major_name_en: self.major_name_en,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
