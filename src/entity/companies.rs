//! 实习单位实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub company_register_number: Option<String>,
    pub company_name_th: String,
    pub company_name_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub company_address: Option<String>,
    pub company_map: Option<String>,
    pub company_email: Option<String>,
    pub company_phone_number: Option<String>,
    pub company_type: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_trainings::Entity")]
    StudentTrainings,
}

impl Related<super::student_trainings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentTrainings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_company(self) -> crate::models::companies::entities::Company {
        use chrono::{DateTime, Utc};

        crate::models::companies::entities::Company {
            id: self.id,
            company_register_number: self.company_register_number,
            company_name_th: self.company_name_th,
            company_name_en: self.company_name_en,
            company_address: self.company_address,
            company_map: self.company_map,
            company_email: self.company_email,
            company_phone_number: self.company_phone_number,
            company_type: self.company_type,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
