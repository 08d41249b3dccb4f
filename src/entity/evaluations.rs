//! 评价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_training_id: i64,
    pub evaluator: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    pub score: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_trainings::Entity",
        from = "Column::StudentTrainingId",
        to = "super::student_trainings::Column::Id",
        on_delete = "Cascade"
    )]
    StudentTraining,
}

impl Related<super::student_trainings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentTraining.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::models::evaluations::entities::{Evaluation, Evaluator};
        use chrono::{DateTime, Utc};

        Evaluation {
            id: self.id,
            student_training_id: self.student_training_id,
            evaluator: self
                .evaluator
                .parse::<Evaluator>()
                .unwrap_or(Evaluator::Student),
            question: self.question,
            score: self.score,
            comment: self.comment,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
