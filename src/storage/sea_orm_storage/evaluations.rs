use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::evaluations::{ActiveModel, Column};
use crate::entity::prelude::Evaluations;
use crate::errors::Result;
use crate::models::evaluations::{
    entities::Evaluation,
    requests::{CreateEvaluationRequest, UpdateEvaluationRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_evaluations_impl(&self) -> Result<Vec<Evaluation>> {
        let rows = Evaluations::find()
            .order_by_asc(Column::StudentTrainingId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询评价列表"))?;

        Ok(rows.into_iter().map(|m| m.into_evaluation()).collect())
    }

    pub async fn get_evaluation_impl(&self, id: i64) -> Result<Option<Evaluation>> {
        let result = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询评价"))?;

        Ok(result.map(|m| m.into_evaluation()))
    }

    /// 创建评价，分数范围由服务层校验
    pub async fn create_evaluation_impl(&self, req: CreateEvaluationRequest) -> Result<Evaluation> {
        let now = now_ts();

        let model = ActiveModel {
            student_training_id: Set(req.student_training_id),
            evaluator: Set(req.evaluator.to_string()),
            question: Set(req.question),
            score: Set(req.score),
            comment: Set(req.comment),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建评价"))?;
        Ok(result.into_evaluation())
    }

    pub async fn update_evaluation_impl(
        &self,
        id: i64,
        req: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        let Some(existing) = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询评价"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(question) = req.question {
            model.question = Set(question);
        }
        if let Some(score) = req.score {
            model.score = Set(Some(score));
        }
        if let Some(comment) = req.comment {
            model.comment = Set(Some(comment));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新评价"))?;
        Ok(Some(result.into_evaluation()))
    }

    pub async fn delete_evaluation_impl(&self, id: i64) -> Result<bool> {
        let result = Evaluations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除评价"))?;

        Ok(result.rows_affected > 0)
    }
}
