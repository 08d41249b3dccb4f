//! 实习安排与巡访的存储操作

use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::prelude::{
    Companies, Evaluations, Instructors, StudentEnrolls, StudentTrainings, VisitorSchedules,
    VisitorTrainings, VisitsPictures,
};
use crate::entity::{
    evaluations, student_enrolls, student_trainings, visitor_schedules, visitor_trainings,
};
use crate::errors::{CoopError, Result};
use crate::models::evaluations::{
    DEFAULT_STUDENT_QUESTIONS, DEFAULT_VISITOR_COMPANY_QUESTIONS,
    DEFAULT_VISITOR_STUDENT_QUESTIONS, entities::Evaluator,
};
use crate::models::trainings::{
    entities::{StudentTraining, VisitorSchedule, VisitorTraining},
    requests::{
        CreateStudentTrainingRequest, CreateVisitorScheduleRequest, CreateVisitorTrainingRequest,
        TrainingFields, UpdateStudentTrainingRequest, UpdateVisitorScheduleRequest,
        UpdateVisitorTrainingRequest,
    },
    responses::{
        BulkVisitorAssignResponse, EvaluationStatusResponse, StudentTrainingDetail,
        VisitorAssignment, VisitorScheduleDetail, VisitorTrainingDetail, VisitsPictureResponse,
    },
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashSet;
use tracing::debug;

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 将实习字段合并到 ActiveModel，未给出的字段保持不变
pub(crate) fn merge_training(model: &mut student_trainings::ActiveModel, fields: TrainingFields) {
    if let Some(v) = fields.document_language {
        model.document_language = Set(Some(v));
    }
    if let Some(v) = fields.start_date {
        model.start_date = Set(Some(format_date(v)));
    }
    if let Some(v) = fields.end_date {
        model.end_date = Set(Some(format_date(v)));
    }
    if let Some(v) = fields.coordinator {
        model.coordinator = Set(Some(v));
    }
    if let Some(v) = fields.coordinator_phone_number {
        model.coordinator_phone_number = Set(Some(v));
    }
    if let Some(v) = fields.coordinator_email {
        model.coordinator_email = Set(Some(v));
    }
    if let Some(v) = fields.supervisor {
        model.supervisor = Set(Some(v));
    }
    if let Some(v) = fields.supervisor_phone_number {
        model.supervisor_phone_number = Set(Some(v));
    }
    if let Some(v) = fields.supervisor_email {
        model.supervisor_email = Set(Some(v));
    }
    if let Some(v) = fields.department {
        model.department = Set(Some(v));
    }
    if let Some(v) = fields.position {
        model.position = Set(Some(v));
    }
    if let Some(v) = fields.job_description {
        model.job_description = Set(Some(v));
    }
    model.updated_at = Set(now_ts());
}

/// 在给定连接（或事务）上插入实习安排
pub(crate) async fn insert_training<C: ConnectionTrait>(
    db: &C,
    student_enroll_id: i64,
    company_id: Option<i64>,
    fields: TrainingFields,
) -> Result<student_trainings::Model> {
    let now = now_ts();
    let mut model = student_trainings::ActiveModel {
        student_enroll_id: Set(student_enroll_id),
        company_id: Set(company_id),
        created_at: Set(now),
        ..Default::default()
    };
    merge_training(&mut model, fields);

    model.insert(db).await.map_err(db_err("创建实习安排"))
}

async fn seed_questions<C: ConnectionTrait>(
    db: &C,
    student_training_id: i64,
    evaluator: Evaluator,
    questions: impl Iterator<Item = &'static str>,
) -> Result<()> {
    let now = now_ts();
    let rows = questions.map(|question| evaluations::ActiveModel {
        student_training_id: Set(student_training_id),
        evaluator: Set(evaluator.to_string()),
        question: Set(question.to_string()),
        score: Set(None),
        comment: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    });

    Evaluations::insert_many(rows)
        .exec(db)
        .await
        .map_err(db_err("预置评价题目"))?;
    Ok(())
}

/// 为实习安排预置学生评价题目
pub(crate) async fn seed_student_questions<C: ConnectionTrait>(
    db: &C,
    student_training_id: i64,
) -> Result<()> {
    seed_questions(
        db,
        student_training_id,
        Evaluator::Student,
        DEFAULT_STUDENT_QUESTIONS.into_iter(),
    )
    .await
}

/// 新建巡访记录，并为该选课的实习安排预置巡访教师的评价题目
///
/// 选课尚无实习安排时只建巡访记录
async fn insert_visitor_assignment<C: ConnectionTrait>(
    db: &C,
    student_enroll_id: i64,
    visitor_instructor_id: i64,
) -> Result<visitor_trainings::Model> {
    let now = now_ts();
    let visitor_training = visitor_trainings::ActiveModel {
        student_enroll_id: Set(student_enroll_id),
        visitor_instructor_id: Set(visitor_instructor_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(db_err("创建巡访"))?;

    let training = StudentTrainings::find()
        .filter(student_trainings::Column::StudentEnrollId.eq(student_enroll_id))
        .one(db)
        .await
        .map_err(db_err("查询实习安排"))?;
    match training {
        Some(training) => {
            let questions = DEFAULT_VISITOR_COMPANY_QUESTIONS
                .into_iter()
                .chain(DEFAULT_VISITOR_STUDENT_QUESTIONS);
            seed_questions(db, training.id, Evaluator::Visitor, questions).await?;
        }
        None => debug!(
            "Student enrollment {} has no training yet, visitor questions not seeded",
            student_enroll_id
        ),
    }

    Ok(visitor_training)
}

async fn ensure_visitor_exists<C: ConnectionTrait>(
    db: &C,
    visitor_instructor_id: i64,
) -> Result<()> {
    let visitor = Instructors::find_by_id(visitor_instructor_id)
        .one(db)
        .await
        .map_err(db_err("查询巡访教师"))?;
    if visitor.is_none() {
        return Err(CoopError::not_found("Visitor instructor not found"));
    }
    Ok(())
}

impl SeaOrmStorage {
    pub async fn list_student_trainings_impl(&self) -> Result<Vec<StudentTraining>> {
        let rows = StudentTrainings::find()
            .order_by_asc(student_trainings::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询实习安排列表"))?;

        Ok(rows.into_iter().map(|m| m.into_student_training()).collect())
    }

    /// 实习安排详情，附带实习单位与评价
    pub async fn get_student_training_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<StudentTrainingDetail>> {
        let Some(training) = StudentTrainings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习安排"))?
        else {
            return Ok(None);
        };

        let company = training
            .find_related(Companies)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习单位"))?;
        let evaluations = training
            .find_related(Evaluations)
            .order_by_asc(evaluations::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询评价"))?;

        Ok(Some(StudentTrainingDetail {
            training: training.into_student_training(),
            company: company.map(|m| m.into_company()),
            evaluations: evaluations.into_iter().map(|m| m.into_evaluation()).collect(),
        }))
    }

    pub async fn create_student_training_impl(
        &self,
        req: CreateStudentTrainingRequest,
    ) -> Result<StudentTraining> {
        let result =
            insert_training(&self.db, req.student_enroll_id, req.company_id, req.fields).await?;
        Ok(result.into_student_training())
    }

    pub async fn update_student_training_impl(
        &self,
        id: i64,
        req: UpdateStudentTrainingRequest,
    ) -> Result<Option<StudentTraining>> {
        let Some(existing) = StudentTrainings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习安排"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(company_id) = req.company_id {
            model.company_id = Set(Some(company_id));
        }
        merge_training(&mut model, req.fields);

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新实习安排"))?;
        Ok(Some(result.into_student_training()))
    }

    pub async fn delete_student_training_impl(&self, id: i64) -> Result<bool> {
        let result = StudentTrainings::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除实习安排"))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生评价完成情况：存在学生评价题目且全部已打分
    pub async fn get_evaluation_status_impl(
        &self,
        student_training_id: i64,
    ) -> Result<Option<EvaluationStatusResponse>> {
        let Some(training) = StudentTrainings::find_by_id(student_training_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习安排"))?
        else {
            return Ok(None);
        };

        let student_rows = training
            .find_related(Evaluations)
            .filter(evaluations::Column::Evaluator.eq(Evaluator::Student.to_string()))
            .all(&self.db)
            .await
            .map_err(db_err("查询学生评价"))?;

        let has_evaluated =
            !student_rows.is_empty() && student_rows.iter().all(|row| row.score.is_some());
        let evaluation_date = if has_evaluated {
            student_rows
                .iter()
                .map(|row| row.updated_at)
                .max()
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        } else {
            None
        };

        let company = training
            .find_related(Companies)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习单位"))?;
        let english = training.document_language.as_deref() == Some("en");
        let company_name = company.as_ref().map(|c| match (&c.company_name_en, english) {
            (Some(en), true) => en.clone(),
            _ => c.company_name_th.clone(),
        });

        Ok(Some(EvaluationStatusResponse {
            student_training_id,
            has_evaluated,
            evaluation_date,
            company_id: company.map(|c| c.id),
            company_name,
        }))
    }

    pub async fn list_visitor_trainings_impl(&self) -> Result<Vec<VisitorTraining>> {
        let rows = VisitorTrainings::find()
            .order_by_asc(visitor_trainings::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询巡访列表"))?;

        Ok(rows.into_iter().map(|m| m.into_visitor_training()).collect())
    }

    /// 巡访详情，附带巡访教师与巡访安排
    pub async fn get_visitor_training_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<VisitorTrainingDetail>> {
        let Some(visitor_training) = VisitorTrainings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询巡访"))?
        else {
            return Ok(None);
        };

        self.visitor_training_detail(visitor_training).await.map(Some)
    }

    pub(crate) async fn visitor_training_detail(
        &self,
        visitor_training: visitor_trainings::Model,
    ) -> Result<VisitorTrainingDetail> {
        let visitor = visitor_training
            .find_related(Instructors)
            .one(&self.db)
            .await
            .map_err(db_err("查询巡访教师"))?;
        let schedules = visitor_training
            .find_related(VisitorSchedules)
            .order_by_asc(visitor_schedules::Column::VisitNo)
            .all(&self.db)
            .await
            .map_err(db_err("查询巡访安排"))?;

        Ok(VisitorTrainingDetail {
            visitor_training: visitor_training.into_visitor_training(),
            visitor: visitor.map(|m| m.into_instructor()),
            schedules: schedules
                .into_iter()
                .map(|m| m.into_visitor_schedule())
                .collect(),
        })
    }

    pub async fn create_visitor_training_impl(
        &self,
        req: CreateVisitorTrainingRequest,
    ) -> Result<VisitorTraining> {
        let now = now_ts();

        let model = visitor_trainings::ActiveModel {
            student_enroll_id: Set(req.student_enroll_id),
            visitor_instructor_id: Set(req.visitor_instructor_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建巡访"))?;
        Ok(result.into_visitor_training())
    }

    /// 指派巡访教师；该选课已有巡访记录时原样返回，不重复创建
    pub async fn assign_visitor_impl(
        &self,
        student_enroll_id: i64,
        visitor_instructor_id: i64,
    ) -> Result<VisitorAssignment> {
        let txn = self.db.begin().await.map_err(db_err("开启事务"))?;

        ensure_visitor_exists(&txn, visitor_instructor_id).await?;
        let enroll = StudentEnrolls::find_by_id(student_enroll_id)
            .one(&txn)
            .await
            .map_err(db_err("查询选课记录"))?;
        if enroll.is_none() {
            return Err(CoopError::not_found("Student enrollment not found"));
        }

        let existing = VisitorTrainings::find()
            .filter(visitor_trainings::Column::StudentEnrollId.eq(student_enroll_id))
            .one(&txn)
            .await
            .map_err(db_err("查询巡访"))?;
        if let Some(existing) = existing {
            return Ok(VisitorAssignment {
                visitor_training: existing.into_visitor_training(),
                created: false,
            });
        }

        let created =
            insert_visitor_assignment(&txn, student_enroll_id, visitor_instructor_id).await?;
        txn.commit().await.map_err(db_err("提交事务"))?;

        Ok(VisitorAssignment {
            visitor_training: created.into_visitor_training(),
            created: true,
        })
    }

    /// 批量指派同一名巡访教师，全部写入在一个事务中完成
    pub async fn bulk_assign_visitor_impl(
        &self,
        student_enroll_ids: &[i64],
        visitor_instructor_id: i64,
    ) -> Result<BulkVisitorAssignResponse> {
        let mut seen = HashSet::new();
        let requested: Vec<i64> = student_enroll_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let txn = self.db.begin().await.map_err(db_err("开启事务"))?;
        ensure_visitor_exists(&txn, visitor_instructor_id).await?;

        let existing_enrolls: HashSet<i64> = StudentEnrolls::find()
            .select_only()
            .column(student_enrolls::Column::Id)
            .filter(student_enrolls::Column::Id.is_in(requested.iter().copied()))
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(db_err("查询选课记录"))?
            .into_iter()
            .collect();
        let already_assigned: HashSet<i64> = VisitorTrainings::find()
            .select_only()
            .column(visitor_trainings::Column::StudentEnrollId)
            .filter(visitor_trainings::Column::StudentEnrollId.is_in(requested.iter().copied()))
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(db_err("查询巡访"))?
            .into_iter()
            .collect();

        let mut response = BulkVisitorAssignResponse::default();
        for id in requested {
            if !existing_enrolls.contains(&id) {
                response.not_found.push(id);
            } else if already_assigned.contains(&id) {
                response.skipped_existing.push(id);
            } else {
                insert_visitor_assignment(&txn, id, visitor_instructor_id).await?;
                response.created_ids.push(id);
            }
        }

        txn.commit().await.map_err(db_err("提交事务"))?;
        Ok(response)
    }

    pub async fn update_visitor_training_impl(
        &self,
        id: i64,
        req: UpdateVisitorTrainingRequest,
    ) -> Result<Option<VisitorTraining>> {
        let Some(existing) = VisitorTrainings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询巡访"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(enroll_id) = req.student_enroll_id {
            model.student_enroll_id = Set(enroll_id);
        }
        if let Some(instructor_id) = req.visitor_instructor_id {
            model.visitor_instructor_id = Set(instructor_id);
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新巡访"))?;
        Ok(Some(result.into_visitor_training()))
    }

    pub async fn delete_visitor_training_impl(&self, id: i64) -> Result<bool> {
        let result = VisitorTrainings::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除巡访"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_visitor_schedules_impl(&self) -> Result<Vec<VisitorSchedule>> {
        let rows = VisitorSchedules::find()
            .order_by_asc(visitor_schedules::Column::VisitorTrainingId)
            .order_by_asc(visitor_schedules::Column::VisitNo)
            .all(&self.db)
            .await
            .map_err(db_err("查询巡访安排列表"))?;

        Ok(rows.into_iter().map(|m| m.into_visitor_schedule()).collect())
    }

    /// 巡访安排详情，附带照片
    pub async fn get_visitor_schedule_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<VisitorScheduleDetail>> {
        let Some(schedule) = VisitorSchedules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询巡访安排"))?
        else {
            return Ok(None);
        };

        let pictures = schedule
            .find_related(VisitsPictures)
            .all(&self.db)
            .await
            .map_err(db_err("查询巡访照片"))?;

        Ok(Some(VisitorScheduleDetail {
            schedule: schedule.into_visitor_schedule(),
            pictures: pictures
                .into_iter()
                .map(|m| VisitsPictureResponse::from(m.into_visits_picture()))
                .collect(),
        }))
    }

    pub async fn create_visitor_schedule_impl(
        &self,
        req: CreateVisitorScheduleRequest,
    ) -> Result<VisitorSchedule> {
        let now = now_ts();

        let model = visitor_schedules::ActiveModel {
            visitor_training_id: Set(req.visitor_training_id),
            visit_no: Set(req.visit_no),
            visit_at: Set(req.visit_at.map(|t| t.timestamp())),
            comment: Set(req.comment),
            status: Set(req.status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("创建巡访安排"))?;
        Ok(result.into_visitor_schedule())
    }

    pub async fn update_visitor_schedule_impl(
        &self,
        id: i64,
        req: UpdateVisitorScheduleRequest,
    ) -> Result<Option<VisitorSchedule>> {
        let Some(existing) = VisitorSchedules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询巡访安排"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(visit_no) = req.visit_no {
            model.visit_no = Set(visit_no);
        }
        if let Some(visit_at) = req.visit_at {
            model.visit_at = Set(Some(visit_at.timestamp()));
        }
        if let Some(comment) = req.comment {
            model.comment = Set(Some(comment));
        }
        if let Some(status) = req.status {
            model.status = Set(Some(status));
        }
        model.updated_at = Set(now_ts());

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新巡访安排"))?;
        Ok(Some(result.into_visitor_schedule()))
    }

    pub async fn delete_visitor_schedule_impl(&self, id: i64) -> Result<bool> {
        let result = VisitorSchedules::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除巡访安排"))?;

        Ok(result.rows_affected > 0)
    }
}
