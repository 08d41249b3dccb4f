//! 选课记录的存储操作
//!
//! 复合创建与复合更新会同时写入选课、实习单位、实习安排与审批记录，
//! 任一步失败整体回滚。

use super::companies::{insert_company, merge_company};
use super::courses::section_member_ids;
use super::enroll_statuses::insert_enroll_status;
use super::trainings::{insert_training, merge_training, seed_student_questions};
use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::prelude::{
    Companies, CourseSections, Courses, StudentEnrollStatuses, StudentEnrolls, StudentTrainings,
    Students, VisitorTrainings,
};
use crate::entity::{student_enroll_statuses, student_enrolls, student_trainings};
use crate::errors::{CoopError, Result};
use crate::models::courses::entities::SectionMemberKind;
use crate::models::enrollments::{
    entities::{StudentEnroll, StudentEnrollStatus},
    requests::{CreateEnrollStatusRequest, CreateStudentEnrollRequest, UpdateStudentEnrollRequest},
    responses::{ApprovalSummary, StudentEnrollCreated, StudentEnrollDetail},
    workflow::summarize_approval,
};
use crate::models::companies::requests::CreateCompanyRequest;
use crate::models::letters::LetterContext;
use crate::models::trainings::responses::StudentTrainingDetail;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn list_student_enrolls_impl(&self) -> Result<Vec<StudentEnroll>> {
        let rows = StudentEnrolls::find()
            .order_by_desc(student_enrolls::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err("查询选课列表"))?;

        Ok(rows.into_iter().map(|m| m.into_student_enroll()).collect())
    }

    /// 选课详情，附带学生、课程班、审批记录、实习安排与巡访
    pub async fn get_student_enroll_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<StudentEnrollDetail>> {
        let Some(enroll) = StudentEnrolls::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询选课记录"))?
        else {
            return Ok(None);
        };

        let student = enroll
            .find_related(Students)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生"))?;
        let section = enroll
            .find_related(CourseSections)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程班"))?;
        let course = match &section {
            Some(section) => section
                .find_related(Courses)
                .one(&self.db)
                .await
                .map_err(db_err("查询课程"))?,
            None => None,
        };

        let statuses = enroll
            .find_related(StudentEnrollStatuses)
            .order_by_asc(student_enroll_statuses::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询审批记录"))?;

        let student_training = match enroll
            .find_related(StudentTrainings)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习安排"))?
        {
            Some(training) => {
                let company = training
                    .find_related(Companies)
                    .one(&self.db)
                    .await
                    .map_err(db_err("查询实习单位"))?;
                let evaluations = training
                    .find_related(crate::entity::prelude::Evaluations)
                    .all(&self.db)
                    .await
                    .map_err(db_err("查询评价"))?;
                Some(StudentTrainingDetail {
                    training: training.into_student_training(),
                    company: company.map(|m| m.into_company()),
                    evaluations: evaluations
                        .into_iter()
                        .map(|m| m.into_evaluation())
                        .collect(),
                })
            }
            None => None,
        };

        let mut visitor_trainings = Vec::new();
        for visitor_training in enroll
            .find_related(VisitorTrainings)
            .all(&self.db)
            .await
            .map_err(db_err("查询巡访记录"))?
        {
            visitor_trainings.push(self.visitor_training_detail(visitor_training).await?);
        }

        Ok(Some(StudentEnrollDetail {
            enroll: enroll.into_student_enroll(),
            student: student.map(|m| m.into_student()),
            course_section: section.map(|m| m.into_course_section()),
            course: course.map(|m| m.into_course()),
            statuses: statuses.into_iter().map(|m| m.into_enroll_status()).collect(),
            student_training,
            visitor_trainings,
        }))
    }

    /// 复合创建
    ///
    /// 登记选课；给出实习单位或实习信息时一并创建实习安排并预置学生评价题目；
    /// 课程班的每位授课教师与委员会成员各生成一条 pending 审批记录。
    pub async fn create_student_enroll_impl(
        &self,
        req: CreateStudentEnrollRequest,
    ) -> Result<StudentEnrollCreated> {
        let txn = self.db.begin().await.map_err(db_err("开启事务"))?;

        if Students::find_by_id(req.student_id)
            .one(&txn)
            .await
            .map_err(db_err("查询学生"))?
            .is_none()
        {
            return Err(CoopError::not_found("Student not found"));
        }
        if CourseSections::find_by_id(req.course_section_id)
            .one(&txn)
            .await
            .map_err(db_err("查询课程班"))?
            .is_none()
        {
            return Err(CoopError::not_found("Course section not found"));
        }

        let now = now_ts();
        let enroll = student_enrolls::ActiveModel {
            student_id: Set(req.student_id),
            course_section_id: Set(req.course_section_id),
            grade: Set(req.grade),
            attend_training: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_err("创建选课记录"))?;

        let company_id = match (req.company_id, req.company) {
            (Some(id), _) => Some(id),
            (None, Some(company)) => Some(insert_company(&txn, company).await?.id),
            (None, None) => None,
        };

        let mut student_training_id = None;
        if company_id.is_some() || req.training.is_some() {
            let fields = req.training.unwrap_or_default();
            fields.validate().map_err(CoopError::validation)?;
            let training = insert_training(&txn, enroll.id, company_id, fields).await?;
            seed_student_questions(&txn, training.id).await?;
            student_training_id = Some(training.id);
        }

        let mut approvers =
            section_member_ids(&txn, SectionMemberKind::Instructor, req.course_section_id).await?;
        for id in
            section_member_ids(&txn, SectionMemberKind::Committee, req.course_section_id).await?
        {
            if !approvers.contains(&id) {
                approvers.push(id);
            }
        }

        for instructor_id in &approvers {
            insert_enroll_status(
                &txn,
                CreateEnrollStatusRequest {
                    student_enroll_id: enroll.id,
                    instructor_id: *instructor_id,
                    status: None,
                    remarks: None,
                    required_committee_votes: None,
                    committee_voting_deadline: None,
                },
            )
            .await?;
        }

        txn.commit().await.map_err(db_err("提交事务"))?;

        Ok(StudentEnrollCreated {
            enroll: enroll.into_student_enroll(),
            student_training_id,
            status_count: approvers.len(),
        })
    }

    /// 复合更新
    ///
    /// 实习单位字段更新到当前实习安排关联的单位；尚无单位时新建，此时必须给出泰文名称。
    pub async fn update_student_enroll_impl(
        &self,
        id: i64,
        req: UpdateStudentEnrollRequest,
    ) -> Result<Option<StudentEnroll>> {
        let txn = self.db.begin().await.map_err(db_err("开启事务"))?;

        let Some(existing) = StudentEnrolls::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err("查询选课记录"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(student_id) = req.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(section_id) = req.course_section_id {
            model.course_section_id = Set(section_id);
        }
        if let Some(grade) = req.grade {
            model.grade = Set(Some(grade));
        }
        if let Some(attend) = req.attend_training {
            model.attend_training = Set(Some(attend));
        }
        model.updated_at = Set(now_ts());
        let enroll = model.update(&txn).await.map_err(db_err("更新选课记录"))?;

        if req.company.is_none() && req.training.is_none() {
            txn.commit().await.map_err(db_err("提交事务"))?;
            return Ok(Some(enroll.into_student_enroll()));
        }

        if let Some(fields) = &req.training {
            fields.validate().map_err(CoopError::validation)?;
        }

        let training = StudentTrainings::find()
            .filter(student_trainings::Column::StudentEnrollId.eq(id))
            .one(&txn)
            .await
            .map_err(db_err("查询实习安排"))?;

        let mut company_id = training.as_ref().and_then(|t| t.company_id);
        if let Some(company) = req.company
            && !company.is_empty()
        {
            let current = match company_id {
                Some(cid) => Companies::find_by_id(cid)
                    .one(&txn)
                    .await
                    .map_err(db_err("查询实习单位"))?,
                None => None,
            };
            company_id = Some(match current {
                Some(current) => {
                    let mut active = current.into_active_model();
                    merge_company(&mut active, company);
                    active
                        .update(&txn)
                        .await
                        .map_err(db_err("更新实习单位"))?
                        .id
                }
                None => {
                    let Some(name_th) = company.company_name_th else {
                        return Err(CoopError::validation(
                            "company_name_th is required when creating a company",
                        ));
                    };
                    let created = insert_company(
                        &txn,
                        CreateCompanyRequest {
                            company_register_number: company.company_register_number,
                            company_name_th: name_th,
                            company_name_en: company.company_name_en,
                            company_address: company.company_address,
                            company_map: company.company_map,
                            company_email: company.company_email,
                            company_phone_number: company.company_phone_number,
                            company_type: company.company_type,
                        },
                    )
                    .await?;
                    created.id
                }
            });
        }

        match training {
            Some(training) => {
                let mut active = training.into_active_model();
                active.company_id = Set(company_id);
                merge_training(&mut active, req.training.unwrap_or_default());
                active
                    .update(&txn)
                    .await
                    .map_err(db_err("更新实习安排"))?;
            }
            None => {
                let created =
                    insert_training(&txn, id, company_id, req.training.unwrap_or_default())
                        .await?;
                seed_student_questions(&txn, created.id).await?;
            }
        }

        txn.commit().await.map_err(db_err("提交事务"))?;
        Ok(Some(enroll.into_student_enroll()))
    }

    pub async fn delete_student_enroll_impl(&self, id: i64) -> Result<bool> {
        let result = StudentEnrolls::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除选课记录"))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量登记成绩，不存在的 id 被忽略，返回实际更新行数
    pub async fn bulk_update_grades_impl(&self, ids: &[i64], grade: &str) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = StudentEnrolls::update_many()
            .col_expr(student_enrolls::Column::Grade, Expr::value(grade))
            .col_expr(student_enrolls::Column::UpdatedAt, Expr::value(now_ts()))
            .filter(student_enrolls::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.db)
            .await
            .map_err(db_err("批量登记成绩"))?;

        Ok(result.rows_affected)
    }

    /// 批量登记实习出勤
    pub async fn bulk_update_attendance_impl(&self, ids: &[i64], attend: &str) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = StudentEnrolls::update_many()
            .col_expr(student_enrolls::Column::AttendTraining, Expr::value(attend))
            .col_expr(student_enrolls::Column::UpdatedAt, Expr::value(now_ts()))
            .filter(student_enrolls::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.db)
            .await
            .map_err(db_err("批量登记出勤"))?;

        Ok(result.rows_affected)
    }

    pub async fn get_approval_summary_impl(&self, id: i64) -> Result<Option<ApprovalSummary>> {
        let rows = StudentEnrollStatuses::find()
            .filter(student_enroll_statuses::Column::StudentEnrollId.eq(id))
            .all(&self.db)
            .await
            .map_err(db_err("查询审批记录"))?;

        let records: Vec<StudentEnrollStatus> =
            rows.into_iter().map(|m| m.into_enroll_status()).collect();
        Ok(summarize_approval(id, &records, Utc::now()))
    }

    /// 生成信函所需的数据，学生或课程班缺失时返回 None
    pub async fn get_letter_context_impl(&self, id: i64) -> Result<Option<LetterContext>> {
        let Some(enroll) = StudentEnrolls::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询选课记录"))?
        else {
            return Ok(None);
        };

        let Some(student) = enroll
            .find_related(Students)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生"))?
        else {
            return Ok(None);
        };
        let Some(section) = enroll
            .find_related(CourseSections)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程班"))?
        else {
            return Ok(None);
        };
        let Some(course) = section
            .find_related(Courses)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程"))?
        else {
            return Ok(None);
        };

        let training = enroll
            .find_related(StudentTrainings)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习安排"))?;
        let company = match &training {
            Some(training) => training
                .find_related(Companies)
                .one(&self.db)
                .await
                .map_err(db_err("查询实习单位"))?,
            None => None,
        };

        Ok(Some(LetterContext {
            student: student.into_student(),
            course: course.into_course(),
            section: section.into_course_section(),
            training: training.map(|m| m.into_student_training()),
            company: company.map(|m| m.into_company()),
        }))
    }
}
