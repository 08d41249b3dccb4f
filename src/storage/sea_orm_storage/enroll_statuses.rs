//! 审批记录存储操作
//!
//! 状态流转、委员会投票与更换教师都是读-改-写，统一在事务中完成，
//! 规则本身由 `models::enrollments::workflow` 负责。

use super::courses::section_member_ids;
use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::prelude::{Instructors, StudentEnrollStatuses, StudentEnrolls};
use crate::entity::instructors;
use crate::entity::student_enroll_statuses::{self, ActiveModel, Column};
use crate::errors::{CoopError, Result};
use crate::models::courses::entities::SectionMemberKind;
use crate::models::enrollments::{
    entities::{EnrollStatus, StudentEnrollStatus, VoteChoice},
    requests::{CreateEnrollStatusRequest, UpdateEnrollStatusRequest},
    responses::{AssignmentHistoryEntry, CommitteeVoteResponse, EnrollStatusDetail},
    workflow::DEFAULT_REQUIRED_COMMITTEE_VOTES,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;

/// 在给定连接（或事务）上插入审批记录
pub(crate) async fn insert_enroll_status<C: ConnectionTrait>(
    db: &C,
    req: CreateEnrollStatusRequest,
) -> Result<student_enroll_statuses::Model> {
    let now = now_ts();

    let model = ActiveModel {
        student_enroll_id: Set(req.student_enroll_id),
        instructor_id: Set(req.instructor_id),
        status: Set(req.status.unwrap_or(EnrollStatus::Pending).as_str().to_string()),
        remarks: Set(req.remarks),
        committee_votes: Set(Some("[]".to_string())),
        committee_vote_count: Set(0),
        required_committee_votes: Set(req
            .required_committee_votes
            .unwrap_or(DEFAULT_REQUIRED_COMMITTEE_VOTES)),
        committee_voting_deadline: Set(req.committee_voting_deadline.map(|t| t.timestamp())),
        status_history: Set(Some("[]".to_string())),
        instructor_assignment_history: Set(Some("[]".to_string())),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model.insert(db).await.map_err(db_err("创建审批记录"))
}

/// 把流程状态写回数据库
async fn save_workflow_state<C: ConnectionTrait>(
    db: &C,
    row: student_enroll_statuses::Model,
    state: &StudentEnrollStatus,
) -> Result<student_enroll_statuses::Model> {
    let mut model = row.into_active_model();
    model.instructor_id = Set(state.instructor_id);
    model.status = Set(state.status.as_str().to_string());
    model.committee_votes = Set(Some(serde_json::to_string(&state.committee_votes)?));
    model.committee_vote_count = Set(state.committee_vote_count);
    model.status_history = Set(Some(serde_json::to_string(&state.status_history)?));
    model.instructor_assignment_history = Set(Some(serde_json::to_string(
        &state.instructor_assignment_history,
    )?));
    model.updated_at = Set(state.updated_at.timestamp());

    model.update(db).await.map_err(db_err("保存审批状态"))
}

impl SeaOrmStorage {
    pub async fn list_enroll_statuses_impl(&self) -> Result<Vec<StudentEnrollStatus>> {
        let rows = StudentEnrollStatuses::find()
            .order_by_asc(Column::StudentEnrollId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询审批记录列表"))?;

        Ok(rows.into_iter().map(|m| m.into_enroll_status()).collect())
    }

    /// 某位教师负责的审批记录，可按状态过滤
    pub async fn list_instructor_statuses_impl(
        &self,
        instructor_id: i64,
        status: Option<EnrollStatus>,
    ) -> Result<Vec<StudentEnrollStatus>> {
        let mut query =
            StudentEnrollStatuses::find().filter(Column::InstructorId.eq(instructor_id));
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let rows = query
            .order_by_asc(Column::StudentEnrollId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询教师审批记录"))?;

        Ok(rows.into_iter().map(|m| m.into_enroll_status()).collect())
    }

    /// 一条选课下所有审批记录的教师变更历史，最新的在前
    pub async fn get_assignment_history_impl(
        &self,
        student_enroll_id: i64,
    ) -> Result<Option<Vec<AssignmentHistoryEntry>>> {
        let enroll = StudentEnrolls::find_by_id(student_enroll_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询选课记录"))?;
        if enroll.is_none() {
            return Ok(None);
        }

        let rows = StudentEnrollStatuses::find()
            .filter(Column::StudentEnrollId.eq(student_enroll_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询审批记录"))?;

        let mut entries: Vec<(i64, _)> = rows
            .into_iter()
            .map(|m| m.into_enroll_status())
            .flat_map(|status| {
                let id = status.id;
                status
                    .instructor_assignment_history
                    .into_iter()
                    .map(move |audit| (id, audit))
            })
            .collect();
        // 先整体倒序，时间相同的记录仍保持后写入的在前
        entries.reverse();
        entries.sort_by(|a, b| b.1.changed_at.cmp(&a.1.changed_at));

        let mut instructor_ids: Vec<i64> = entries
            .iter()
            .flat_map(|(_, audit)| {
                audit
                    .previous_instructor_id
                    .into_iter()
                    .chain([audit.new_instructor_id])
            })
            .collect();
        instructor_ids.sort_unstable();
        instructor_ids.dedup();
        let names: HashMap<i64, String> = Instructors::find()
            .filter(instructors::Column::Id.is_in(instructor_ids))
            .all(&self.db)
            .await
            .map_err(db_err("查询教师"))?
            .into_iter()
            .map(|m| {
                let instructor = m.into_instructor();
                (instructor.id, instructor.display_name())
            })
            .collect();

        Ok(Some(
            entries
                .into_iter()
                .map(|(enroll_status_id, audit)| AssignmentHistoryEntry {
                    enroll_status_id,
                    previous_instructor_name: audit
                        .previous_instructor_id
                        .and_then(|id| names.get(&id).cloned()),
                    new_instructor_name: names.get(&audit.new_instructor_id).cloned(),
                    audit,
                })
                .collect(),
        ))
    }

    pub async fn get_enroll_status_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<EnrollStatusDetail>> {
        let Some(row) = StudentEnrollStatuses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询审批记录"))?
        else {
            return Ok(None);
        };

        let instructor = row
            .find_related(Instructors)
            .one(&self.db)
            .await
            .map_err(db_err("查询审批教师"))?;

        let status = row.into_enroll_status();
        Ok(Some(EnrollStatusDetail {
            status_display_name: status.status.display_name().to_string(),
            status,
            instructor: instructor.map(|m| m.into_instructor()),
        }))
    }

    pub async fn create_enroll_status_impl(
        &self,
        req: CreateEnrollStatusRequest,
    ) -> Result<StudentEnrollStatus> {
        let result = insert_enroll_status(&self.db, req).await?;
        Ok(result.into_enroll_status())
    }

    /// 更新备注与投票设置，状态本身只能通过流转接口修改
    pub async fn update_enroll_status_impl(
        &self,
        id: i64,
        req: UpdateEnrollStatusRequest,
    ) -> Result<Option<StudentEnrollStatus>> {
        let Some(existing) = StudentEnrollStatuses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询审批记录"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(remarks) = req.remarks {
            model.remarks = Set(Some(remarks));
        }
        if let Some(required) = req.required_committee_votes {
            model.required_committee_votes = Set(required);
        }
        if let Some(deadline) = req.committee_voting_deadline {
            model.committee_voting_deadline = Set(Some(deadline.timestamp()));
        }
        model.updated_at = Set(now_ts());

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新审批记录"))?;
        Ok(Some(result.into_enroll_status()))
    }

    pub async fn delete_enroll_status_impl(&self, id: i64) -> Result<bool> {
        let result = StudentEnrollStatuses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除审批记录"))?;

        Ok(result.rows_affected > 0)
    }

    /// 状态流转；非法流转返回 InvalidTransition 且不写入任何内容
    pub async fn transition_enroll_status_impl(
        &self,
        id: i64,
        next: EnrollStatus,
        changed_by: i64,
        reason: Option<String>,
    ) -> Result<Option<StudentEnrollStatus>> {
        let txn = self.db.begin().await.map_err(db_err("开启事务"))?;

        let Some(row) = StudentEnrollStatuses::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err("查询审批记录"))?
        else {
            return Ok(None);
        };

        let mut state = row.clone().into_enroll_status();
        state.transition_to(next, changed_by, reason, Utc::now())?;
        let saved = save_workflow_state(&txn, row, &state).await?;

        txn.commit().await.map_err(db_err("提交事务"))?;
        Ok(Some(saved.into_enroll_status()))
    }

    /// 记录委员会投票，票数足够时自动流转
    pub async fn cast_committee_vote_impl(
        &self,
        id: i64,
        instructor_id: i64,
        vote: VoteChoice,
        remarks: Option<String>,
        changed_by: i64,
    ) -> Result<Option<CommitteeVoteResponse>> {
        let txn = self.db.begin().await.map_err(db_err("开启事务"))?;

        let Some(row) = StudentEnrollStatuses::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err("查询审批记录"))?
        else {
            return Ok(None);
        };

        // 投票人必须是该选课所在课程班的委员会成员
        let enroll = StudentEnrolls::find_by_id(row.student_enroll_id)
            .one(&txn)
            .await
            .map_err(db_err("查询选课记录"))?
            .ok_or_else(|| CoopError::not_found("Student enrollment not found"))?;
        let committee =
            section_member_ids(&txn, SectionMemberKind::Committee, enroll.course_section_id)
                .await?;
        if !committee.contains(&instructor_id) {
            return Err(CoopError::vote_rejected(format!(
                "Instructor {instructor_id} is not a committee member of this course section"
            )));
        }

        let mut state = row.clone().into_enroll_status();
        let result = state.add_committee_vote(instructor_id, vote, remarks, changed_by, Utc::now())?;
        let saved = save_workflow_state(&txn, row, &state).await?;

        txn.commit().await.map_err(db_err("提交事务"))?;
        Ok(Some(CommitteeVoteResponse {
            status: saved.into_enroll_status(),
            result,
        }))
    }

    /// 更换负责审批的教师
    pub async fn change_status_instructor_impl(
        &self,
        id: i64,
        new_instructor_id: i64,
        changed_by: i64,
        reason: Option<String>,
    ) -> Result<Option<StudentEnrollStatus>> {
        let txn = self.db.begin().await.map_err(db_err("开启事务"))?;

        let Some(row) = StudentEnrollStatuses::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err("查询审批记录"))?
        else {
            return Ok(None);
        };

        let mut state = row.clone().into_enroll_status();
        state.change_instructor(new_instructor_id, changed_by, reason, Utc::now())?;

        let instructor = Instructors::find_by_id(new_instructor_id)
            .one(&txn)
            .await
            .map_err(db_err("查询教师"))?;
        if instructor.is_none() {
            return Err(CoopError::not_found("Instructor not found"));
        }

        let saved = save_workflow_state(&txn, row, &state).await?;

        txn.commit().await.map_err(db_err("提交事务"))?;
        Ok(Some(saved.into_enroll_status()))
    }
}
