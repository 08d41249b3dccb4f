use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use super::entities::{StudentTraining, VisitorSchedule, VisitorTraining, VisitsPicture};
use crate::models::companies::entities::Company;
use crate::models::evaluations::entities::Evaluation;
use crate::models::people::entities::Instructor;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct StudentTrainingDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub training: StudentTraining,
    pub company: Option<Company>,
    pub evaluations: Vec<Evaluation>,
}

// created 为 false 表示该选课已有巡访教师，返回的是原有记录
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct VisitorAssignment {
    pub visitor_training: VisitorTraining,
    pub created: bool,
}

#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct BulkVisitorAssignResponse {
    /// 本次新建巡访的选课 id
    pub created_ids: Vec<i64>,
    /// 已有巡访教师而跳过的选课 id
    pub skipped_existing: Vec<i64>,
    #[serde(rename = "notFound")]
    pub not_found: Vec<i64>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct VisitorTrainingDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub visitor_training: VisitorTraining,
    pub visitor: Option<Instructor>,
    pub schedules: Vec<VisitorSchedule>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct VisitorScheduleDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub schedule: VisitorSchedule,
    pub pictures: Vec<VisitsPictureResponse>,
}

// 照片响应，附带可读大小
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct VisitsPictureResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub picture: VisitsPicture,
    pub human_file_size: String,
    pub download_url: String,
}

impl From<VisitsPicture> for VisitsPictureResponse {
    fn from(picture: VisitsPicture) -> Self {
        Self {
            human_file_size: picture.human_file_size(),
            download_url: format!("/api/v1/visits_pictures/{}/file", picture.id),
            picture,
        }
    }
}

// 学生对实习单位的评价完成情况
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct EvaluationStatusResponse {
    pub student_training_id: i64,
    pub has_evaluated: bool,
    pub evaluation_date: Option<DateTime<Utc>>,
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
}
