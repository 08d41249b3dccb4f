use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use ts_rs::TS;

// 实习信息字段，创建与更新共用，缺省字段保持不变
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct TrainingFields {
    pub document_language: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub coordinator: Option<String>,
    pub coordinator_phone_number: Option<String>,
    pub coordinator_email: Option<String>,
    pub supervisor: Option<String>,
    pub supervisor_phone_number: Option<String>,
    pub supervisor_email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub job_description: Option<String>,
}

impl TrainingFields {
    /// 结束日期不得早于开始日期
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err("end_date must not be earlier than start_date".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct CreateStudentTrainingRequest {
    pub student_enroll_id: i64,
    pub company_id: Option<i64>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub fields: TrainingFields,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct UpdateStudentTrainingRequest {
    pub company_id: Option<i64>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub fields: TrainingFields,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct CreateVisitorTrainingRequest {
    pub student_enroll_id: i64,
    pub visitor_instructor_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct UpdateVisitorTrainingRequest {
    pub student_enroll_id: Option<i64>,
    pub visitor_instructor_id: Option<i64>,
}

// 为一条选课指派巡访教师，每条选课至多一名
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct AssignVisitorRequest {
    pub student_enroll_id: i64,
    pub visitor_instructor_id: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct BulkAssignVisitorRequest {
    pub student_enroll_ids: Vec<i64>,
    pub visitor_instructor_id: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct CreateVisitorScheduleRequest {
    pub visitor_training_id: i64,
    pub visit_no: i32,
    pub visit_at: Option<DateTime<Utc>>,
    pub comment: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct UpdateVisitorScheduleRequest {
    pub visit_no: Option<i32>,
    pub visit_at: Option<DateTime<Utc>>,
    pub comment: Option<String>,
    pub status: Option<String>,
}

// 照片元数据更新，文件本身只能重新上传
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct UpdateVisitsPictureRequest {
    pub photo_no: Option<i32>,
    pub original_name: Option<String>,
}

// 上传落盘后写入数据库的照片信息
#[derive(Debug, Clone)]
pub struct NewVisitsPicture {
    pub visitor_schedule_id: i64,
    pub photo_no: i32,
    pub file_name: String,
    pub original_name: String,
    pub file_size: i64,
    pub file_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_dates_order() {
        let fields: TrainingFields =
            serde_json::from_str(r#"{"start_date":"2025-06-01","end_date":"2025-05-01"}"#)
                .unwrap();
        assert!(fields.validate().is_err());

        let fields: TrainingFields =
            serde_json::from_str(r#"{"start_date":"2025-06-01","end_date":"2025-09-30"}"#)
                .unwrap();
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(serde_json::from_str::<TrainingFields>(r#"{"start_date":"01/06/2025"}"#).is_err());
    }
}
