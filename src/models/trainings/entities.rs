use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生实习安排，每条选课至多一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct StudentTraining {
    pub id: i64,
    pub student_enroll_id: i64,
    pub company_id: Option<i64>,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 巡访记录：负责巡访的教师
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct VisitorTraining {
    pub id: i64,
    pub student_enroll_id: i64,
    pub visitor_instructor_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 巡访日程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct VisitorSchedule {
    pub id: i64,
    pub visitor_training_id: i64,
    pub visit_no: i32,
    pub visit_at: Option<DateTime<Utc>>,
    pub comment: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 巡访照片
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/training.ts")]
pub struct VisitsPicture {
    pub id: i64,
    pub visitor_schedule_id: i64,
    pub photo_no: i32,
    pub file_name: String,
    pub original_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VisitsPicture {
    /// 可读的文件大小，如 "1.5 MB"
    pub fn human_file_size(&self) -> String {
        human_file_size(self.file_size)
    }
}

pub fn human_file_size(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes.max(0) as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes.max(0), UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_file_size() {
        assert_eq!(human_file_size(512), "512 B");
        assert_eq!(human_file_size(1536), "1.5 KB");
        assert_eq!(human_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(human_file_size(-3), "0 B");
    }
}
