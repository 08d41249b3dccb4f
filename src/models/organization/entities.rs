use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 校区
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct Campus {
    pub id: i64,
    pub campus_code: String,
    pub campus_name_th: String,
    pub campus_name_en: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 学院，隶属于校区
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct Faculty {
    pub id: i64,
    pub campus_id: i64,
    pub faculty_name_th: String,
    pub faculty_name_en: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 专业计划，隶属于学院
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct Program {
    pub id: i64,
    pub faculty_id: i64,
    pub program_name_th: String,
    pub program_name_en: Option<String>,
    pub abbreviation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 课程体系，隶属于专业计划
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct Curriculum {
    pub id: i64,
    pub program_id: i64,
    pub curriculum_name_th: String,
    pub curriculum_name_en: Option<String>,
    pub academic_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 方向，隶属于课程体系
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct Major {
    pub id: i64,
    pub curriculum_id: i64,
    pub major_name_th: String,
    pub major_name_en: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
