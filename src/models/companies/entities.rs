use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 实习单位
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/company.ts")]
pub struct Company {
    pub id: i64,
    pub company_register_number: Option<String>,
    pub company_name_th: String,
    pub company_name_en: Option<String>,
    pub company_address: Option<String>,
    pub company_map: Option<String>,
    pub company_email: Option<String>,
    pub company_phone_number: Option<String>,
    pub company_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
