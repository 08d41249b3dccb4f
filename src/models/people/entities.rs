use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生档案
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub student_code: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gpax: Option<f64>,
    pub faculty_id: Option<i64>,
    pub program_id: Option<i64>,
    pub curriculum_id: Option<i64>,
    pub major_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) if !middle.trim().is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

// 指导教师 / 委员会成员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct Instructor {
    pub id: i64,
    pub user_id: i64,
    pub staff_code: String,
    pub academic_title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub faculty_id: Option<i64>,
    pub program_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Instructor {
    pub fn display_name(&self) -> String {
        match &self.academic_title {
            Some(title) if !title.is_empty() => {
                format!("{}{} {}", title, self.first_name, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

// 教务人员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct Staff {
    pub id: i64,
    pub user_id: i64,
    pub staff_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub campus_id: Option<i64>,
    pub faculty_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
