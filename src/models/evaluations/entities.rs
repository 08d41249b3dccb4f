use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评价方：学生评价实习单位，或巡访教师评价学生
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub enum Evaluator {
    Student,
    Visitor,
}

impl<'de> Deserialize<'de> for Evaluator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的评价方: '{s}'. 支持的取值: student, visitor"
            ))
        })
    }
}

impl std::fmt::Display for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluator::Student => write!(f, "student"),
            Evaluator::Visitor => write!(f, "visitor"),
        }
    }
}

impl std::str::FromStr for Evaluator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Evaluator::Student),
            "visitor" => Ok(Evaluator::Visitor),
            _ => Err(format!("Invalid evaluator: {s}")),
        }
    }
}

// 评价题目及得分
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub student_training_id: i64,
    pub evaluator: Evaluator,
    pub question: String,
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
