use serde::Deserialize;
use ts_rs::TS;

use crate::models::ErrorCode;

// 批量写入成绩或出勤
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct BulkGradeRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
    #[serde(default)]
    pub grade: String,
}

impl BulkGradeRequest {
    /// 返回去除首尾空白后的取值
    pub fn validate(&self) -> Result<&str, (ErrorCode, &'static str)> {
        if self.ids.is_empty() {
            return Err((ErrorCode::GradeIdsEmpty, "ids must not be empty"));
        }
        let grade = self.grade.trim();
        if grade.is_empty() {
            return Err((ErrorCode::GradeValueEmpty, "grade must not be empty"));
        }
        Ok(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ids_rejected() {
        let req = BulkGradeRequest {
            ids: vec![],
            grade: "A".into(),
        };
        assert_eq!(req.validate().unwrap_err().0, ErrorCode::GradeIdsEmpty);
    }

    #[test]
    fn test_blank_grade_rejected() {
        let req: BulkGradeRequest = serde_json::from_str(r#"{"ids":[1,2],"grade":"  "}"#).unwrap();
        assert_eq!(req.validate().unwrap_err().0, ErrorCode::GradeValueEmpty);
    }

    #[test]
    fn test_grade_trimmed() {
        let req: BulkGradeRequest = serde_json::from_str(r#"{"ids":[3],"grade":" B+ "}"#).unwrap();
        assert_eq!(req.validate().unwrap(), "B+");
    }
}
