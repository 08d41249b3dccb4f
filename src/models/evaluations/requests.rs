use serde::Deserialize;
use ts_rs::TS;

use super::MAX_SCORE;
use super::entities::Evaluator;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct CreateEvaluationRequest {
    pub student_training_id: i64,
    pub evaluator: Evaluator,
    pub question: String,
    pub score: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct UpdateEvaluationRequest {
    pub question: Option<String>,
    pub score: Option<i32>,
    pub comment: Option<String>,
}

/// 分数须在 0 到 100 之间
pub fn validate_score(score: Option<i32>) -> Result<(), String> {
    match score {
        Some(s) if !(0..=MAX_SCORE).contains(&s) => {
            Err(format!("Score must be a number between 0 and {MAX_SCORE}"))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_score_bounds() {
        assert!(validate_score(None).is_ok());
        assert!(validate_score(Some(0)).is_ok());
        assert!(validate_score(Some(100)).is_ok());
        assert!(validate_score(Some(101)).is_err());
        assert!(validate_score(Some(-1)).is_err());
    }
}
