use serde::Serialize;
use ts_rs::TS;

use super::entities::Company;
use crate::models::trainings::entities::StudentTraining;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/company.ts")]
pub struct CompanyDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub company: Company,
    pub student_trainings: Vec<StudentTraining>,
}
