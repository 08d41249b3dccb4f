use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct CreateCampusRequest {
    pub campus_code: String,
    pub campus_name_th: String,
    pub campus_name_en: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct UpdateCampusRequest {
    pub campus_code: Option<String>,
    pub campus_name_th: Option<String>,
    pub campus_name_en: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct CreateFacultyRequest {
    pub campus_id: i64,
    pub faculty_name_th: String,
    pub faculty_name_en: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct UpdateFacultyRequest {
    pub campus_id: Option<i64>,
    pub faculty_name_th: Option<String>,
    pub faculty_name_en: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct CreateProgramRequest {
    pub faculty_id: i64,
    pub program_name_th: String,
    pub program_name_en: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct UpdateProgramRequest {
    pub faculty_id: Option<i64>,
    pub program_name_th: Option<String>,
    pub program_name_en: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct CreateCurriculumRequest {
    pub program_id: i64,
    pub curriculum_name_th: String,
    pub curriculum_name_en: Option<String>,
    pub academic_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct UpdateCurriculumRequest {
    pub program_id: Option<i64>,
    pub curriculum_name_th: Option<String>,
    pub curriculum_name_en: Option<String>,
    pub academic_year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct CreateMajorRequest {
    pub curriculum_id: i64,
    pub major_name_th: String,
    pub major_name_en: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct UpdateMajorRequest {
    pub curriculum_id: Option<i64>,
    pub major_name_th: Option<String>,
    pub major_name_en: Option<String>,
}
