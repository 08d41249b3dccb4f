use serde::Serialize;
use ts_rs::TS;

use super::entities::{Campus, Curriculum, Faculty, Major, Program};

// 单条查询时附带的关联数据

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct CampusDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub campus: Campus,
    pub faculties: Vec<Faculty>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct FacultyDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub faculty: Faculty,
    pub campus: Option<Campus>,
    pub programs: Vec<Program>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct ProgramDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub program: Program,
    pub faculty: Option<Faculty>,
    pub curriculums: Vec<Curriculum>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct CurriculumDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub curriculum: Curriculum,
    pub program: Option<Program>,
    pub majors: Vec<Major>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/organization.ts")]
pub struct MajorDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub major: Major,
    pub curriculum: Option<Curriculum>,
}
