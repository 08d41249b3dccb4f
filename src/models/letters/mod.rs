use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

// 公函类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/letter.ts")]
pub enum LetterKind {
    /// 请求接收学生实习
    #[serde(alias = "request-cooperation")]
    RequestCooperation,
    /// 学生报到派遣函
    Refer,
}

// 公函语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/letter.ts")]
pub enum LetterLanguage {
    Th,
    En,
}

impl LetterKind {
    pub fn slug(&self) -> &'static str {
        match self {
            LetterKind::RequestCooperation => "request-cooperation",
            LetterKind::Refer => "refer",
        }
    }
}

impl LetterLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            LetterLanguage::Th => "th",
            LetterLanguage::En => "en",
        }
    }
}

// 生成公函的请求体
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/letter.ts")]
pub struct LetterRequest {
    /// 公文编号，拼接在配置的前缀之后
    pub doc_no: String,
    pub issue_date: NaiveDate,
    /// 英文函件中学生姓名前的称谓，如 "Mr."
    pub prefix: Option<String>,
}

/// 渲染选课公函所需的全部数据
#[derive(Debug, Clone)]
pub struct LetterContext {
    pub student: crate::models::people::entities::Student,
    pub course: crate::models::courses::entities::Course,
    pub section: crate::models::courses::entities::CourseSection,
    pub training: Option<crate::models::trainings::entities::StudentTraining>,
    pub company: Option<crate::models::companies::entities::Company>,
}
