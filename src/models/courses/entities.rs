use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程类型：合作教育或普通实习
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum CourseType {
    Coop,
    Internship,
}

impl<'de> Deserialize<'de> for CourseType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课程类型: '{s}'. 支持的类型: coop, internship"
            ))
        })
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseType::Coop => write!(f, "coop"),
            CourseType::Internship => write!(f, "internship"),
        }
    }
}

impl std::str::FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coop" => Ok(CourseType::Coop),
            "internship" => Ok(CourseType::Internship),
            _ => Err(format!("Invalid course type: {s}")),
        }
    }
}

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub curriculum_id: Option<i64>,
    pub course_code: String,
    pub course_name_th: String,
    pub course_name_en: Option<String>,
    pub course_type: CourseType,
    pub credits: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 课程班：某学年某学期的一次开课
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseSection {
    pub id: i64,
    pub course_id: i64,
    pub section: i32,
    pub semester: i32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 课程班与教师的关联行（授课教师或委员会）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseSectionMember {
    pub id: i64,
    pub course_section_id: i64,
    pub instructor_id: i64,
    pub created_at: DateTime<Utc>,
}

/// 课程班成员类别，对应两张关联表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMemberKind {
    Instructor,
    Committee,
}

impl SectionMemberKind {
    pub fn attached_message(&self) -> &'static str {
        match self {
            SectionMemberKind::Instructor => "Instructor attached to course section",
            SectionMemberKind::Committee => "Instructor attached to course committee",
        }
    }

    pub fn already_attached_message(&self) -> &'static str {
        match self {
            SectionMemberKind::Instructor => "Instructor is already teaching this course section",
            SectionMemberKind::Committee => "Instructor is already in course committee",
        }
    }

    pub fn removed_message(&self) -> &'static str {
        match self {
            SectionMemberKind::Instructor => "Instructor removed from course section",
            SectionMemberKind::Committee => "Instructor removed from course committee",
        }
    }
}
