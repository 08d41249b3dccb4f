use serde::Serialize;
use ts_rs::TS;

use super::entities::{Course, CourseSection};
use crate::models::organization::entities::Curriculum;
use crate::models::people::entities::Instructor;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub course: Course,
    pub curriculum: Option<Curriculum>,
    pub sections: Vec<CourseSection>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseSectionDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub section: CourseSection,
    pub course: Option<Course>,
    pub instructors: Vec<Instructor>,
    pub committees: Vec<Instructor>,
    pub enrollment_count: i64,
}
