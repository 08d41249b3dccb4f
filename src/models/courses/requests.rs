use serde::Deserialize;
use ts_rs::TS;

use super::entities::CourseType;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub curriculum_id: Option<i64>,
    pub course_code: String,
    pub course_name_th: String,
    pub course_name_en: Option<String>,
    pub course_type: CourseType,
    pub credits: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub curriculum_id: Option<i64>,
    pub course_code: Option<String>,
    pub course_name_th: Option<String>,
    pub course_name_en: Option<String>,
    pub course_type: Option<CourseType>,
    pub credits: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseSectionRequest {
    pub course_id: i64,
    pub section: i32,
    pub semester: i32,
    pub year: i32,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseSectionRequest {
    pub course_id: Option<i64>,
    pub section: Option<i32>,
    pub semester: Option<i32>,
    pub year: Option<i32>,
}

// 关联教师与课程班
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct AttachInstructorRequest {
    pub instructor_id: i64,
}
