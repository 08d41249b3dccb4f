use serde::Serialize;
use ts_rs::TS;

use super::entities::{Instructor, Staff, Student};
use crate::models::courses::entities::CourseSection;
use crate::models::enrollments::entities::StudentEnroll;
use crate::models::organization::entities::{Curriculum, Faculty, Major, Program};
use crate::models::users::entities::User;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct StudentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub user: Option<User>,
    pub faculty: Option<Faculty>,
    pub program: Option<Program>,
    pub curriculum: Option<Curriculum>,
    pub major: Option<Major>,
    pub enrollments: Vec<StudentEnroll>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct InstructorDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub instructor: Instructor,
    pub user: Option<User>,
    /// 作为授课教师的课程班
    pub teaching_sections: Vec<CourseSection>,
    /// 作为委员会成员的课程班
    pub committee_sections: Vec<CourseSection>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct StaffDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub staff: Staff,
    pub user: Option<User>,
}
