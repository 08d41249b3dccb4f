use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct CreateStudentRequest {
    pub user_id: i64,
    pub student_code: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gpax: Option<f64>,
    pub faculty_id: Option<i64>,
    pub program_id: Option<i64>,
    pub curriculum_id: Option<i64>,
    pub major_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct UpdateStudentRequest {
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gpax: Option<f64>,
    pub faculty_id: Option<i64>,
    pub program_id: Option<i64>,
    pub curriculum_id: Option<i64>,
    pub major_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct CreateInstructorRequest {
    pub user_id: i64,
    pub staff_code: String,
    pub academic_title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub faculty_id: Option<i64>,
    pub program_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct UpdateInstructorRequest {
    pub staff_code: Option<String>,
    pub academic_title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub faculty_id: Option<i64>,
    pub program_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct CreateStaffRequest {
    pub user_id: i64,
    pub staff_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub campus_id: Option<i64>,
    pub faculty_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct UpdateStaffRequest {
    pub staff_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub campus_id: Option<i64>,
    pub faculty_id: Option<i64>,
}
