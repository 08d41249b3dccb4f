use super::entities::User;
use crate::models::people::entities::{Instructor, Staff, Student};
use serde::Serialize;
use ts_rs::TS;

// 用户详情，附带其人员档案
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub user: User,
    pub student: Option<Student>,
    pub instructor: Option<Instructor>,
    pub staff: Option<Staff>,
}
