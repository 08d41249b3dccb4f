//! 数据模型定义
//!
//! 业务实体、请求体与响应体，均通过 ts-rs 导出给前端使用。

pub mod auth;
pub mod common;
pub mod companies;
pub mod courses;
pub mod enrollments;
pub mod evaluations;
pub mod excel;
pub mod grades;
pub mod letters;
pub mod organization;
pub mod people;
pub mod system;
pub mod trainings;
pub mod users;

pub use common::{ApiResponse, IndexQuery};

use serde::{Deserialize, Serialize};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功；1xxx 请求参数，2xxx 认证授权，3xxx 资源不存在，
/// 4xxx 冲突与流程状态，5xxx 文件，6xxx 公函，9xxx 服务器内部。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,
    GradeIdsEmpty = 1002,
    GradeValueEmpty = 1003,
    InvalidDate = 1004,
    PayloadTooLarge = 1005,
    UserNameInvalid = 1010,
    UserEmailInvalid = 1011,
    UserPasswordInvalid = 1012,

    Unauthorized = 2000,
    AuthFailed = 2001,
    Forbidden = 2002,
    RateLimitExceeded = 2003,

    NotFound = 3000,
    UserNotFound = 3001,
    StudentNotFound = 3002,
    InstructorNotFound = 3003,
    CourseSectionNotFound = 3004,
    StudentEnrollNotFound = 3005,
    EnrollStatusNotFound = 3006,
    StudentTrainingNotFound = 3007,
    VisitorScheduleNotFound = 3008,

    Conflict = 4000,
    UserAlreadyExists = 4001,
    CommitteeAlreadyAttached = 4002,
    InstructorAlreadyAttached = 4003,
    InvalidStatusTransition = 4004,
    CommitteeVoteRejected = 4005,
    InvalidInstructorAssignment = 4006,

    FileUploadFailed = 5000,
    FileTypeNotAllowed = 5001,
    FileSizeExceeded = 5002,
    FileNotFound = 5003,
    MultifileUploadNotAllowed = 5004,
    ImportFileParseFailed = 5005,

    LetterRenderFailed = 6000,

    InternalServerError = 9000,
    DatabaseError = 9001,
}
