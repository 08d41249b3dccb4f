//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及到 HTTP 响应的映射。

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_coop_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CoopError {
            $($variant(String),)*
        }

        impl CoopError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CoopError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CoopError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CoopError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl CoopError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CoopError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_coop_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    FileOperation("E005", "File Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Conflict("E008", "Resource Conflict"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    SpreadsheetParse("E013", "Spreadsheet Parse Error"),
    LetterRender("E014", "Letter Render Error"),
    InvalidTransition("E015", "Invalid Status Transition"),
    VoteRejected("E016", "Committee Vote Rejected"),
    AssignmentRejected("E017", "Instructor Assignment Rejected"),
}

impl CoopError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 对应的业务错误码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            CoopError::Validation(_) | CoopError::DateParse(_) | CoopError::Serialization(_) => {
                ErrorCode::BadRequest
            }
            CoopError::NotFound(_) => ErrorCode::NotFound,
            CoopError::Conflict(_) => ErrorCode::Conflict,
            CoopError::InvalidTransition(_) => ErrorCode::InvalidStatusTransition,
            CoopError::VoteRejected(_) => ErrorCode::CommitteeVoteRejected,
            CoopError::AssignmentRejected(_) => ErrorCode::InvalidInstructorAssignment,
            CoopError::Authentication(_) => ErrorCode::Unauthorized,
            CoopError::Authorization(_) => ErrorCode::Forbidden,
            CoopError::SpreadsheetParse(_) => ErrorCode::ImportFileParseFailed,
            CoopError::LetterRender(_) => ErrorCode::LetterRenderFailed,
            CoopError::FileOperation(_) => ErrorCode::FileUploadFailed,
            CoopError::DatabaseConfig(_)
            | CoopError::DatabaseConnection(_)
            | CoopError::DatabaseOperation(_) => ErrorCode::DatabaseError,
            CoopError::CacheConnection(_) => ErrorCode::InternalServerError,
        }
    }
}

impl fmt::Display for CoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CoopError {}

impl ResponseError for CoopError {
    fn status_code(&self) -> StatusCode {
        match self {
            CoopError::Validation(_) | CoopError::DateParse(_) | CoopError::Serialization(_) => {
                StatusCode::BAD_REQUEST
            }
            CoopError::SpreadsheetParse(_) => StatusCode::BAD_REQUEST,
            CoopError::NotFound(_) => StatusCode::NOT_FOUND,
            CoopError::Conflict(_)
            | CoopError::InvalidTransition(_)
            | CoopError::VoteRejected(_)
            | CoopError::AssignmentRejected(_) => StatusCode::CONFLICT,
            CoopError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CoopError::Authorization(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("{}", self.format_simple());
        }
        HttpResponse::build(self.status_code())
            .json(ApiResponse::error_empty(self.error_code(), self.message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CoopError {
    fn from(err: sea_orm::DbErr) -> Self {
        // 唯一约束冲突单独归类，交由上层映射为 409
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => CoopError::Conflict(msg),
            // 外键指向的记录不存在属于请求参数问题
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg)) => {
                CoopError::Validation(format!("Referenced record does not exist: {msg}"))
            }
            _ => CoopError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<sea_orm::TransactionError<CoopError>> for CoopError {
    fn from(err: sea_orm::TransactionError<CoopError>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(e) => e.into(),
            sea_orm::TransactionError::Transaction(e) => e,
        }
    }
}

impl From<std::io::Error> for CoopError {
    fn from(err: std::io::Error) -> Self {
        CoopError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CoopError {
    fn from(err: serde_json::Error) -> Self {
        CoopError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CoopError {
    fn from(err: chrono::ParseError) -> Self {
        CoopError::DateParse(err.to_string())
    }
}

impl From<calamine::Error> for CoopError {
    fn from(err: calamine::Error) -> Self {
        CoopError::SpreadsheetParse(err.to_string())
    }
}

impl From<chromiumoxide::error::CdpError> for CoopError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        CoopError::LetterRender(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CoopError::cache_connection("test").code(), "E001");
        assert_eq!(CoopError::database_config("test").code(), "E002");
        assert_eq!(CoopError::validation("test").code(), "E006");
        assert_eq!(CoopError::invalid_transition("test").code(), "E015");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CoopError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            CoopError::spreadsheet_parse("test").error_type(),
            "Spreadsheet Parse Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = CoopError::validation("ids must not be empty");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("ids must not be empty"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoopError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoopError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CoopError::invalid_transition("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CoopError::vote_rejected("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CoopError::letter_render("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            CoopError::spreadsheet_parse("x").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            CoopError::conflict("dup").error_code() as i32,
            ErrorCode::Conflict as i32
        );
        assert_eq!(
            CoopError::database_operation("boom").error_code() as i32,
            ErrorCode::DatabaseError as i32
        );
    }
}
