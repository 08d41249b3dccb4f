//! Excel 导入：保存上传文件并解析首个工作表，不写入业务表

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::errors::CoopError;
use crate::models::excel::ExcelImportResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::excel::parse_first_sheet;
use crate::utils::multipart::read_single_file;

pub struct ExcelService;

impl ExcelService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn upload(
        &self,
        payload: Multipart,
        _request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let config = &AppConfig::get().excel;

        let file = match read_single_file(payload, &config.allowed_types, config.max_size).await {
            Ok(file) => file,
            Err(e) => return Ok(e.into_response()),
        };

        if let Err(e) = tokio::fs::create_dir_all(&config.temp_dir).await {
            error!("{}", CoopError::file_operation(format!("{e}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    "Failed to create temporary directory",
                )),
            );
        }

        let file_name = stored_file_name(chrono::Utc::now(), &file.extension);
        let path = PathBuf::from(&config.temp_dir).join(&file_name);
        if let Err(e) = tokio::fs::write(&path, &file.data).await {
            return Ok(CoopError::file_operation(format!("{e}")).error_response());
        }

        // calamine 为同步解析，放到阻塞线程池
        let parse_path = path.clone();
        let parsed = match tokio::task::spawn_blocking(move || parse_first_sheet(&parse_path)).await
        {
            Ok(Ok(parsed)) => parsed,
            Ok(Err(e)) => return Ok(e.error_response()),
            Err(e) => {
                return Ok(
                    CoopError::spreadsheet_parse(format!("Parser task failed: {e}"))
                        .error_response(),
                );
            }
        };

        info!(
            "Parsed {} row(s) from {} ({})",
            parsed.rows.len(),
            file.original_name,
            file_name
        );

        Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExcelImportResponse {
                file_name,
                sheet_name: parsed.sheet_name,
                headers: parsed.headers,
                rows: parsed.rows,
            },
            "Excel file parsed successfully",
        )))
    }
}

// 以时间戳命名，精确到毫秒
fn stored_file_name(now: chrono::DateTime<chrono::Utc>, extension: &str) -> String {
    format!("{}{}", now.format("%Y%m%d%H%M%S%3f"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stored_file_name() {
        let now = chrono::Utc
            .with_ymd_and_hms(2024, 9, 16, 8, 30, 5)
            .unwrap();
        assert_eq!(stored_file_name(now, ".xlsx"), "20240916083005000.xlsx");
    }
}
