use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::{error, info};
use uuid::Uuid;

use super::{VisitService, picture_path};
use crate::config::AppConfig;
use crate::errors::CoopError;
use crate::models::trainings::requests::NewVisitsPicture;
use crate::models::trainings::responses::VisitsPictureResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::not_found_response;
use crate::utils::file_magic::content_type_for;
use crate::utils::multipart::{UploadedFile, read_single_file};

/// 入库记录的文件类型由已校验过魔数的扩展名决定
fn new_picture(
    visitor_schedule_id: i64,
    photo_no: i32,
    stored_name: String,
    file: UploadedFile,
) -> NewVisitsPicture {
    NewVisitsPicture {
        visitor_schedule_id,
        photo_no,
        file_name: stored_name,
        file_size: file.data.len() as i64,
        file_type: content_type_for(&file.extension).to_string(),
        original_name: file.original_name,
    }
}

fn upload_failed(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::FileUploadFailed, message))
}

pub async fn handle_upload(
    service: &VisitService,
    visitor_schedule_id: i64,
    payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let storage = service.get_storage(request);

    // 先确认巡访安排存在，并据已有照片推算编号
    let schedule = match storage.get_visitor_schedule_detail(visitor_schedule_id).await {
        Ok(Some(schedule)) => schedule,
        Ok(None) => {
            return Ok(not_found_response(
                ErrorCode::VisitorScheduleNotFound,
                "Visitor schedule not found",
            ));
        }
        Err(e) => return Ok(e.error_response()),
    };
    let photo_no = schedule
        .pictures
        .iter()
        .map(|p| p.picture.photo_no)
        .max()
        .unwrap_or(0)
        + 1;

    let file = match read_single_file(payload, &config.upload.allowed_types, config.upload.max_size)
        .await
    {
        Ok(file) => file,
        Err(e) => return Ok(e.into_response()),
    };

    if let Err(e) = tokio::fs::create_dir_all(&config.upload.dir).await {
        error!("{}", CoopError::file_operation(format!("{e}")));
        return Ok(upload_failed("Failed to create upload directory"));
    }

    let stored_name = format!(
        "{}-{}{}",
        chrono::Utc::now().timestamp(),
        Uuid::new_v4(),
        file.extension
    );
    let path = picture_path(&stored_name);
    if let Err(e) = tokio::fs::write(&path, &file.data).await {
        error!("{}", CoopError::file_operation(format!("{e}")));
        return Ok(upload_failed("Failed to save uploaded file"));
    }

    match storage
        .create_visits_picture(new_picture(visitor_schedule_id, photo_no, stored_name, file))
        .await
    {
        Ok(picture) => {
            info!(
                "Uploaded picture {} for visitor schedule {}",
                picture.id, visitor_schedule_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                VisitsPictureResponse::from(picture),
                "Visits picture uploaded successfully",
            )))
        }
        Err(e) => {
            // 入库失败时清理已写入的文件
            let _ = tokio::fs::remove_file(&path).await;
            Ok(e.error_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_follows_extension() {
        let file = UploadedFile {
            original_name: "visit-1.JPG".to_string(),
            extension: ".jpg".to_string(),
            data: vec![0xFF, 0xD8, 0xFF, 0xE0],
        };
        let picture = new_picture(7, 2, "stored.jpg".to_string(), file);
        assert_eq!(picture.file_type, "image/jpeg");
        assert_eq!(picture.file_size, 4);
        assert_eq!(picture.original_name, "visit-1.JPG");
        assert_eq!(picture.photo_no, 2);
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        let file = UploadedFile {
            original_name: "scan".to_string(),
            extension: String::new(),
            data: Vec::new(),
        };
        let picture = new_picture(1, 1, "scan".to_string(), file);
        assert_eq!(picture.file_type, "application/octet-stream");
    }
}
