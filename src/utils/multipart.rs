//! multipart 上传：只接受一个名为 `file` 的字段

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::file_magic::{file_extension, validate_magic_bytes};

#[derive(Debug)]
pub struct UploadedFile {
    pub original_name: String,
    /// 小写并带点，如 ".png"
    pub extension: String,
    pub data: Vec<u8>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UploadError {
    Missing,
    Multiple,
    TypeNotAllowed,
    ContentMismatch,
    TooLarge,
    Stream(String),
}

impl UploadError {
    pub fn into_response(self) -> HttpResponse {
        let (code, message) = match self {
            UploadError::Missing => (
                ErrorCode::FileNotFound,
                "No file found in upload payload".to_string(),
            ),
            UploadError::Multiple => (
                ErrorCode::MultifileUploadNotAllowed,
                "Only one file can be uploaded at a time".to_string(),
            ),
            UploadError::TypeNotAllowed => {
                (ErrorCode::FileTypeNotAllowed, "File type not allowed".to_string())
            }
            UploadError::ContentMismatch => (
                ErrorCode::FileTypeNotAllowed,
                "File content does not match its extension".to_string(),
            ),
            UploadError::TooLarge => {
                return HttpResponse::PayloadTooLarge().json(ApiResponse::error_empty(
                    ErrorCode::FileSizeExceeded,
                    "File size exceeds the limit",
                ));
            }
            UploadError::Stream(e) => (ErrorCode::FileUploadFailed, format!("Upload failed: {e}")),
        };
        HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
    }
}

/// 读取上传文件到内存，同时校验扩展名、大小与魔术字节
pub async fn read_single_file(
    mut payload: Multipart,
    allowed_types: &[String],
    max_size: usize,
) -> Result<UploadedFile, UploadError> {
    let mut uploaded: Option<UploadedFile> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| UploadError::Stream(e.to_string()))?
    {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        if name != "file" {
            continue;
        }
        if uploaded.is_some() {
            return Err(UploadError::Multiple);
        }

        let original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();
        let extension = file_extension(&original_name).unwrap_or_default();
        if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
            return Err(UploadError::TypeNotAllowed);
        }

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| UploadError::Stream(e.to_string()))?;
            if data.len() + chunk.len() > max_size {
                return Err(UploadError::TooLarge);
            }
            data.extend_from_slice(&chunk);
        }

        if !validate_magic_bytes(&data, &extension) {
            return Err(UploadError::ContentMismatch);
        }

        uploaded = Some(UploadedFile {
            original_name,
            extension,
            data,
        });
    }

    uploaded.ok_or(UploadError::Missing)
}
