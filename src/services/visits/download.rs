use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult, http::header};

use super::{VisitService, picture_path};
use crate::errors::CoopError;
use crate::models::ErrorCode;
use crate::services::not_found_response;

pub async fn handle_download(
    service: &VisitService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let picture = match storage.get_visits_picture(id).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            return Ok(not_found_response(
                ErrorCode::FileNotFound,
                "Visits picture not found",
            ));
        }
        Err(e) => return Ok(e.error_response()),
    };

    let path = picture_path(&picture.file_name);
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(not_found_response(
                ErrorCode::FileNotFound,
                "Picture file is missing on disk",
            ));
        }
        Err(e) => return Ok(CoopError::file_operation(format!("{e}")).error_response()),
    };

    Ok(HttpResponse::Ok()
        .content_type(picture.file_type.clone())
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!(
                "inline; filename=\"{}\"",
                picture.original_name.replace('"', "")
            ),
        ))
        .body(data))
}
