//! 巡访照片：上传、列表、下载与删除

pub mod download;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::trainings::requests::UpdateVisitsPictureRequest;
use crate::models::trainings::responses::VisitsPictureResponse;
use crate::models::{ErrorCode, IndexQuery};
use crate::services::{not_found_response, respond, respond_found};

super::define_service!(VisitService);

impl VisitService {
    pub async fn index(&self, query: IndexQuery, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match query.id {
            Some(id) => respond_found(
                storage
                    .get_visits_picture(id)
                    .await
                    .map(|p| p.map(VisitsPictureResponse::from)),
                ErrorCode::FileNotFound,
                "Visits picture not found",
                "Visits picture retrieved successfully",
            ),
            None => respond(
                storage
                    .list_visits_pictures()
                    .await
                    .map(collect_responses),
                "Visits pictures retrieved successfully",
            ),
        }
    }

    // 某次巡访的全部照片
    pub async fn schedule_pictures(
        &self,
        visitor_schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        respond(
            storage
                .list_schedule_pictures(visitor_schedule_id)
                .await
                .map(collect_responses),
            "Visits pictures retrieved successfully",
        )
    }

    pub async fn upload(
        &self,
        visitor_schedule_id: i64,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, visitor_schedule_id, payload, request).await
    }

    pub async fn download(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        download::handle_download(self, id, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        req: UpdateVisitsPictureRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        respond_found(
            storage
                .update_visits_picture(id, req)
                .await
                .map(|p| p.map(VisitsPictureResponse::from)),
            ErrorCode::FileNotFound,
            "Visits picture not found",
            "Visits picture updated successfully",
        )
    }

    // 先删记录再删文件，文件删除失败只记录日志
    pub async fn destroy(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match storage.delete_visits_picture(id).await {
            Ok(Some(picture)) => {
                let path = picture_path(&picture.file_name);
                if let Err(e) = tokio::fs::remove_file(&path).await {
                    tracing::warn!("Failed to remove picture file {}: {e}", path.display());
                }
                Ok(HttpResponse::Ok().json(crate::models::ApiResponse::success_empty(
                    "Visits picture deleted successfully",
                )))
            }
            Ok(None) => Ok(not_found_response(
                ErrorCode::FileNotFound,
                "Visits picture not found",
            )),
            Err(e) => Ok(e.error_response()),
        }
    }
}

fn collect_responses(
    pictures: Vec<crate::models::trainings::entities::VisitsPicture>,
) -> Vec<VisitsPictureResponse> {
    pictures.into_iter().map(Into::into).collect()
}

pub(crate) fn picture_path(file_name: &str) -> std::path::PathBuf {
    std::path::Path::new(&AppConfig::get().upload.dir).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_path_joins_upload_dir() {
        let path = picture_path("1700000000-abc.png");
        assert!(path.ends_with("1700000000-abc.png"));
        assert!(path.starts_with(&AppConfig::get().upload.dir));
    }
}
