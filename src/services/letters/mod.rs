//! 公函：静态公函与按选课生成的请求函、派遣函

pub mod render;
pub mod templates;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult, http::header};
use tracing::info;

use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::letters::{LetterKind, LetterLanguage, LetterRequest};
use crate::services::{bad_request, not_found_response};

super::define_service!(LetterService);

fn pdf_response(bytes: Vec<u8>, file_name: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{file_name}\""),
        ))
        .body(bytes)
}

pub(crate) fn letter_file_name(kind: LetterKind, lang: LetterLanguage, student_code: &str) -> String {
    let code: String = student_code
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    format!("{}_{}_{}.pdf", kind.slug(), lang.code(), code)
}

impl LetterService {
    pub async fn static_letter(&self, _request: &HttpRequest) -> ActixResult<HttpResponse> {
        let html = templates::static_letter(&AppConfig::get().letters);
        match render::render_pdf(&html).await {
            Ok(bytes) => Ok(pdf_response(bytes, "letter.pdf")),
            Err(e) => Ok(e.error_response()),
        }
    }

    pub async fn enrollment_letter(
        &self,
        student_enroll_id: i64,
        kind: LetterKind,
        lang: LetterLanguage,
        req: LetterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if req.doc_no.trim().is_empty() {
            return Ok(bad_request(ErrorCode::ValidationFailed, "doc_no is required"));
        }

        let storage = self.get_storage(request);
        let ctx = match storage.get_letter_context(student_enroll_id).await {
            Ok(Some(ctx)) => ctx,
            Ok(None) => {
                return Ok(not_found_response(
                    ErrorCode::StudentEnrollNotFound,
                    "Student enrollment not found",
                ));
            }
            Err(e) => return Ok(e.error_response()),
        };

        let html = templates::enrollment_letter(kind, lang, &ctx, &req, &AppConfig::get().letters);
        match render::render_pdf(&html).await {
            Ok(bytes) => {
                info!(
                    "Rendered {} letter ({}) for enrollment {}",
                    kind.slug(),
                    lang.code(),
                    student_enroll_id
                );
                Ok(pdf_response(
                    bytes,
                    &letter_file_name(kind, lang, &ctx.student.student_code),
                ))
            }
            Err(e) => Ok(e.error_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_file_name() {
        assert_eq!(
            letter_file_name(LetterKind::Refer, LetterLanguage::En, "6401001"),
            "refer_en_6401001.pdf"
        );
        assert_eq!(
            letter_file_name(LetterKind::RequestCooperation, LetterLanguage::Th, "64/01\"x"),
            "request-cooperation_th_6401x.pdf"
        );
    }
}
