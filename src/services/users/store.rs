use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, ResponseError};

use super::UserService;
use crate::models::{ErrorCode, users::requests::CreateUserRequest};
use crate::services::{bad_request, respond_created};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_username};

pub async fn handle_store(
    service: &UserService,
    mut req: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    req.username = req.username.trim().to_string();
    req.email = req.email.trim().to_string();

    if let Err(msg) = validate_username(&req.username) {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }
    if let Err(msg) = validate_email(&req.email) {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }
    if let Err(msg) = validate_password(&req.password) {
        return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
    }

    req.password = match hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(e.error_response()),
    };

    let storage = service.get_storage(request);
    respond_created(storage.create_user(req).await, "User created successfully")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::services::test_support::{TEST_PASSWORD, memory_storage, storage_data};
    use actix_web::{body::to_bytes, http::StatusCode, test};

    fn request_for(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.ac.th"),
            password: password.to_string(),
            role: UserRole::Staff,
            display_name: None,
        }
    }

    #[actix_web::test]
    async fn test_store_hashes_password() {
        let storage = memory_storage().await;
        let request = test::TestRequest::default()
            .app_data(storage_data(&storage))
            .to_http_request();
        let service = UserService::new_lazy();

        let resp = service
            .store(request_for("somsri", TEST_PASSWORD), &request)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["data"].get("password_hash").is_none());

        let user = storage
            .get_user_by_username_or_email("somsri")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(user.password_hash, TEST_PASSWORD);
    }

    #[actix_web::test]
    async fn test_store_rejects_weak_password_and_duplicate() {
        let storage = memory_storage().await;
        let request = test::TestRequest::default()
            .app_data(storage_data(&storage))
            .to_http_request();
        let service = UserService::with_storage(storage.clone());

        let resp = service
            .store(request_for("weakling", "123"), &request)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        service
            .store(request_for("duplicate", TEST_PASSWORD), &request)
            .await
            .unwrap();
        let resp = service
            .store(request_for("duplicate", TEST_PASSWORD), &request)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
