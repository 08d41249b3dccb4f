//! 接口测试用的内存数据库与登录用户

use std::sync::Arc;

use actix_web::web;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

use crate::cache::ObjectCache;
use crate::cache::object_cache::moka::MokaCacheWrapper;
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;
use crate::utils::password::hash_password;

pub(crate) const TEST_PASSWORD: &str = "Coop2025pass";

pub(crate) async fn memory_storage() -> Arc<dyn Storage> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(SeaOrmStorage::from_connection(db))
}

pub(crate) fn storage_data(storage: &Arc<dyn Storage>) -> web::Data<Arc<dyn Storage>> {
    web::Data::new(storage.clone())
}

pub(crate) fn cache_data() -> web::Data<Arc<dyn ObjectCache>> {
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_capacity(1_000, 60));
    web::Data::new(cache)
}

/// 创建用户并签发 access token
pub(crate) async fn login_as(
    storage: &Arc<dyn Storage>,
    username: &str,
    role: UserRole,
) -> (User, String) {
    let user = storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.ac.th"),
            password: hash_password(TEST_PASSWORD).unwrap(),
            role,
            display_name: None,
        })
        .await
        .unwrap();
    let pair = user.generate_token_pair(false).unwrap();
    (user, format!("Bearer {}", pair.access_token))
}
