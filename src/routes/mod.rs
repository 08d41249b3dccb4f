//! HTTP 路由
//!
//! 每个模块提供 `configure_*_routes`，处理函数只解析参数并转交对应的服务。

/// 标准资源路由：
///
/// - `GET    ""`      列表，带 `?id=` 时返回含关联数据的详情
/// - `POST   ""`      创建
/// - `PUT|PATCH /{id}` 更新
/// - `DELETE /{id}`   删除
///
/// 返回的 scope 已经套上 RequireJWT，调用方可以继续追加子资源。
macro_rules! resource_scope {
    (
        $path:literal,
        read: $read_roles:expr,
        write: $write_roles:expr,
        index: $index:path,
        store: $store:path,
        update: $update:path,
        destroy: $destroy:path $(,)?
    ) => {
        actix_web::web::scope($path)
            .wrap($crate::middlewares::RequireJWT)
            .service(
                actix_web::web::resource("")
                    .route(
                        actix_web::web::get()
                            .to($index)
                            .wrap($crate::middlewares::RequireRole::new_any($read_roles)),
                    )
                    .route(
                        actix_web::web::post()
                            .to($store)
                            .wrap($crate::middlewares::RequireRole::new_any($write_roles)),
                    ),
            )
            .service(
                actix_web::web::resource("/{id}")
                    .route(
                        actix_web::web::put()
                            .to($update)
                            .wrap($crate::middlewares::RequireRole::new_any($write_roles)),
                    )
                    .route(
                        actix_web::web::patch()
                            .to($update)
                            .wrap($crate::middlewares::RequireRole::new_any($write_roles)),
                    )
                    .route(
                        actix_web::web::delete()
                            .to($destroy)
                            .wrap($crate::middlewares::RequireRole::new_any($write_roles)),
                    ),
            )
    };
}

pub mod auth;
pub mod companies;
pub mod courses;
pub mod enroll_statuses;
pub mod enrollments;
pub mod evaluations;
pub mod excel;
pub mod health;
pub mod letters;
pub mod organization;
pub mod people;
pub mod trainings;
pub mod users;
pub mod visits;

pub use auth::configure_auth_routes;
pub use companies::configure_company_routes;
pub use courses::configure_course_routes;
pub use enroll_statuses::configure_enroll_status_routes;
pub use enrollments::configure_enrollment_routes;
pub use evaluations::configure_evaluation_routes;
pub use excel::configure_excel_routes;
pub use health::configure_health_routes;
pub use letters::configure_letter_routes;
pub use organization::configure_organization_routes;
pub use people::configure_people_routes;
pub use trainings::configure_training_routes;
pub use users::configure_user_routes;
pub use visits::configure_visit_routes;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_health_routes)
        .configure(configure_organization_routes)
        .configure(configure_user_routes)
        .configure(configure_people_routes)
        .configure(configure_company_routes)
        .configure(configure_course_routes)
        .configure(configure_enrollment_routes)
        .configure(configure_enroll_status_routes)
        .configure(configure_training_routes)
        .configure(configure_visit_routes)
        .configure(configure_evaluation_routes)
        .configure(configure_letter_routes)
        .configure(configure_excel_routes);
}

#[cfg(test)]
mod tests;
