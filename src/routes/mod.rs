//! API 라우트 설정 모듈
//!
//! 리소스별 엔드포인트를 `/api/v1` 아래에 그룹화하고 헬스체크를 등록합니다.
//!
//! ```text
//! /health
//! /api/v1/places          GET, POST
//! /api/v1/places/{id}     GET, PUT, DELETE
//! /api/v1/places/{id}/reviews, /api/v1/places/{id}/images   GET
//! /api/v1/reviews         POST   /api/v1/reviews/{id}       GET, PUT, DELETE
//! /api/v1/place-images    POST   /api/v1/place-images/{id}  GET, PUT, DELETE
//! /api/v1/users/{id}      GET
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(routes::json_config())
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;
use crate::config::Settings;
use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_place_routes(cfg);
    configure_review_routes(cfg);
    configure_place_image_routes(cfg);
    configure_user_routes(cfg);
}

/// JSON 본문 추출 설정
///
/// 본문이 올바른 JSON이 아니면 `{"error": ...}` 형태의 400 응답으로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn configure_place_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/places")
            .service(handlers::places::list_places)
            .service(handlers::places::create_place)
            .service(handlers::places::get_place)
            .service(handlers::places::update_place)
            .service(handlers::places::delete_place)
            .service(handlers::places::list_place_reviews)
            .service(handlers::places::list_place_images)
    );
}

fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reviews")
            .service(handlers::reviews::create_review)
            .service(handlers::reviews::get_review)
            .service(handlers::reviews::update_review)
            .service(handlers::reviews::delete_review)
    );
}

fn configure_place_image_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/place-images")
            .service(handlers::place_images::create_place_image)
            .service(handlers::place_images::get_place_image)
            .service(handlers::place_images::update_place_image)
            .service(handlers::place_images::delete_place_image)
    );
}

/// 사용자 라우트 (읽기 전용, 가입은 외부 인증 서비스 담당)
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::get_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 외부 연동(인증 비밀키, SMTP, S3)은 설정값이 모두 있는지만 보고하며,
/// 실제 연결은 확인하지 않습니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "bubbles_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": { "database": "MongoDB" },
///   "integrations": { "auth": true, "smtp": false, "s3": false }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(settings: web::Data<Settings>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "bubbles_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        },
        "integrations": {
            "auth": settings.auth.is_configured(),
            "smtp": settings.smtp.is_configured(),
            "s3": settings.s3.is_configured()
        }
    }))
}
