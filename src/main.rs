//! Bubbles 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 환경 변수에서 설정을 읽고 MongoDB에 연결한 뒤 장소/리뷰/사진 REST API를 제공합니다.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{debug, error, info, warn};
use bubbles_backend::config::{Environment, RateLimitConfig, ServerConfig, Settings};
use bubbles_backend::db::{MongoStorage, Storage};
use bubbles_backend::routes::{configure_all_routes, json_config};
use bubbles_backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let profile = std::env::var("PROFILE").ok();
    let loaded = load_env_file(Path::new("."), profile.as_deref());
    init_logging();

    match loaded {
        Ok(path) => info!("{} 파일 로드 됨 (profile: {:?})", path.display(), profile),
        Err(e) => warn!("env 파일 로드 실패 (profile: {:?}): {}", profile, e),
    }

    info!("🚀 Bubbles 백엔드 시작중...");

    let settings = Settings::from_env();
    debug!("설정 로드됨: {:?}", settings);

    // 데이터 스토어 초기화
    info!("📡 데이터베이스 연결 중...");
    let storage = MongoStorage::connect(&settings.database)
        .await
        .map_err(|e| {
            error!("데이터베이스 연결 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    let state = AppState::new(Arc::new(storage) as Arc<dyn Storage>);
    state.init().await.map_err(|e| {
        error!("인덱스 초기화 실패: {}", e);
        std::io::Error::other(e)
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(settings, state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(settings: Settings, state: AppState) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let settings = web::Data::new(settings);
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(json_config())
            .app_data(settings.clone())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - `.env.dev` 파일 로드
/// * `PROFILE=prod` - `.env.prod` 파일 로드
/// * 그 외 또는 미설정 - 기본 `.env` 파일 로드
///
/// 프로필 파일이 없으면 기본 `.env`로 대체합니다.
/// 로깅 초기화 전에 호출되므로 결과는 호출한 쪽에서 기록합니다.
fn load_env_file(dir: &Path, profile: Option<&str>) -> Result<PathBuf, dotenv::Error> {
    let profiled = match profile {
        Some("prod") => Some(".env.prod"),
        Some("dev") => Some(".env.dev"),
        _ => None,
    };

    if let Some(file) = profiled {
        let path = dir.join(file);
        if dotenv::from_path(&path).is_ok() {
            return Ok(path);
        }
    }

    let path = dir.join(".env");
    dotenv::from_path(&path)?;
    Ok(path)
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`에 맞는 기본 필터를 사용합니다.
///
/// ```bash
/// # 특정 모듈만 debug
/// RUST_LOG=bubbles_backend::services=debug cargo run
/// ```
fn init_logging() {
    let filter = Environment::current().default_log_filter();
    env_logger::init_from_env(Env::default().default_filter_or(filter));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
