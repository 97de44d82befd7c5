//! 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 회원가입 컨트롤러를 조립합니다.
//! MongoDB 연결을 설정하고 `POST /api/v1/signup` REST API를 제공합니다.

use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info};
use signup_service::config::{env_file_for_profile, DatabaseConfig, RateLimitConfig, ServerConfig};
use signup_service::controllers::protocols::Controller;
use signup_service::core::registry::ServiceLocator;
use signup_service::db::Database;
use signup_service::factories::make_signup_controller;
use signup_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    // .env 파일이 RUST_LOG를 설정할 수 있으므로 로거보다 먼저 읽고, 결과는 초기화 후 기록
    let (env_file, loaded) = load_env_file();
    init_logging();

    match loaded {
        Ok(_) => info!("{} 파일 로드 됨", env_file),
        Err(e) => error!("{} 파일 로드 실패: {}", env_file, e),
    }

    info!("🚀 회원가입 서비스 시작중...");

    // 데이터 스토어 초기화
    let database = initialize_database().await;
    ServiceLocator::set(database);

    let controller = make_signup_controller().expect("회원가입 컨트롤러 조립 실패");

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(web::Data::from(controller)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(controller: web::Data<dyn Controller>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Signup: POST http://{}/api/v1/signup", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .expect("Rate Limiting 설정 실패");

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(controller.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거가 아직 없으므로 로드한 파일 이름과 결과를 돌려주기만 합니다.
fn load_env_file() -> (&'static str, dotenv::Result<PathBuf>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let env_file = env_file_for_profile(&profile);

    (env_file, dotenv::from_filename(env_file))
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=signup_service::controllers=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    let config = DatabaseConfig::from_env();

    Arc::new(
        Database::new(&config)
            .await
            .expect("데이터베이스 연결 실패")
    )
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
