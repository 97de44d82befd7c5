//! API 라우트 설정 모듈
//!
//! 헬스체크와 회원가입 엔드포인트를 등록합니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/api/v1/signup` | [`handlers::signup::signup`] |
//!
//! 회원가입 핸들러는 `web::Data<dyn Controller>`가 앱 데이터로 등록되어 있어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let controller = factories::make_signup_controller()?;
//! let app = App::new()
//!     .app_data(web::Data::from(controller))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_signup_routes(cfg);
}

/// 회원가입 라우트를 설정합니다
///
/// - `POST /api/v1/signup` - 계정 생성 (인증 불필요)
///
/// 잘못된 JSON 본문은 [`json_config`](handlers::signup::json_config)에 의해 400으로 응답됩니다.
fn configure_signup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(handlers::signup::json_config())
            .service(handlers::signup::signup)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "signup_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "features": {
///     "database": "MongoDB",
///     "password_hashing": "bcrypt"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "password_hashing": "bcrypt"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;
    use crate::controllers::protocols::{Controller, HttpResponse, MockController};
    use crate::domain::errors::DomainError;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "signup_service");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_signup_route_is_mounted_under_api_v1() {
        let mut controller = MockController::new();
        controller
            .expect_handle()
            .times(1)
            .returning(|_| HttpResponse::from_error(DomainError::missing_param("name")));
        let controller: Arc<dyn Controller> = Arc::new(controller);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(controller))
                .configure(configure_all_routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
