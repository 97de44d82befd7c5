//! # Signup HTTP Handler
//!
//! Actix 요청을 [`HttpRequest`]로 변환해 컨트롤러에 넘기고,
//! 컨트롤러의 [`HttpResponse`]를 같은 상태 코드와 JSON 본문의 Actix 응답으로 돌려줍니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/signup` | 계정 생성 | 200 / 400 / 500 |
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/signup \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"Alice","email":"alice@example.com","password":"secret","passwordConfirmation":"secret"}'
//! ```
//!
//! JSON으로 파싱할 수 없는 본문은 컨트롤러에 도달하지 않고
//! [`json_config`]의 에러 핸들러에서 `400 {"error": ...}`로 응답됩니다.

use actix_web::{http::StatusCode, post, web};
use serde_json::Value;
use crate::controllers::protocols::{Controller, HttpRequest, HttpResponse};
use crate::core::errors::AppError;

#[post("/signup")]
pub async fn signup(
    controller: web::Data<dyn Controller>,
    payload: web::Json<Value>,
) -> Result<actix_web::HttpResponse, AppError> {
    let response = controller
        .handle(HttpRequest::new(payload.into_inner()))
        .await;

    to_actix_response(response)
}

/// 본문 파싱 실패를 `AppError::ValidationError`로 변환하는 JSON 추출기 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 JSON 요청: {}", err)).into()
    })
}

fn to_actix_response(response: HttpResponse) -> Result<actix_web::HttpResponse, AppError> {
    let status = StatusCode::from_u16(response.status_code())
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(actix_web::HttpResponse::build(status).json(response.into_body()))
}
