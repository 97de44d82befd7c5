//! 도메인 에러
//!
//! 회원가입 흐름에서 클라이언트에게 전달되는 분류된 실패입니다.
//! HTTP 상태 코드와는 독립적인 개념이며, 상태 코드로의 매핑은
//! [`HttpResponse`](crate::controllers::protocols::HttpResponse)가 담당합니다.
//!
//! | 변형 | 의미 | 응답 |
//! |------|------|------|
//! | `MissingParam(field)` | 필수 필드 누락 | 400 |
//! | `InvalidParam(field)` | 값은 있으나 의미상 잘못됨 | 400 |
//! | `ServerError(cause)` | 하위 협력 객체의 예상치 못한 실패 | 500 |
//!
//! ## 직렬화 형식
//!
//! ```json
//! { "name": "MissingParamError", "message": "Missing param: email" }
//! ```
//!
//! `ServerError`의 원인(cause)은 서버 로그에만 남기고 응답 본문에는 포함하지 않습니다.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 필수 필드 누락
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 필드 값이 유효하지 않음 (이메일 형식, 비밀번호 불일치 등)
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// 하위 협력 객체 실패
    #[error("Internal server error")]
    ServerError(String),
}

impl DomainError {
    pub fn missing_param(field: &str) -> Self {
        DomainError::MissingParam(field.to_string())
    }

    pub fn invalid_param(field: &str) -> Self {
        DomainError::InvalidParam(field.to_string())
    }

    /// 협력 객체의 에러를 원인 문자열로 보존합니다.
    pub fn server_error(cause: impl std::fmt::Display) -> Self {
        DomainError::ServerError(cause.to_string())
    }

    /// 응답 본문의 `name` 필드 값
    pub fn name(&self) -> &'static str {
        match self {
            DomainError::MissingParam(_) => "MissingParamError",
            DomainError::InvalidParam(_) => "InvalidParamError",
            DomainError::ServerError(_) => "ServerError",
        }
    }

    /// 클라이언트 입력 문제로 인한 에러인지 확인
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::ServerError(_))
    }

    /// `ServerError`의 원인, 다른 변형이면 `None`
    pub fn cause(&self) -> Option<&str> {
        match self {
            DomainError::ServerError(cause) => Some(cause),
            _ => None,
        }
    }
}

impl Serialize for DomainError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DomainError", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
