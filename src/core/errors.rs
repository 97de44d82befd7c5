//! # Application Error Handling System
//!
//! 인프라 계층(데이터베이스, 해싱, 외부 검증기)에서 발생하는 에러를 표현하는
//! 통합 에러 타입입니다. 도메인 수준의 검증 실패는
//! [`DomainError`](crate::domain::errors::DomainError)가 담당하고,
//! 이 모듈의 [`AppError`]는 협력 객체가 "예상하지 못한 실패"를 알릴 때 사용됩니다.
//!
//! ## 계층별 역할
//!
//! | 계층 | 에러 타입 | 비고 |
//! |------|-----------|------|
//! | Repository / Adapter | `AppError` | 드라이버, bcrypt 등의 에러를 문자열로 보존 |
//! | Use-case | `AppError` | 변환 없이 그대로 전파 |
//! | Controller | `DomainError` | `AppError`를 `ServerError`로 변환 |
//! | Actix handler | `AppError` | JSON 파싱 실패 등 컨트롤러 이전 단계의 에러 |
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let result = collection.insert_one(&document).await
//!     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 협력 객체(리포지토리, 암호화기, 이메일 검증기)의 실패와
/// HTTP 어댑터 단계의 실패를 표현합니다.
/// `actix_web::ResponseError`를 구현하여 핸들러에서 바로 반환할 수 있습니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.insert_one(&doc).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // bcrypt 에러 변환
/// bcrypt::hash(value, cost)
///     .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 연결 타임아웃
    /// - 삽입 실패
    /// - 삽입 결과에 ObjectId가 없는 경우
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 컨트롤러에 도달하기 전 단계(JSON 파싱 등)에서 발생한 검증 실패입니다.
    /// 400 Bad Request로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 서버 에러
    ///
    /// 해싱 실패, 서비스 로케이터 미등록 등 예상하지 못한 오류입니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음과 같은 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// async fn add(&self, data: AccountCreationData) -> AppResult<Account> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let options = ClientOptions::parse(&uri).await
///     .context("MongoDB URI 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Invalid JSON body".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Service not found: Database".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        match app_result {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.contains("Additional context"));
                assert!(msg.contains("original error"));
            }
            _ => panic!("Expected InternalError"),
        }
    }
}
