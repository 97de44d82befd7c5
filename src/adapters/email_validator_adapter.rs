//! `validator` 크레이트 기반 [`EmailValidator`] 구현

use async_trait::async_trait;
use validator::ValidateEmail;
use crate::controllers::protocols::EmailValidator;
use crate::core::errors::AppResult;

/// HTML5 / RFC 5322 기반 이메일 형식 검증기
///
/// 형식만 확인하며 도메인의 실제 존재 여부(MX 조회 등)는 확인하지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailValidator for EmailValidatorAdapter {
    async fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_accepts_valid_email() {
        let adapter = EmailValidatorAdapter::new();

        assert!(adapter.is_valid("valid_email@mail.com").await.unwrap());
        assert!(adapter.is_valid("alice.smith+tag@example.co.kr").await.unwrap());
    }

    #[actix_web::test]
    async fn test_rejects_invalid_email() {
        let adapter = EmailValidatorAdapter::new();

        assert!(!adapter.is_valid("invalid_email").await.unwrap());
        assert!(!adapter.is_valid("alice@").await.unwrap());
        assert!(!adapter.is_valid("@example.com").await.unwrap());
        assert!(!adapter.is_valid("").await.unwrap());
    }
}
