//! bcrypt 기반 [`Encrypter`] 구현

use actix_web::web;
use async_trait::async_trait;
use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};
use crate::services::accounts::protocols::Encrypter;

/// bcrypt 암호화기
///
/// 해싱은 CPU 집약적이므로 블로킹 스레드 풀에서 실행하여
/// 워커 스레드의 이벤트 루프를 막지 않습니다.
///
/// ## 보안 특징
///
/// - **솔트 자동 생성**: 같은 평문도 호출마다 다른 해시가 생성됨
/// - **환경별 Cost**: 개발(4) vs 운영(12) ([`PasswordConfig`] 참고)
#[derive(Debug, Clone)]
pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경의 bcrypt cost로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

#[async_trait]
impl Encrypter for BcryptAdapter {
    async fn encrypt(&self, value: &str) -> AppResult<String> {
        let value = value.to_owned();
        let cost = self.cost;

        web::block(move || bcrypt::hash(value, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[actix_web::test]
    async fn test_hash_verifies_against_plaintext() {
        let adapter = BcryptAdapter::new(PasswordConfig::MIN_COST);
        let hash = adapter.encrypt("any_value").await.unwrap();

        assert_ne!(hash, "any_value");
        assert!(bcrypt::verify("any_value", &hash).unwrap());
        assert!(!bcrypt::verify("other_value", &hash).unwrap());
    }

    #[actix_web::test]
    async fn test_same_plaintext_gets_different_salt() {
        let adapter = BcryptAdapter::new(PasswordConfig::MIN_COST);

        let first = adapter.encrypt("any_value").await.unwrap();
        let second = adapter.encrypt("any_value").await.unwrap();

        assert_ne!(first, second);
    }

    #[actix_web::test]
    async fn test_invalid_cost_is_internal_error() {
        let adapter = BcryptAdapter::new(2);
        let result = adapter.encrypt("any_value").await;

        match result {
            Err(AppError::InternalError(msg)) => assert!(msg.starts_with("비밀번호 해싱 실패")),
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
