//! 계정 생성 유스케이스가 의존하는 외부 협력 객체 인터페이스

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::accounts::Account;
use crate::domain::models::AccountCreationData;

/// 단방향 해시 함수
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Encrypter: Send + Sync {
    /// 평문을 해시 문자열로 변환합니다.
    async fn encrypt(&self, value: &str) -> AppResult<String>;
}

/// 계정 저장소
///
/// 저장은 저장소 경계에서 원자적이라고 가정합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// 계정을 저장하고, 저장소가 할당한 id를 포함한 계정을 반환합니다.
    async fn add(&self, data: AccountCreationData) -> AppResult<Account>;
}
