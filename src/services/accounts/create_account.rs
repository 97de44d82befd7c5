//! # 계정 생성 유스케이스
//!
//! 비밀번호를 해싱하고 계정을 저장하는 단일 비즈니스 연산입니다.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │            CreateAccountService           │
//! │                                           │
//! │  1. encrypter.encrypt(password)           │
//! │  2. repository.add({ name, email, hash }) │
//! │  3. Account { id, name, email, hash }     │
//! └───────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//!     Encrypter          AddAccountRepository
//!   (BcryptAdapter)    (MongoAccountRepository)
//! ```
//!
//! ## 실패 정책
//!
//! 암호화기나 저장소의 에러는 변환 없이 그대로 호출자에게 전파됩니다.
//! 재시도나 부분 상태 정리는 하지 않습니다. 해싱이 실패하면 저장소는 호출되지 않습니다.
//!
//! ## 멱등성
//!
//! 호출마다 정확히 한 번 저장소에 기록합니다. 같은 입력으로 두 번 호출하면
//! 계정이 두 개 생성됩니다 (중복 방지는 저장소의 제약 조건 몫).

use std::sync::Arc;
use std::time::Instant;
use async_trait::async_trait;
use log::info;
use crate::core::errors::AppResult;
use crate::domain::entities::accounts::Account;
use crate::domain::models::AccountCreationData;
use super::protocols::{AddAccountRepository, Encrypter};

/// 계정 생성 유스케이스 계약
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateAccount: Send + Sync {
    async fn execute(&self, data: AccountCreationData) -> AppResult<Account>;
}

/// 암호화기와 저장소를 조합한 계정 생성 서비스
///
/// 요청 간 공유되는 가변 상태가 없으므로 여러 요청에서 동시에 사용해도 안전합니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// let service = CreateAccountService::new(
///     Arc::new(BcryptAdapter::from_env()),
///     Arc::new(MongoAccountRepository::new(database)),
/// );
///
/// let account = service
///     .execute(AccountCreationData::new("Alice", "alice@example.com", "secret"))
///     .await?;
/// ```
pub struct CreateAccountService {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
}

impl CreateAccountService {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self { encrypter, repository }
    }
}

#[async_trait]
impl CreateAccount for CreateAccountService {
    async fn execute(&self, data: AccountCreationData) -> AppResult<Account> {
        let start_time = Instant::now();

        let hash_start = Instant::now();
        let hashed_password = self.encrypter.encrypt(&data.password).await?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        let account = self
            .repository
            .add(data.with_password(hashed_password))
            .await?;

        info!("Total account creation took: {:?}", start_time.elapsed());

        Ok(account)
    }
}
