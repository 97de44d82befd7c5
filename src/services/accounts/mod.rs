//! 계정 관리 유스케이스 모듈
//!
//! # Features
//!
//! - 계정 생성 (비밀번호 해싱 + 저장)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::accounts::{CreateAccount, CreateAccountService};
//!
//! let service = CreateAccountService::new(encrypter, repository);
//! let account = service.execute(data).await?;
//! ```

pub mod create_account;
pub mod protocols;

pub use create_account::{CreateAccount, CreateAccountService};
pub use protocols::{AddAccountRepository, Encrypter};

#[cfg(test)]
pub use create_account::MockCreateAccount;
