//! Accounts Entity Module
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::accounts::Account;
//!
//! let account = repository.add(data).await?;
//! assert!(account.is_persisted());
//! ```

pub mod account;

pub use account::Account;
