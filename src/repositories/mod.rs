//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 유스케이스가 선언한 저장소 trait을 MongoDB로 구현합니다.
//! 리포지토리는 [`Database`](crate::db::Database)를 생성자로 주입받으며
//! 연결의 생명주기는 관리하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::MongoAccountRepository;
//!
//! let repo = MongoAccountRepository::new(database);
//! let account = repo.add(data).await?;
//! ```

pub mod accounts;
