//! # Domain Layer Module
//!
//! 회원가입 흐름의 도메인 타입을 정의합니다.
//! 이 계층은 HTTP 프레임워크나 MongoDB 드라이버에 의존하지 않습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속화된 계정 (Account)
//! ├── models    - 유스케이스 입력 (AccountCreationData)
//! ├── dto       - 전송 계층 요청 (SignupRequest)
//! └── errors    - 분류된 실패 (DomainError)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! SignupRequest ──(passwordConfirmation 제거)──▶ AccountCreationData
//!        │                                              │
//!   Controller                                    CreateAccount
//!                                                       │
//!                                                       ▼
//!                                            Account { id, ... }
//! ```

pub mod dto;
pub mod entities;
pub mod errors;
pub mod models;
