//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 인프라/협력 객체 실패를 표현하는 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 라이브러리 에러에 문맥을 붙이는 확장 trait
//!
//! ### [`registry`] - 인스턴스 컨테이너
//! - **ServiceLocator**: `main`에서 만든 인프라 컴포넌트를 보관
//! - 팩토리 계층이 컨트롤러를 조립할 때만 조회
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! let database = Arc::new(Database::new(&DatabaseConfig::from_env()).await?);
//! ServiceLocator::set(database);
//!
//! let controller = factories::make_signup_controller()?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
