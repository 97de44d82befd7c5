//! 요청 본문 검증기 구현
//!
//! [`Validation`](crate::controllers::protocols::Validation) trait의 구현체들입니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::signup::SIGNUP_REQUIRED_FIELDS;
//! use crate::validation::RequiredFieldsValidation;
//!
//! let validation = RequiredFieldsValidation::new(SIGNUP_REQUIRED_FIELDS);
//! assert!(validation.validate(&body).is_none());
//! ```

pub mod required_fields;

pub use required_fields::RequiredFieldsValidation;
