//! # 회원가입 요청 DTO 모듈
//!
//! ## 요청 본문
//!
//! ```json
//! {
//!   "name": "Alice",
//!   "email": "alice@example.com",
//!   "password": "secret",
//!   "passwordConfirmation": "secret"
//! }
//! ```
//!
//! ## 검증 계층
//!
//! 1. **필수 필드**: [`RequiredFieldsValidation`](crate::validation::RequiredFieldsValidation)이
//!    [`SIGNUP_REQUIRED_FIELDS`] 순서대로 누락 여부 확인
//! 2. **타입**: [`SignupRequest::from_body`]가 문자열이 아닌 값을 거부
//! 3. **비즈니스**: 컨트롤러가 비밀번호 일치, 이메일 형식 확인

pub mod request;

pub use request::{SignupRequest, SIGNUP_REQUIRED_FIELDS};
