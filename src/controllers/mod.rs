//! # 프레젠테이션 계층
//!
//! 전송 계층 중립적인 컨트롤러들입니다. 요청 본문은 타입 없는 JSON으로 받고,
//! 응답은 항상 [`HttpResponse`](protocols::HttpResponse) 값으로 반환합니다.
//! Actix 요청/응답과의 변환은 [`handlers`](crate::handlers)가 담당합니다.
//!
//! # Modules
//!
//! - [`protocols`] - 컨트롤러가 의존하는 trait과 요청/응답 타입
//! - [`signup`] - 회원가입 컨트롤러
//! - [`log_decorator`] - 500 응답 원인 로깅 데코레이터

pub mod log_decorator;
pub mod protocols;
pub mod signup;

pub use log_decorator::LogControllerDecorator;
pub use signup::SignupController;
