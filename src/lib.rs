//! 회원가입 서비스 백엔드
//!
//! 클린 아키텍처 방식으로 구성된 계정 생성 서비스입니다.
//! 컨트롤러는 좁은 trait에만 의존하고, 구체 구현체(bcrypt, validator, MongoDB)는
//! [`factories`]에서 조립됩니다.
//!
//! # Features
//!
//! - **회원가입**: 필수 필드, 비밀번호 확인, 이메일 형식 검증 후 계정 생성
//! - **bcrypt**: 환경별 cost로 비밀번호 해싱
//! - **MongoDB**: 계정 데이터 영구 저장
//! - **생성자 주입**: 모든 협력 객체는 `Arc<dyn Trait>`으로 주입되어 `mockall`로 대체 가능
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ Routes/Handlers │ ← actix-web ↔ HttpRequest/HttpResponse
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Controllers   │ ← 검증, 200/400/500 결정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 계정 생성 유스케이스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Adapters/Repos  │ ← bcrypt, validator, MongoDB
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use signup_service::controllers::protocols::HttpRequest;
//! use signup_service::factories::make_signup_controller;
//!
//! let controller = make_signup_controller()?;
//! let response = controller.handle(HttpRequest::new(body)).await;
//! assert_eq!(response.status_code(), 200);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod adapters;
pub mod validation;
pub mod controllers;
pub mod factories;
pub mod utils;
pub mod routes;
pub mod handlers;
