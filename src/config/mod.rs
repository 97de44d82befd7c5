//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="signup_dev"
//!
//! # 환경 / 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! `PROFILE` 값에 따라 `.env.dev` / `.env.prod` 파일을 먼저 로드합니다 (`main.rs` 참고).

pub mod data_config;

pub use data_config::*;
