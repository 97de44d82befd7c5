//! # Data Transfer Objects
//!
//! 전송 계층(HTTP 본문)과 도메인 사이의 경계 타입입니다.
//! 요청 본문은 먼저 타입 없는 JSON(`serde_json::Value`)으로 필수 필드 검증을 거친 뒤,
//! DTO로 변환됩니다.

pub mod signup;
