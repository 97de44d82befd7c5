//! # Domain Models Module
//!
//! 유스케이스와 저장소 사이에서 오가는 값 객체입니다.

pub mod account_creation;

pub use account_creation::AccountCreationData;
