//! # Domain Entities Module
//!
//! 저장소에 영속화된 뒤의 상태를 표현하는 엔티티입니다.
//! 엔티티의 `id`는 항상 저장소가 할당하며, 유스케이스는 id를 직접 만들지 않습니다.

pub mod accounts;
