//! 비즈니스 로직을 담당하는 유스케이스 계층 모듈
//!
//! 전송 계층과 무관한 비즈니스 연산을 제공합니다.
//! 각 유스케이스는 필요한 협력 객체를 trait으로 선언하고, 구현체는 생성자로 주입받습니다.
//!
//! ```text
//! controllers ──▶ services ──▶ protocols (Encrypter, AddAccountRepository)
//!                                  ▲                ▲
//!                              adapters        repositories
//! ```

pub mod accounts;
