//! 외부 라이브러리 어댑터
//!
//! 유스케이스와 컨트롤러가 선언한 capability trait을 서드파티 크레이트로 구현합니다.
//!
//! | Adapter | Trait | Crate |
//! |---------|-------|-------|
//! | [`BcryptAdapter`] | `Encrypter` | `bcrypt` |
//! | [`EmailValidatorAdapter`] | `EmailValidator` | `validator` |

pub mod bcrypt_adapter;
pub mod email_validator_adapter;

pub use bcrypt_adapter::BcryptAdapter;
pub use email_validator_adapter::EmailValidatorAdapter;
