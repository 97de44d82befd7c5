//! # Controller Protocols
//!
//! 프레젠테이션 계층이 의존하는 좁은 인터페이스 모음입니다.
//! 구현체는 생성자로 주입되며, 테스트에서는 `mockall`이 생성한 Mock으로 교체됩니다.
//!
//! | Trait | 구현체 | 테스트 대역 |
//! |-------|--------|-------------|
//! | [`Controller`] | `SignupController`, `LogControllerDecorator` | `MockController` |
//! | [`Validation`] | `RequiredFieldsValidation` | `MockValidation` |
//! | [`EmailValidator`] | `EmailValidatorAdapter` | `MockEmailValidator` |

pub mod controller;
pub mod email_validator;
pub mod http;
pub mod validation;

pub use controller::Controller;
pub use email_validator::EmailValidator;
pub use http::{HttpRequest, HttpResponse, ResponseBody};
pub use validation::Validation;

#[cfg(test)]
pub use controller::MockController;
#[cfg(test)]
pub use email_validator::MockEmailValidator;
#[cfg(test)]
pub use validation::MockValidation;
