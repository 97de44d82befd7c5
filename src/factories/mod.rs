//! # Composition Root
//!
//! 구체 구현체들을 조립하여 완성된 컨트롤러를 만드는 팩토리입니다.
//! 이 모듈만 어떤 구현체가 어떤 trait 자리에 들어가는지 알고 있습니다.
//!
//! ```text
//! LogControllerDecorator
//!   └─ SignupController
//!        ├─ RequiredFieldsValidation [name, email, password, passwordConfirmation]
//!        ├─ EmailValidatorAdapter
//!        └─ CreateAccountService
//!             ├─ BcryptAdapter (PasswordConfig::bcrypt_cost)
//!             └─ MongoAccountRepository (ServiceLocator의 Database)
//! ```

use std::sync::Arc;
use crate::adapters::{BcryptAdapter, EmailValidatorAdapter};
use crate::controllers::protocols::Controller;
use crate::controllers::{LogControllerDecorator, SignupController};
use crate::core::errors::AppResult;
use crate::core::registry::ServiceLocator;
use crate::db::Database;
use crate::domain::dto::signup::SIGNUP_REQUIRED_FIELDS;
use crate::repositories::accounts::MongoAccountRepository;
use crate::services::accounts::{AddAccountRepository, CreateAccountService};
use crate::validation::RequiredFieldsValidation;

/// 등록된 [`Database`]로 회원가입 컨트롤러를 조립합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - `Database`가 [`ServiceLocator`]에 등록되지 않은 경우
pub fn make_signup_controller() -> AppResult<Arc<dyn Controller>> {
    let database = ServiceLocator::get::<Database>()?;
    let repository = Arc::new(MongoAccountRepository::new(database));

    Ok(make_signup_controller_with(repository))
}

/// 주어진 저장소로 회원가입 컨트롤러를 조립합니다.
pub fn make_signup_controller_with(repository: Arc<dyn AddAccountRepository>) -> Arc<dyn Controller> {
    let create_account = CreateAccountService::new(Arc::new(BcryptAdapter::from_env()), repository);

    let controller = SignupController::new(
        Arc::new(RequiredFieldsValidation::new(SIGNUP_REQUIRED_FIELDS)),
        Arc::new(EmailValidatorAdapter::new()),
        Arc::new(create_account),
    );

    Arc::new(LogControllerDecorator::new(Arc::new(controller)))
}
