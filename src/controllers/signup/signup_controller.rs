//! # 회원가입 컨트롤러
//!
//! 타입 없는 요청 본문을 받아 검증 단계를 순서대로 통과시킨 뒤
//! 계정 생성 유스케이스를 호출합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! body ──▶ Validation ──▶ 필드 추출 ──▶ 비밀번호 확인 ──▶ EmailValidator ──▶ CreateAccount
//!             │              │               │                 │                 │
//!          400 Missing   400 Invalid    400 Invalid      400 Invalid(email)   500 Server
//!                                  (passwordConfirmation)  500 Server
//! ```
//!
//! 각 단계는 실패 시 즉시 응답을 반환하며 이후 협력 객체는 호출되지 않습니다.
//! 어떤 경우에도 `Err`가 컨트롤러 밖으로 나가지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::{info, warn};
use serde_json::Value;
use crate::controllers::protocols::{Controller, EmailValidator, HttpRequest, HttpResponse, Validation};
use crate::domain::dto::signup::request::{EMAIL_FIELD, PASSWORD_CONFIRMATION_FIELD};
use crate::domain::dto::signup::SignupRequest;
use crate::domain::entities::accounts::Account;
use crate::domain::errors::DomainError;
use crate::services::accounts::CreateAccount;
use crate::utils::string_utils::mask_email;

/// 회원가입 컨트롤러
///
/// 세 협력 객체를 생성자로 주입받으며 요청 간 상태를 갖지 않습니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// let controller = SignupController::new(
///     Arc::new(RequiredFieldsValidation::new(SIGNUP_REQUIRED_FIELDS)),
///     Arc::new(EmailValidatorAdapter::new()),
///     Arc::new(create_account_service),
/// );
///
/// let response = controller.handle(HttpRequest::new(body)).await;
/// ```
pub struct SignupController {
    validation: Arc<dyn Validation>,
    email_validator: Arc<dyn EmailValidator>,
    create_account: Arc<dyn CreateAccount>,
}

impl SignupController {
    pub fn new(
        validation: Arc<dyn Validation>,
        email_validator: Arc<dyn EmailValidator>,
        create_account: Arc<dyn CreateAccount>,
    ) -> Self {
        Self {
            validation,
            email_validator,
            create_account,
        }
    }

    async fn signup(&self, body: &Value) -> Result<Account, DomainError> {
        if let Some(error) = self.validation.validate(body) {
            return Err(error);
        }

        let request = SignupRequest::from_body(body)?;

        if !request.passwords_match() {
            return Err(DomainError::invalid_param(PASSWORD_CONFIRMATION_FIELD));
        }

        let is_valid = self.email_validator
            .is_valid(&request.email)
            .await
            .map_err(DomainError::server_error)?;

        if !is_valid {
            return Err(DomainError::invalid_param(EMAIL_FIELD));
        }

        self.create_account
            .execute(request.into_creation_data())
            .await
            .map_err(DomainError::server_error)
    }
}

#[async_trait]
impl Controller for SignupController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.signup(&request.body).await {
            Ok(account) => {
                info!("✅ 회원가입 완료: {} ({})", account.id, mask_email(&account.email));
                HttpResponse::ok(account)
            }
            Err(error) => {
                if error.is_client_error() {
                    warn!("회원가입 요청 거부: {}", error);
                }
                HttpResponse::from_error(error)
            }
        }
    }
}
