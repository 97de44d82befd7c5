//! 회원가입 요청 DTO

use serde_json::Value;
use crate::domain::errors::DomainError;
use crate::domain::models::AccountCreationData;

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";
pub const PASSWORD_CONFIRMATION_FIELD: &str = "passwordConfirmation";

/// 회원가입 필수 필드 (검증 순서)
pub const SIGNUP_REQUIRED_FIELDS: [&str; 4] = [
    NAME_FIELD,
    EMAIL_FIELD,
    PASSWORD_FIELD,
    PASSWORD_CONFIRMATION_FIELD,
];

/// 회원가입 요청
///
/// 요청마다 생성되어 컨트롤러가 소유하고, 처리 후 폐기됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl SignupRequest {
    /// 타입 없는 요청 본문에서 네 필드를 추출합니다.
    ///
    /// 필수 필드 검증이 끝난 본문을 전제로 하지만, 단독으로 호출되어도 안전합니다.
    ///
    /// # Errors
    ///
    /// * `DomainError::MissingParam` - 필드가 없거나 `null`인 경우
    /// * `DomainError::InvalidParam` - 필드 값이 문자열이 아닌 경우
    pub fn from_body(body: &Value) -> Result<Self, DomainError> {
        Ok(Self {
            name: string_field(body, NAME_FIELD)?,
            email: string_field(body, EMAIL_FIELD)?,
            password: string_field(body, PASSWORD_FIELD)?,
            password_confirmation: string_field(body, PASSWORD_CONFIRMATION_FIELD)?,
        })
    }

    /// 비밀번호와 비밀번호 확인 값이 일치하는지 확인
    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }

    /// `password_confirmation`을 버리고 유스케이스 입력으로 변환합니다.
    pub fn into_creation_data(self) -> AccountCreationData {
        AccountCreationData {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

fn string_field(body: &Value, field: &str) -> Result<String, DomainError> {
    match body.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        None | Some(Value::Null) => Err(DomainError::missing_param(field)),
        Some(_) => Err(DomainError::invalid_param(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "A",
            "email": "a@b.com",
            "password": "p",
            "passwordConfirmation": "p"
        })
    }

    #[test]
    fn test_from_body_extracts_all_fields() {
        let request = SignupRequest::from_body(&valid_body()).unwrap();

        assert_eq!(request.name, "A");
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.password, "p");
        assert_eq!(request.password_confirmation, "p");
        assert!(request.passwords_match());
    }

    #[test]
    fn test_from_body_rejects_non_string_field() {
        let mut body = valid_body();
        body["email"] = json!(42);

        assert_eq!(
            SignupRequest::from_body(&body),
            Err(DomainError::invalid_param("email"))
        );
    }

    #[test]
    fn test_from_body_reports_null_as_missing() {
        let mut body = valid_body();
        body["name"] = Value::Null;

        assert_eq!(
            SignupRequest::from_body(&body),
            Err(DomainError::missing_param("name"))
        );
    }

    #[test]
    fn test_into_creation_data_drops_confirmation() {
        let mut body = valid_body();
        body["passwordConfirmation"] = json!("other");
        let request = SignupRequest::from_body(&body).unwrap();

        assert!(!request.passwords_match());
        assert_eq!(
            request.into_creation_data(),
            AccountCreationData::new("A", "a@b.com", "p")
        );
    }
}
