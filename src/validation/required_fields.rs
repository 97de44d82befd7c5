use serde_json::Value;
use crate::controllers::protocols::Validation;
use crate::domain::errors::DomainError;

/// 필수 필드 검증기
///
/// 설정된 필드 목록을 고정된 순서로 순회하며 처음 누락된 필드를
/// `MissingParam`으로 보고합니다. 다음 경우를 누락으로 봅니다:
///
/// - 필드가 없음
/// - 값이 `null`
/// - 값이 빈 문자열 (`""`)
///
/// 공백만 있는 문자열은 값이 있는 것으로 봅니다.
///
/// 문자열이 아닌 값(숫자 등)은 존재하는 것으로 보고 타입 검사는 이후 단계에 맡깁니다.
/// 본문이 JSON 객체가 아니면 첫 번째 필드가 누락된 것으로 봅니다.
#[derive(Debug, Clone)]
pub struct RequiredFieldsValidation {
    fields: Vec<String>,
}

impl RequiredFieldsValidation {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    fn is_present(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

impl Validation for RequiredFieldsValidation {
    fn validate(&self, input: &Value) -> Option<DomainError> {
        self.fields
            .iter()
            .find(|field| !Self::is_present(input.get(field.as_str())))
            .map(|field| DomainError::missing_param(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::domain::dto::signup::SIGNUP_REQUIRED_FIELDS;

    fn signup_validation() -> RequiredFieldsValidation {
        RequiredFieldsValidation::new(SIGNUP_REQUIRED_FIELDS)
    }

    fn full_body() -> Value {
        json!({
            "name": "A",
            "email": "a@b.com",
            "password": "p",
            "passwordConfirmation": "p"
        })
    }

    #[test]
    fn test_all_fields_present() {
        assert_eq!(signup_validation().validate(&full_body()), None);
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in SIGNUP_REQUIRED_FIELDS {
            let mut body = full_body();
            body.as_object_mut().unwrap().remove(field);

            assert_eq!(
                signup_validation().validate(&body),
                Some(DomainError::missing_param(field)),
                "field {} should be reported as missing",
                field
            );
        }
    }

    #[test]
    fn test_empty_and_null_values_count_as_missing() {
        let mut body = full_body();
        body["email"] = json!("");
        assert_eq!(signup_validation().validate(&body), Some(DomainError::missing_param("email")));

        let mut body = full_body();
        body["name"] = Value::Null;
        assert_eq!(signup_validation().validate(&body), Some(DomainError::missing_param("name")));
    }

    #[test]
    fn test_whitespace_only_value_is_present() {
        let mut body = full_body();
        body["password"] = json!("   ");
        body["passwordConfirmation"] = json!("   ");

        assert_eq!(signup_validation().validate(&body), None);
    }

    #[test]
    fn test_first_missing_field_wins() {
        let body = json!({ "name": "A" });

        assert_eq!(signup_validation().validate(&body), Some(DomainError::missing_param("email")));
    }

    #[test]
    fn test_non_object_body_reports_first_field() {
        assert_eq!(signup_validation().validate(&json!([1, 2])), Some(DomainError::missing_param("name")));
        assert_eq!(signup_validation().validate(&Value::Null), Some(DomainError::missing_param("name")));
    }

    #[test]
    fn test_non_string_value_counts_as_present() {
        let mut body = full_body();
        body["name"] = json!(42);

        assert_eq!(signup_validation().validate(&body), None);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let body = json!({ "name": "A", "email": "a@b.com" });
        let validation = signup_validation();

        assert_eq!(validation.validate(&body), validation.validate(&body));
    }
}
