//! 전송 계층 중립 요청/응답 타입
//!
//! Actix 타입에 의존하지 않으므로 컨트롤러를 HTTP 서버 없이 테스트할 수 있습니다.
//! Actix와의 변환은 [`handlers`](crate::handlers)에서 수행합니다.

use serde::Serialize;
use serde_json::Value;
use crate::domain::entities::accounts::Account;
use crate::domain::errors::DomainError;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_SERVER_ERROR: u16 = 500;

/// 컨트롤러 입력
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpRequest {
    /// 타입 없는 JSON 본문
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

/// 응답 본문
///
/// 200이면 계정, 400/500이면 도메인 에러입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(Account),
    Error(DomainError),
}

/// 컨트롤러 출력
///
/// 생성자(`ok`, `server_error`, `from_error`)만으로 만들 수 있어
/// 상태 코드는 항상 200/400/500 중 하나이고, 본문 종류는 상태 코드에 의해 결정됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    status_code: u16,
    body: ResponseBody,
}

impl HttpResponse {
    /// 200 OK + 생성된 계정
    pub fn ok(account: Account) -> Self {
        Self {
            status_code: STATUS_OK,
            body: ResponseBody::Account(account),
        }
    }

    /// 500 Internal Server Error, 원인을 `ServerError`로 보존
    pub fn server_error(cause: impl std::fmt::Display) -> Self {
        Self::from_error(DomainError::server_error(cause))
    }

    /// 에러 종류에 맞는 상태 코드로 응답을 만듭니다.
    ///
    /// `MissingParam`/`InvalidParam`은 400, `ServerError`는 500입니다.
    pub fn from_error(error: DomainError) -> Self {
        let status_code = if error.is_client_error() {
            STATUS_BAD_REQUEST
        } else {
            STATUS_SERVER_ERROR
        };

        Self {
            status_code,
            body: ResponseBody::Error(error),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn into_body(self) -> ResponseBody {
        self.body
    }

    /// 성공 응답이면 계정
    pub fn account(&self) -> Option<&Account> {
        match &self.body {
            ResponseBody::Account(account) => Some(account),
            ResponseBody::Error(_) => None,
        }
    }

    /// 실패 응답이면 도메인 에러
    pub fn error(&self) -> Option<&DomainError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Account(_) => None,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code == STATUS_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::domain::models::AccountCreationData;

    #[test]
    fn test_ok_response_carries_account() {
        let account = Account::from_creation("1", AccountCreationData::new("A", "a@b.com", "p"));
        let response = HttpResponse::ok(account.clone());

        assert_eq!(response.status_code(), 200);
        assert_eq!(response.account(), Some(&account));
        assert!(response.error().is_none());
    }

    #[test]
    fn test_status_follows_error_kind() {
        assert_eq!(HttpResponse::from_error(DomainError::missing_param("name")).status_code(), 400);
        assert_eq!(HttpResponse::from_error(DomainError::invalid_param("email")).status_code(), 400);
        assert_eq!(HttpResponse::from_error(DomainError::server_error("boom")).status_code(), 500);
        assert_eq!(HttpResponse::server_error("boom").status_code(), 500);
        assert!(HttpResponse::server_error("boom").is_server_error());
    }

    #[test]
    fn test_response_serialization() {
        let response = HttpResponse::from_error(DomainError::missing_param("email"));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 400,
                "body": { "name": "MissingParamError", "message": "Missing param: email" }
            })
        );
    }
}
