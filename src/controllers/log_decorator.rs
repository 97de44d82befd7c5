//! 컨트롤러 로깅 데코레이터

use std::sync::Arc;
use async_trait::async_trait;
use log::error;
use crate::controllers::protocols::{Controller, HttpRequest, HttpResponse};

/// 임의의 [`Controller`]를 감싸 500 응답의 원인을 서버 로그에 남깁니다.
///
/// 응답 본문에는 `ServerError`의 원인이 포함되지 않으므로
/// 운영 중 장애 추적은 이 로그에 의존합니다. 응답은 변경 없이 그대로 전달됩니다.
pub struct LogControllerDecorator {
    controller: Arc<dyn Controller>,
}

impl LogControllerDecorator {
    pub fn new(controller: Arc<dyn Controller>) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl Controller for LogControllerDecorator {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.is_server_error() {
            let cause = response
                .error()
                .and_then(|e| e.cause())
                .unwrap_or("unknown");
            error!("❌ 요청 처리 중 서버 오류: {}", cause);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::controllers::protocols::MockController;
    use crate::domain::entities::accounts::Account;
    use crate::domain::errors::DomainError;
    use crate::domain::models::AccountCreationData;

    fn decorate(response: HttpResponse) -> LogControllerDecorator {
        let mut controller = MockController::new();
        controller
            .expect_handle()
            .times(1)
            .returning(move |_| response.clone());
        LogControllerDecorator::new(Arc::new(controller))
    }

    #[actix_web::test]
    async fn test_forwards_request_to_wrapped_controller() {
        let mut controller = MockController::new();
        controller
            .expect_handle()
            .withf(|request| request.body == json!({ "name": "any_name" }))
            .times(1)
            .returning(|_| HttpResponse::from_error(DomainError::missing_param("email")));

        let decorator = LogControllerDecorator::new(Arc::new(controller));
        decorator.handle(HttpRequest::new(json!({ "name": "any_name" }))).await;
    }

    #[actix_web::test]
    async fn test_success_passes_through_unchanged() {
        let account = Account::from_creation("1", AccountCreationData::new("A", "a@b.com", "hash"));
        let expected = HttpResponse::ok(account);

        let response = decorate(expected.clone()).handle(HttpRequest::default()).await;

        assert_eq!(response, expected);
    }

    #[actix_web::test]
    async fn test_server_error_passes_through_unchanged() {
        let expected = HttpResponse::server_error("any_stack");

        let response = decorate(expected.clone()).handle(HttpRequest::default()).await;

        assert_eq!(response, expected);
        assert_eq!(response.error().and_then(|e| e.cause()), Some("any_stack"));
    }
}
