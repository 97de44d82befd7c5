use async_trait::async_trait;
use super::http::{HttpRequest, HttpResponse};

/// 프레젠테이션 계층 컨트롤러
///
/// 전송 계층 요청을 유스케이스 호출로 바꾸고, 결과를 전송 계층 응답으로 돌려줍니다.
/// 어떤 실패도 `Err`로 새어 나가지 않도록 반환 타입이 `HttpResponse` 자체입니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
