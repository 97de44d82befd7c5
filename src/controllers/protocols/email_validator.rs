use async_trait::async_trait;
use crate::core::errors::AppResult;

/// 이메일 형식 검증기
///
/// `Ok(false)`는 형식 오류, `Err`는 검증기 자체의 예외적인 실패입니다.
/// 컨트롤러는 `Err`를 500으로 변환하며 호출자에게 전파하지 않습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailValidator: Send + Sync {
    async fn is_valid(&self, email: &str) -> AppResult<bool>;
}
