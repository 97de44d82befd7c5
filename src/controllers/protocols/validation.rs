use serde_json::Value;
use crate::domain::errors::DomainError;

/// 요청 본문 검증기
///
/// 순수 함수여야 합니다. 같은 입력에는 항상 같은 결과를 돌려주고 부수 효과가 없습니다.
#[cfg_attr(test, mockall::automock)]
pub trait Validation: Send + Sync {
    /// 첫 번째 검증 실패를 반환하고, 모두 통과하면 `None`
    fn validate(&self, input: &Value) -> Option<DomainError>;
}
