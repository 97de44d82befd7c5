use serde::{Deserialize, Serialize};

/// 계정 생성 입력
///
/// 회원가입 요청에서 `passwordConfirmation`을 제거한 값입니다.
/// 유스케이스에는 평문 비밀번호가, 저장소에는 해시된 비밀번호가 담겨 전달됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreationData {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountCreationData {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// 비밀번호만 교체한 새 값을 반환합니다.
    pub fn with_password(self, password: String) -> Self {
        Self { password, ..self }
    }
}
