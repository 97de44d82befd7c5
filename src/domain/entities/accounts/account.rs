//! Account Entity Implementation

use serde::{Deserialize, Serialize};
use crate::domain::models::AccountCreationData;

/// 계정 엔티티
///
/// 회원가입으로 생성되어 저장소에 기록된 계정입니다.
/// `password`는 항상 해시된 값이며, 평문 비밀번호를 담지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// 저장소가 할당한 식별자 (MongoDB ObjectId의 16진수 문자열)
    pub id: String,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
}

impl Account {
    /// 저장소가 할당한 id와 저장된 데이터로 계정을 만듭니다.
    pub fn from_creation(id: impl Into<String>, data: AccountCreationData) -> Self {
        let AccountCreationData { name, email, password } = data;

        Self {
            id: id.into(),
            name,
            email,
            password,
        }
    }

    /// 저장소에 의해 id가 할당되었는지 확인
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}
