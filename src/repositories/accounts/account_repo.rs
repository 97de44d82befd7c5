//! # 계정 리포지토리 구현
//!
//! 계정 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `accounts` 컬렉션을 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **단일 쓰기**: `add` 호출당 정확히 한 번의 `insert_one`
//! - **식별자 할당**: MongoDB가 생성한 ObjectId를 16진수 문자열로 변환하여 [`Account::id`]에 담음
//! - **중복 검사 없음**: 이메일 유니크 제약은 이 서비스의 책임이 아님

use std::sync::Arc;
use async_trait::async_trait;
use log::info;
use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Serialize};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::accounts::Account,
    domain::models::AccountCreationData,
    services::accounts::protocols::AddAccountRepository,
    utils::string_utils::mask_email,
};

/// 컬렉션 저장 형태
///
/// `_id`는 삽입 시 비워두어 MongoDB가 ObjectId를 생성하도록 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    password: String,
}

impl From<&AccountCreationData> for AccountDocument {
    fn from(data: &AccountCreationData) -> Self {
        Self {
            id: None,
            name: data.name.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
        }
    }
}

/// 계정 데이터 액세스 리포지토리
///
/// ### Storage (MongoDB)
/// - **컬렉션명**: `accounts`
/// - **문서 형태**: `{ _id: ObjectId, name, email, password }`
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결/쓰기 오류, ObjectId가 아닌 `inserted_id`
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoAccountRepository::new(database);
/// let account = repo.add(AccountCreationData::new("A", "a@b.com", "hashed")).await?;
/// assert!(account.is_persisted());
/// ```
pub struct MongoAccountRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoAccountRepository {
    pub const COLLECTION: &'static str = "accounts";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<AccountDocument> {
        self.db.get_database().collection::<AccountDocument>(Self::COLLECTION)
    }
}

#[async_trait]
impl AddAccountRepository for MongoAccountRepository {
    async fn add(&self, data: AccountCreationData) -> AppResult<Account> {
        let document = AccountDocument::from(&data);

        let result = self.collection()
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let account = account_from_inserted(&result.inserted_id, data)?;

        info!("💾 Account stored: {} ({})", account.id, mask_email(&account.email));

        Ok(account)
    }
}

/// `insert_one` 결과의 `inserted_id`로 [`Account`]를 만듭니다.
///
/// # Errors
///
/// * `AppError::DatabaseError` - `inserted_id`가 ObjectId가 아닌 경우
fn account_from_inserted(inserted_id: &Bson, data: AccountCreationData) -> AppResult<Account> {
    let id = inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError(format!("예상치 못한 inserted_id 형식: {}", inserted_id)))?;

    Ok(Account::from_creation(id.to_hex(), data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn make_data() -> AccountCreationData {
        AccountCreationData::new("valid_name", "valid_email@mail.com", "hashed_password")
    }

    #[test]
    fn test_object_id_becomes_hex_id() {
        let oid = ObjectId::new();
        let account = account_from_inserted(&Bson::ObjectId(oid), make_data()).unwrap();

        assert_eq!(account.id, oid.to_hex());
        assert_eq!(account.name, "valid_name");
        assert_eq!(account.email, "valid_email@mail.com");
        assert_eq!(account.password, "hashed_password");
    }

    #[test]
    fn test_non_object_id_is_database_error() {
        let result = account_from_inserted(&Bson::String("1".to_string()), make_data());

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_document_omits_id_until_inserted() {
        let document = AccountDocument::from(&make_data());
        let serialized = bson::to_document(&document).unwrap();

        assert!(!serialized.contains_key("_id"));
        assert_eq!(serialized.get_str("email").unwrap(), "valid_email@mail.com");
        assert_eq!(serialized.get_str("password").unwrap(), "hashed_password");
    }
}
