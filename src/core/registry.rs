//! # Service Registry
//!
//! 프로세스 전역 인스턴스 컨테이너입니다.
//! Spring의 `registerSingleton()` / `getBean()`과 같은 역할로,
//! `main`에서 한 번 생성한 인프라 컴포넌트(MongoDB 연결 등)를 등록하고
//! 팩토리 계층이 컨트롤러를 조립할 때 꺼내 씁니다.
//!
//! ## 동작 방식
//!
//! ```text
//! main.rs
//!   ├─ Database::new(&config).await
//!   ├─ ServiceLocator::set(Arc<Database>)          ← 인프라 등록
//!   └─ factories::make_signup_controller()
//!         └─ ServiceLocator::get::<Database>()       ← 조립 시 조회
//! ```
//!
//! 비즈니스 객체(컨트롤러, 유스케이스)는 로케이터에 의존하지 않고
//! 생성자를 통해 협력 객체를 주입받습니다. 로케이터는 조립 지점에서만 사용됩니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use log::info;
use once_cell::sync::Lazy;
use crate::core::errors::{AppError, AppResult};

/// 타입 기반 싱글톤 컨테이너
///
/// `TypeId`를 키로 사용하여 각 타입당 하나의 인스턴스를 저장합니다.
/// 모든 접근은 `RwLock`으로 보호됩니다.
pub struct ServiceLocator {
    /// 등록된 인스턴스들의 캐시
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    /// 새로운 ServiceLocator 인스턴스를 생성합니다.
    /// 전역 Lazy static에서만 호출됩니다.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 외부에서 생성된 인스턴스를 등록합니다.
    ///
    /// 같은 타입이 이미 등록되어 있으면 새 인스턴스로 교체합니다.
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new(&DatabaseConfig::from_env()).await?);
    /// ServiceLocator::set(database);
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        info!("📦 Registering: {}", type_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 가져옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 등록되지 않은 경우
    pub fn get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        let type_name = std::any::type_name::<T>();

        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Service not found: {}. Register it with ServiceLocator::set()",
                    Self::extract_clean_type_name(type_name)
                ))
            })
    }

    /// 해당 타입이 등록되어 있는지 확인합니다.
    pub fn contains<T: 'static + Send + Sync>() -> bool {
        LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(&TypeId::of::<T>())
    }

    /// `std::any::type_name`의 모듈 경로를 제거합니다.
    ///
    /// `signup_service::db::Database` → `Database`
    fn extract_clean_type_name(type_name: &str) -> &str {
        type_name
            .rsplit_once("::")
            .map(|(_, name)| name)
            .unwrap_or(type_name)
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct RegisteredThing {
        value: u32,
    }

    struct NeverRegistered;

    #[test]
    fn test_set_then_get_returns_same_instance() {
        let thing = Arc::new(RegisteredThing { value: 42 });
        ServiceLocator::set(thing.clone());

        let found = ServiceLocator::get::<RegisteredThing>().unwrap();

        assert_eq!(found.value, 42);
        assert!(Arc::ptr_eq(&thing, &found));
        assert!(ServiceLocator::contains::<RegisteredThing>());
    }

    #[test]
    fn test_get_unregistered_type_is_internal_error() {
        let result = ServiceLocator::get::<NeverRegistered>();

        match result {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("NeverRegistered")),
            _ => panic!("Expected InternalError"),
        }
        assert!(!ServiceLocator::contains::<NeverRegistered>());
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("signup_service::db::Database"),
            "Database"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Database"), "Database");
    }
}
