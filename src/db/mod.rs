//! Database Connection Management Module
//!
//! MongoDB 연결 관리를 담당하는 모듈입니다.
//! 연결은 프로세스 시작 시 한 번 생성되어 [`ServiceLocator`](crate::core::registry::ServiceLocator)에
//! 등록되고, 프로세스 종료까지 유지됩니다. 리포지토리는 연결의 생명주기를 관리하지 않고
//! 호출만 수행합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::new(&DatabaseConfig::from_env()).await?;
//! let accounts = database.get_database().collection::<AccountDocument>("accounts");
//! ```

use mongodb::{Client, bson::doc, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (내부적으로 커넥션 풀을 가짐)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성합니다.
    ///
    /// URI를 파싱해 클라이언트를 만들고 `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패, 클라이언트 생성 실패, ping 실패
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (서버 측 모니터링에 표시됨)
        client_options.app_name = Some("signup_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 핸들을 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
