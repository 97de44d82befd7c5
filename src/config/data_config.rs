//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 비밀번호 해싱, Rate Limiting 설정을 관리합니다.

use std::env;
use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_name(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 처리합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt가 허용하는 최소 cost
    pub const MIN_COST: u32 = 4;
    /// 운영상 허용하는 최대 cost
    pub const MAX_COST: u32 = 15;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            match Self::parse_cost(&cost_str) {
                Some(cost) => return cost,
                None => warn!("BCRYPT_COST 값이 유효하지 않습니다: {}. 환경 기본값 사용", cost_str),
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    fn parse_cost(value: &str) -> Option<u32> {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
    }
}

/// `PROFILE` 값에 대응하는 .env 파일 이름
///
/// - `prod` → `.env.prod`
/// - `dev` → `.env.dev`
/// - 기타 → `.env`
pub fn env_file_for_profile(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
}

impl DatabaseConfig {
    /// 환경 변수에서 연결 정보를 읽어옵니다.
    ///
    /// - `MONGODB_URI`: 기본값 `mongodb://localhost:27017`
    /// - `DATABASE_NAME`: 기본값 `signup_dev`
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "signup_dev".to_string()),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하면 경고를 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .map(|value| {
                value.parse::<u64>().unwrap_or_else(|e| {
                    warn!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                    100
                })
            })
            .unwrap_or(100);

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .map(|value| {
                value.parse::<u32>().unwrap_or_else(|e| {
                    warn!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                    200
                })
            })
            .unwrap_or(200);

        Self { per_second, burst_size }
    }
}
