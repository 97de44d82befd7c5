//! # HTTP Request Handlers Module
//!
//! Actix-web과 전송 계층 중립 컨트롤러 사이의 얇은 어댑터입니다.
//! 핸들러는 비즈니스 판단을 하지 않고 요청/응답 변환만 수행합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - actix ↔ HttpRequest/HttpResponse
//! ├─────────────────────────────────────────────┤
//!   Controllers - 검증 및 상태 코드 결정
//! ├─────────────────────────────────────────────┤
//!   Services - 계정 생성 유스케이스
//! ├─────────────────────────────────────────────┤
//!   Adapters / Repositories - bcrypt, validator, MongoDB
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 컨트롤러는 `web::Data<dyn Controller>`로 주입되므로
//! 테스트에서는 `MockController`로 교체할 수 있습니다.

pub mod signup;
