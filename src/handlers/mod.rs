//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 토큰 교환, 클레임 정규화              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   OneID (외부 공급자)                             ← Upstream
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data`로 주입된 설정과 서비스만 사용하며,
//! 요청 간에 공유하는 가변 상태를 갖지 않습니다.
//!
//! ## 모듈 구성
//!
//! - **`oneid`**: OneID 연동 엔드포인트
//!   - 콜백 브리지 (`GET /auth/oneid/callback`)
//!   - 토큰 교환 (`POST /api/oneid/token`)

pub mod oneid;
