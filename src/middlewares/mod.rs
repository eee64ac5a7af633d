//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어 구성을 제공합니다.
//!
//! # 적용 순서 (바깥쪽부터)
//!
//! actix-web에서는 마지막으로 `.wrap`한 미들웨어가 가장 바깥쪽에서 실행됩니다.
//!
//! 1. **NormalizePath** - 경로 끝 슬래시 정리
//! 2. **Logger** - 접근 로그 (CORS 거부와 429 응답도 기록)
//! 3. **CORS** (`actix-cors`) - [`cors::configure_cors`]. Preflight와 거부된 Origin은 여기서 응답
//! 4. **Rate Limiting** (`actix-governor`) - 피어 IP별 60초 60요청
//!
//! Rate Limiting 할당량은 [`crate::config::RateLimitConfig`]에서 계산되며,
//! `main.rs`의 서버 구성 단계에서 `GovernorConfigBuilder`에 적용됩니다.

pub mod cors;

pub use cors::{configure_cors, is_origin_allowed};
