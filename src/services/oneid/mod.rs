//! OneID 연동 서비스 모듈
//!
//! 인가 코드 교환과 사용자 클레임 정규화를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::oneid::OneIdAuthService;
//!
//! let service = OneIdAuthService::new(config.http_timeout)?;
//! let result = service.exchange_code(&config, grant).await?;
//! ```

pub mod oneid_auth_service;
pub mod user_normalizer;

pub use oneid_auth_service::*;
pub use user_normalizer::*;
