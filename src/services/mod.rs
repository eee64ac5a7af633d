//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `web::Data`로 핸들러에 주입되며 요청 간에 공유하는 가변 상태가 없습니다.
//!
//! # Features
//!
//! - OneID 인가 코드 ↔ 토큰 교환
//! - 사용자 정보 조회 및 클레임 정규화
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::services::oneid::OneIdAuthService;
//!
//! let service = web::Data::new(OneIdAuthService::new(timeout)?);
//! ```

pub mod oneid;
