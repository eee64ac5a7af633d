//! # Domain Layer
//!
//! OneID 릴레이의 도메인 타입을 모아 둔 계층입니다.
//! 영속 엔티티는 없으며, 모든 타입은 요청 하나의 수명 안에서 생성되고 버려집니다.
//!
//! ```text
//! domain/
//! ├── dto/      ← HTTP 요청/응답 (CallbackQuery, TokenExchangeRequest, TokenExchangeResult)
//! └── models/   ← 공급자 응답과 정규화된 사용자 (OneIdTokenResponse, NormalizedUser)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
