//! OneID 릴레이 백엔드
//!
//! 웹/모바일 클라이언트와 OneID 신원 공급자 사이를 이어 주는 상태 없는 백엔드입니다.
//! 인가 콜백을 앱 딥링크로 넘겨주고, 인가 코드를 서버 간 통신으로 토큰과 교환합니다.
//!
//! # Features
//!
//! - **콜백 브리지**: `target=app` 콜백을 모바일 딥링크로 302 리다이렉트
//! - **토큰 교환**: 인가 코드 + PKCE verifier → 액세스/ID 토큰
//! - **사용자 정보**: 선택적 user-info 조회와 클레임 정규화 (실패해도 교환은 성공)
//! - **CORS / Rate Limiting**: 허용 Origin 목록, 클라이언트별 60초 60요청
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 교환, 클레임 정규화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  OneID (HTTPS)  │ ← 외부 공급자
//! └─────────────────┘
//! ```
//!
//! 저장소도, 요청 간 공유 상태도 없습니다. 설정은 `web::Data`로 명시적으로 주입됩니다.

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
