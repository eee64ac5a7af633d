//! # Configuration Module
//!
//! 릴레이 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 구조체로 읽어 들인 뒤,
//! `web::Data`를 통해 핸들러에 명시적으로 주입합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 바인딩 주소, CORS 허용 목록, Rate Limiting 설정
//! - [`oneid_config`] - OneID 공급자 엔드포인트, 클라이언트 자격 증명, 앱 스킴
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export PORT="8787"
//! export ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
//!
//! # OneID 설정
//! export ONEID_TOKEN_URL="https://id.example.com/oauth/token"
//! export ONEID_CLIENT_ID="your-client-id"
//! export ONEID_CLIENT_SECRET="your-client-secret"
//! export ONEID_USERINFO_URL="https://id.example.com/oauth/userinfo"  # 선택
//! export APP_SCHEME="odo.app"
//! ```
//!
//! 모든 `from_env()` 생성자는 `from_lookup()`에 위임합니다.
//! 테스트에서는 프로세스 환경을 건드리지 않고 클로저로 값을 공급합니다.

pub mod oneid_config;
pub mod server_config;

pub use oneid_config::*;
pub use server_config::*;

use std::str::FromStr;

/// 비어 있거나 공백뿐인 값은 설정되지 않은 것으로 취급합니다.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 숫자 설정값을 파싱하고, 실패하면 에러를 기록한 뒤 기본값을 사용합니다.
pub(crate) fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match non_empty(raw) {
        None => default,
        Some(value) => value.parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
    }
}
