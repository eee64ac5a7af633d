//! 서버 설정 관리 모듈
//!
//! 바인딩 주소, CORS 허용 Origin 목록, Rate Limiting 설정을 관리합니다.

use std::env;
use std::time::Duration;

use super::{non_empty, parse_or_default};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8787;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;

/// HTTP 서버 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// CORS 허용 Origin 목록. 비어 있으면 모든 Origin을 허용합니다.
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// 프로세스 환경 변수에서 서버 설정을 읽어옵니다.
    ///
    /// # Environment Variables
    ///
    /// * `HOST` - 바인딩 호스트 (기본값: `0.0.0.0`)
    /// * `PORT` - 바인딩 포트 (기본값: `8787`)
    /// * `ALLOWED_ORIGINS` - 쉼표로 구분된 CORS 허용 목록 (기본값: 비어 있음 = 전체 허용)
    /// * `RATE_LIMIT_WINDOW_SECS` - Rate Limiting 윈도우 (기본값: 60)
    /// * `RATE_LIMIT_MAX_REQUESTS` - 윈도우당 최대 요청 수 (기본값: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: non_empty(lookup("HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or_default("PORT", lookup("PORT"), DEFAULT_PORT),
            allowed_origins: parse_allowed_origins(lookup("ALLOWED_ORIGINS").as_deref().unwrap_or("")),
            rate_limit: RateLimitConfig::from_lookup(&lookup),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 쉼표로 구분된 Origin 목록을 파싱합니다.
///
/// 각 항목의 앞뒤 공백을 제거하고 빈 항목은 버립니다.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rate Limiting 설정
///
/// 클라이언트(피어 IP)별로 `window` 동안 최대 `max_requests`개의 요청을 허용합니다.
/// 미들웨어에서는 버스트 `max_requests`, 보충 주기 `window / max_requests`의
/// GCRA 할당량으로 표현됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
        }
    }
}

impl RateLimitConfig {
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let window_secs = parse_or_default(
            "RATE_LIMIT_WINDOW_SECS",
            lookup("RATE_LIMIT_WINDOW_SECS"),
            DEFAULT_RATE_LIMIT_WINDOW_SECS,
        );
        let max_requests = parse_or_default(
            "RATE_LIMIT_MAX_REQUESTS",
            lookup("RATE_LIMIT_MAX_REQUESTS"),
            DEFAULT_RATE_LIMIT_MAX_REQUESTS,
        );

        if window_secs == 0 || max_requests == 0 {
            log::error!(
                "Rate Limiting 설정은 0일 수 없습니다 (window={}s, max={}). 기본값 사용",
                window_secs,
                max_requests
            );
            return Self::default();
        }

        Self {
            window: Duration::from_secs(window_secs),
            max_requests,
        }
    }

    /// 할당량 한 칸이 보충되는 주기
    pub fn replenish_period(&self) -> Duration {
        self.window / self.max_requests.max(1)
    }
}
