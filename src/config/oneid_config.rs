//! OneID 공급자 설정 관리 모듈
//!
//! 토큰/사용자 정보 엔드포인트, 클라이언트 자격 증명, 모바일 딥링크 스킴을 관리합니다.
//!
//! 자격 증명의 누락 여부는 서버 시작 시점이 아니라 **요청마다** 검사합니다.
//! 부분적으로 잘못 설정된 서버도 헬스체크와 콜백 리다이렉트는 계속 제공해야 하기 때문입니다.

use std::env;
use std::fmt;
use std::time::Duration;

use super::{non_empty, parse_or_default};
use crate::errors::errors::{AppError, AppResult};

const DEFAULT_APP_SCHEME: &str = "odo.app";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// OneID 공급자 설정
///
/// 바이너리에서는 [`OneIdConfig::from_env`]로 생성하고,
/// 테스트에서는 필드를 직접 채워 요청 단위로 덮어쓸 수 있습니다.
#[derive(Clone)]
pub struct OneIdConfig {
    /// `ONEID_TOKEN_URL`
    pub token_url: Option<String>,
    /// `ONEID_CLIENT_ID`
    pub client_id: Option<String>,
    /// `ONEID_CLIENT_SECRET`
    pub client_secret: Option<String>,
    /// `ONEID_USERINFO_URL` - 설정되지 않으면 사용자 정보 조회를 건너뜁니다.
    pub userinfo_url: Option<String>,
    /// `APP_SCHEME` - 모바일 딥링크 URI 스킴
    pub app_scheme: String,
    /// `ONEID_HTTP_TIMEOUT_SECS` - 외부 호출 1회당 제한 시간
    pub http_timeout: Duration,
}

/// 토큰 교환에 필요한 자격 증명 묶음
///
/// [`OneIdConfig::client_credentials`]가 누락 검사를 통과했을 때만 만들어집니다.
#[derive(Debug, Clone, Copy)]
pub struct ClientCredentials<'a> {
    pub token_url: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

impl OneIdConfig {
    /// 프로세스 환경 변수에서 OneID 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = parse_or_default(
            "ONEID_HTTP_TIMEOUT_SECS",
            lookup("ONEID_HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
        );

        Self {
            token_url: non_empty(lookup("ONEID_TOKEN_URL")),
            client_id: non_empty(lookup("ONEID_CLIENT_ID")),
            client_secret: non_empty(lookup("ONEID_CLIENT_SECRET")),
            userinfo_url: non_empty(lookup("ONEID_USERINFO_URL")),
            app_scheme: non_empty(lookup("APP_SCHEME"))
                .unwrap_or_else(|| DEFAULT_APP_SCHEME.to_string()),
            http_timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }

    /// 토큰 교환용 자격 증명을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 토큰 URL, 클라이언트 ID, 클라이언트 시크릿 중 하나라도 없을 때.
    ///   누락된 환경 변수 이름은 로그에만 기록됩니다.
    pub fn client_credentials(&self) -> AppResult<ClientCredentials<'_>> {
        match (
            self.token_url.as_deref(),
            self.client_id.as_deref(),
            self.client_secret.as_deref(),
        ) {
            (Some(token_url), Some(client_id), Some(client_secret)) => Ok(ClientCredentials {
                token_url,
                client_id,
                client_secret,
            }),
            _ => {
                let missing = self.missing_credentials().join(", ");
                log::error!("OneID 설정 누락: {}", missing);
                Err(AppError::ConfigurationError(missing))
            }
        }
    }

    pub fn userinfo_url(&self) -> Option<&str> {
        self.userinfo_url.as_deref()
    }

    fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("ONEID_TOKEN_URL", self.token_url.is_none()),
            ("ONEID_CLIENT_ID", self.client_id.is_none()),
            ("ONEID_CLIENT_SECRET", self.client_secret.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl Default for OneIdConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for OneIdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneIdConfig")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("userinfo_url", &self.userinfo_url)
            .field("app_scheme", &self.app_scheme)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
