//! # OneID 토큰 교환 서비스
//!
//! 클라이언트가 받은 인가 코드를 서버 간 통신으로 OneID 토큰과 교환하고,
//! 설정된 경우 사용자 정보를 조회해 정규화합니다.
//!
//! ## Authorization Code Flow
//!
//! ```text
//! ┌────────────┐            ┌────────────────┐                 ┌──────────────┐
//! │ 클라이언트   │            │  릴레이 서버     │                 │    OneID     │
//! └─────┬──────┘            └───────┬────────┘                 └──────┬───────┘
//!       │ POST /api/oneid/token     │                                 │
//!       ├──────────────────────────►│ 1. POST token (form)            │
//!       │                           ├────────────────────────────────►│
//!       │                           │◄────────────────────────────────┤
//!       │                           │ 2. GET userinfo (Bearer, 선택)    │
//!       │                           ├────────────────────────────────►│
//!       │                           │◄────────────────────────────────┤
//!       │ {accessToken, user, ...}  │                                 │
//!       │◄──────────────────────────┤                                 │
//! ```
//!
//! 두 호출은 순차적이며(두 번째 호출이 첫 번째의 액세스 토큰을 사용) 재시도하지 않습니다.
//! 토큰과 사용자 정보는 요청 간에 캐싱하지 않습니다.

use std::time::Duration;

use crate::config::{ClientCredentials, OneIdConfig};
use crate::domain::dto::oneid::{AuthorizationCodeGrant, TokenExchangeResult};
use crate::domain::models::oneid::{Claims, OneIdTokenResponse, UserInfoOutcome};
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::services::oneid::user_normalizer::normalize_user;

/// 토큰 엔드포인트 시간 초과 시 `details`로 내보내는 문구
pub const TOKEN_TIMEOUT_DETAILS: &str = "OneID token endpoint timed out";

/// OneID 토큰 교환 서비스
///
/// 커넥션 풀을 공유하는 `reqwest::Client` 하나만 보유합니다.
/// 공급자 설정은 호출마다 인자로 주입받습니다.
#[derive(Debug, Clone)]
pub struct OneIdAuthService {
    client: reqwest::Client,
}

impl OneIdAuthService {
    /// 외부 호출 1회당 `timeout` 제한을 두는 서비스를 생성합니다.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("OneID HTTP 클라이언트 생성 실패")?;

        Ok(Self { client })
    }

    /// 인가 코드를 토큰으로 교환하고 사용자 정보를 덧붙여 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 토큰 URL/클라이언트 자격 증명 누락 (네트워크 호출 없음)
    /// * `AppError::UpstreamTokenError` - 토큰 엔드포인트가 2xx 이외로 응답했거나 시간 초과
    /// * `AppError::UpstreamProtocolError` - 성공 응답에 `access_token`이 없음
    /// * `AppError::InternalError` - 그 밖의 전송/파싱 오류
    ///
    /// 사용자 정보 조회 실패는 에러가 아니며 `user`가 비어 있는 결과로 이어집니다.
    pub async fn exchange_code(
        &self,
        config: &OneIdConfig,
        grant: AuthorizationCodeGrant,
    ) -> AppResult<TokenExchangeResult> {
        let credentials = config.client_credentials()?;

        let form = build_token_form(&grant, &credentials);
        let token = self.request_token(credentials.token_url, &form).await?;

        let access_token = token
            .access_token()
            .map(str::to_string)
            .ok_or_else(|| {
                log::warn!("OneID 토큰 응답에 access_token이 없습니다");
                AppError::UpstreamProtocolError("access_token 누락".to_string())
            })?;
        let expires_in_seconds = token.expires_in_seconds();
        let id_token = token.id_token().map(str::to_string);

        let user = match self.fetch_user_info(config.userinfo_url(), &access_token).await {
            UserInfoOutcome::Unavailable(reason) => {
                log::debug!("OneID 사용자 정보 생략: {}", reason);
                None
            }
            outcome => outcome.into_user(),
        };

        Ok(TokenExchangeResult {
            access_token,
            id_token,
            expires_in_seconds,
            user,
        })
    }

    async fn request_token(
        &self,
        token_url: &str,
        form: &[(&'static str, &str)],
    ) -> AppResult<OneIdTokenResponse> {
        let response = self
            .client
            .post(token_url)
            .form(form)
            .send()
            .await
            .map_err(token_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            log::warn!("OneID 토큰 교환 실패: status={}", status);
            return Err(AppError::UpstreamTokenError(details));
        }

        // 클라이언트 타임아웃은 본문 수신까지 포함합니다.
        let body = response.text().await.map_err(token_transport_error)?;

        serde_json::from_str::<OneIdTokenResponse>(&body).context("OneID 토큰 응답 파싱 실패")
    }

    /// 사용자 정보를 조회합니다. 어떤 실패도 에러로 전파하지 않습니다.
    async fn fetch_user_info(&self, userinfo_url: Option<&str>, access_token: &str) -> UserInfoOutcome {
        let Some(url) = userinfo_url else {
            return UserInfoOutcome::NotConfigured;
        };

        let response = match self.client.get(url).bearer_auth(access_token).send().await {
            Ok(response) => response,
            Err(e) => return UserInfoOutcome::Unavailable(format!("요청 실패: {}", e)),
        };

        let status = response.status();
        if !status.is_success() {
            return UserInfoOutcome::Unavailable(format!("status {}", status));
        }

        match response.json::<Claims>().await {
            Ok(claims) => UserInfoOutcome::Fetched(normalize_user(claims)),
            Err(e) => UserInfoOutcome::Unavailable(format!("응답 파싱 실패: {}", e)),
        }
    }
}

/// 토큰 엔드포인트 전송 오류를 분류합니다. 시간 초과만 공급자 오류로 취급합니다.
fn token_transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        log::warn!("OneID 토큰 요청 시간 초과");
        AppError::UpstreamTokenError(TOKEN_TIMEOUT_DETAILS.to_string())
    } else {
        AppError::InternalError(format!("OneID 토큰 요청 실패: {}", e))
    }
}

/// 토큰 엔드포인트로 보낼 폼 필드를 구성합니다.
///
/// `code_verifier`는 값이 있을 때만 포함하며, 빈 값으로 보내지 않습니다.
pub fn build_token_form<'a>(
    grant: &'a AuthorizationCodeGrant,
    credentials: &ClientCredentials<'a>,
) -> Vec<(&'static str, &'a str)> {
    let mut form = vec![
        ("grant_type", "authorization_code"),
        ("code", grant.code.as_str()),
        ("redirect_uri", grant.redirect_uri.as_str()),
        ("client_id", credentials.client_id),
        ("client_secret", credentials.client_secret),
    ];

    if let Some(verifier) = grant.code_verifier.as_deref() {
        form.push(("code_verifier", verifier));
    }

    form
}
