//! OneID 요청 DTO
//!
//! 콜백 쿼리 파라미터와 토큰 교환 요청 본문을 매핑합니다.

use serde::Deserialize;
use validator::Validate;

use crate::errors::errors::{AppError, AppResult, MISSING_FIELDS_MESSAGE};

/// OneID 인가 콜백 쿼리 파라미터 구조체
///
/// 콜백 단계에서는 어떤 값도 검증하지 않습니다.
/// 누락된 `code`/`state`는 빈 문자열로 딥링크에 실려 토큰 교환 단계에서 거부됩니다.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub target: Option<String>,
}

impl CallbackQuery {
    /// 디코딩된 쿼리 쌍에서 구성합니다. 같은 키가 반복되면 첫 값을 사용하고 모르는 키는 무시합니다.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = CallbackQuery::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "code" => &mut query.code,
                "state" => &mut query.state,
                "target" => &mut query.target,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }

    pub fn target(&self) -> CallbackTarget {
        CallbackTarget::from_param(self.target.as_deref())
    }
}

/// 콜백 이후 사용자를 돌려보낼 대상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackTarget {
    /// 모바일 앱 딥링크로 리다이렉트
    App,
    /// 브라우저에 안내 문구 표시
    Web,
}

impl CallbackTarget {
    /// 쿼리 값에서 대상을 결정합니다. 정확히 `app`일 때만 앱으로 보냅니다.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("app") => CallbackTarget::App,
            _ => CallbackTarget::Web,
        }
    }
}

/// 토큰 교환 요청 본문
///
/// ```json
/// { "code": "...", "redirectUri": "https://app.example/callback", "codeVerifier": "..." }
/// ```
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeRequest {
    #[validate(required, length(min = 1))]
    pub code: Option<String>,

    #[validate(required, length(min = 1))]
    pub redirect_uri: Option<String>,

    /// PKCE code verifier (선택)
    pub code_verifier: Option<String>,
}

impl TokenExchangeRequest {
    /// 요청을 검증하고 네트워크 호출에 사용할 인가 코드 그랜트로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `code` 또는 `redirectUri`가 없거나 비어 있을 때
    pub fn into_grant(self) -> AppResult<AuthorizationCodeGrant> {
        self.validate()
            .map_err(|_| AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()))?;

        match (self.code, self.redirect_uri) {
            (Some(code), Some(redirect_uri)) => Ok(AuthorizationCodeGrant {
                code,
                redirect_uri,
                code_verifier: self.code_verifier.filter(|v| !v.is_empty()),
            }),
            _ => Err(AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// 검증을 통과한 인가 코드 그랜트
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationCodeGrant {
    pub code: String,
    pub redirect_uri: String,
    pub code_verifier: Option<String>,
}
