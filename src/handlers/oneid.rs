//! OneID HTTP Handlers
//!
//! OneID 인가 플로우를 웹/모바일 클라이언트와 이어 주는 HTTP 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - **콜백 브리지**: `GET /auth/oneid/callback` - 앱 딥링크 리다이렉트 또는 안내 문구
//! - **토큰 교환**: `POST /api/oneid/token` - 인가 코드 → 토큰 + 정규화된 사용자
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};

use crate::config::OneIdConfig;
use crate::domain::dto::oneid::{CallbackQuery, CallbackTarget, TokenExchangeRequest};
use crate::errors::errors::AppError;
use crate::services::oneid::OneIdAuthService;

/// 웹 대상 콜백에 표시하는 안내 문구
pub const CALLBACK_ACK_MESSAGE: &str = "Code received. You can close this page.";

/// OneID 인가 콜백 브리지 핸들러
///
/// `target=app`이면 설정된 앱 스킴의 딥링크로 302 리다이렉트하고,
/// 그 외에는 브라우저에 안내 문구를 보여줍니다. 이 단계에서는 어떤 요청도 거부하지 않습니다.
///
/// # Endpoint
/// `GET /auth/oneid/callback?code={code}&state={state}&target={app|web}`
#[get("/callback")]
pub async fn oneid_callback(
    config: web::Data<OneIdConfig>,
    pairs: web::Query<Vec<(String, String)>>,
) -> HttpResponse {
    let query = CallbackQuery::from_pairs(pairs.into_inner());

    match query.target() {
        CallbackTarget::App => {
            let location = build_app_redirect(
                &config.app_scheme,
                query.code.as_deref(),
                query.state.as_deref(),
            );

            HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish()
        }
        CallbackTarget::Web => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(CALLBACK_ACK_MESSAGE),
    }
}

/// 모바일 딥링크 URI를 만듭니다. 누락된 값은 빈 문자열로 인코딩됩니다.
pub fn build_app_redirect(scheme: &str, code: Option<&str>, state: Option<&str>) -> String {
    format!(
        "{}://auth/oneid/callback?code={}&state={}",
        scheme,
        urlencoding::encode(code.unwrap_or_default()),
        urlencoding::encode(state.unwrap_or_default())
    )
}

/// OneID 토큰 교환 핸들러
///
/// 인가 코드를 토큰으로 교환하고, 설정된 경우 사용자 정보를 정규화해 함께 반환합니다.
/// 에러 응답 형식은 [`AppError`]의 `ResponseError` 구현을 따릅니다.
///
/// # Endpoint
/// `POST /api/oneid/token`
///
/// ```json
/// { "code": "...", "redirectUri": "...", "codeVerifier": "..." }
/// ```
#[post("/token")]
pub async fn exchange_token(
    config: web::Data<OneIdConfig>,
    service: web::Data<OneIdAuthService>,
    payload: web::Json<TokenExchangeRequest>,
) -> Result<HttpResponse, AppError> {
    let grant = payload.into_inner().into_grant()?;

    let result = service.exchange_code(&config, grant).await?;

    log::info!(
        "OneID 토큰 교환 성공 (사용자 정보 포함: {})",
        result.user.is_some()
    );
    Ok(HttpResponse::Ok().json(result))
}
