//! CORS 미들웨어 구성
//!
//! `ALLOWED_ORIGINS` 허용 목록을 기준으로 교차 출처 요청을 판단합니다.
//!
//! - `Origin` 헤더가 없는 요청(서버 간 호출, 모바일 앱)은 항상 허용됩니다.
//! - 허용 목록이 비어 있으면 모든 Origin을 허용합니다.
//! - 그 외에는 목록에 정확히 일치하는 Origin만 허용하고, 나머지는 핸들러에 닿기 전에 거부합니다.

use actix_cors::Cors;
use actix_web::http::header;

/// 허용 목록으로 CORS 미들웨어를 구성합니다.
///
/// `HttpServer::new` 클로저 안에서 워커마다 한 번씩 호출됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors(&server_config.allowed_origins);
/// App::new().wrap(cors)
/// ```
pub fn configure_cors(allowed_origins: &[String]) -> Cors {
    let allowed = allowed_origins.to_vec();

    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .map(|origin| is_origin_allowed(&allowed, origin))
                .unwrap_or(false)
        })
        // 허용되지 않은 Origin은 핸들러 실행 전에 400으로 차단
        .block_on_origin_mismatch(true)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

pub fn is_origin_allowed(allowed_origins: &[String], origin: &str) -> bool {
    allowed_origins.is_empty() || allowed_origins.iter().any(|allowed| allowed == origin)
}
