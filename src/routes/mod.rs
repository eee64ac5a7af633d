//! API 라우트 설정 모듈
//!
//! OneID 연동 엔드포인트를 기능별 스코프로 묶어 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `GET /auth/oneid/callback` - 인가 콜백 브리지 (브라우저 대상)
//! - `POST /api/oneid/token` - 인가 코드 교환 (API 호출)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(oneid_config))
//!     .app_data(web::Data::new(oneid_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::errors::errors::{AppError, MISSING_FIELDS_MESSAGE};
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 핸들러는 `web::Data<OneIdConfig>`와 `web::Data<OneIdAuthService>`가
/// 애플리케이션에 등록되어 있다고 가정합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_oneid_routes(cfg);
}

/// OneID 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /auth/oneid/callback` - `target=app`이면 앱 딥링크로 302, 아니면 안내 문구
/// - `POST /api/oneid/token` - 토큰 교환 및 사용자 정보 정규화
///
/// # Examples
///
/// ```bash
/// # 모바일 앱으로 돌려보내기
/// curl -i "http://localhost:8787/auth/oneid/callback?code=abc&state=xyz&target=app"
///
/// # 토큰 교환
/// curl -X POST http://localhost:8787/api/oneid/token \
///   -H "Content-Type: application/json" \
///   -d '{"code":"abc","redirectUri":"https://app.example/callback"}'
/// ```
fn configure_oneid_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth/oneid")
            .service(handlers::oneid::oneid_callback)
    );

    cfg.service(
        web::scope("/api/oneid")
            .app_data(token_json_config())
            .service(handlers::oneid::exchange_token)
    );
}

/// 잘못된 JSON 본문은 필수값 누락과 같은 400 응답으로 돌려줍니다.
fn token_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("토큰 교환 요청 본문 파싱 실패: {}", err);
        AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8787/health
/// # {"ok":true}
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateLimitConfig;
    use crate::middlewares::configure_cors;
    use actix_governor::{Governor, GovernorConfigBuilder};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use serde_json::Value;
    use std::net::SocketAddr;
    use std::time::Duration;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "ok": true }));
    }

    #[actix_web::test]
    async fn test_rate_limit_per_client() {
        let rate_limit = RateLimitConfig {
            window: Duration::from_secs(60),
            max_requests: 2,
        };
        let governor_conf = GovernorConfigBuilder::default()
            .period(rate_limit.replenish_period())
            .burst_size(rate_limit.max_requests)
            .finish()
            .unwrap();
        let app = test::init_service(
            App::new()
                .wrap(Governor::new(&governor_conf))
                .configure(configure_all_routes),
        )
        .await;

        let limited: SocketAddr = "203.0.113.7:40000".parse().unwrap();
        let other: SocketAddr = "203.0.113.8:40000".parse().unwrap();

        for (peer, expected) in [
            (limited, StatusCode::OK),
            (limited, StatusCode::OK),
            (limited, StatusCode::TOO_MANY_REQUESTS),
            (other, StatusCode::OK),
        ] {
            let req = test::TestRequest::get()
                .uri("/health")
                .peer_addr(peer)
                .to_request();
            let status = match test::try_call_service(&app, req).await {
                Ok(resp) => resp.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            assert_eq!(status, expected, "peer {}", peer);
        }
    }

    #[actix_web::test]
    async fn test_preflight_does_not_consume_rate_limit() {
        let governor_conf = GovernorConfigBuilder::default()
            .period(Duration::from_secs(60))
            .burst_size(1)
            .finish()
            .unwrap();
        let app = test::init_service(
            App::new()
                .wrap(Governor::new(&governor_conf))
                .wrap(configure_cors(&["https://app.example".to_string()]))
                .configure(configure_all_routes),
        )
        .await;
        let peer: SocketAddr = "203.0.113.9:40000".parse().unwrap();

        for _ in 0..3 {
            let req = test::TestRequest::default()
                .method(actix_web::http::Method::OPTIONS)
                .uri("/api/oneid/token")
                .peer_addr(peer)
                .insert_header((header::ORIGIN, "https://app.example"))
                .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert!(resp.status().is_success());
        }

        let req = test::TestRequest::get()
            .uri("/health")
            .peer_addr(peer)
            .insert_header((header::ORIGIN, "https://app.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
