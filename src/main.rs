//! OneID 릴레이 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 환경 변수에서 설정을 읽어 핸들러에 주입하고, CORS와 Rate Limiting을 적용합니다.

use std::io;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use oneid_relay_backend::config::{OneIdConfig, ServerConfig};
use oneid_relay_backend::middlewares::configure_cors;
use oneid_relay_backend::routes::configure_all_routes;
use oneid_relay_backend::services::oneid::OneIdAuthService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(message) => info!("{}", message),
        Err(message) => error!("{}", message),
    }

    info!("🚀 OneID 릴레이 서비스 시작중...");

    let server_config = ServerConfig::from_env();
    let oneid_config = OneIdConfig::from_env();

    if oneid_config.client_credentials().is_err() {
        warn!("⚠️ OneID 자격 증명이 완전하지 않습니다. 토큰 교환 요청은 500으로 응답합니다");
    }

    start_http_server(server_config, oneid_config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, HTTP 클라이언트 생성 실패, 포트 바인딩 실패
async fn start_http_server(server_config: ServerConfig, oneid_config: OneIdConfig) -> io::Result<()> {
    let bind_address = server_config.bind_address();

    let oneid_service = OneIdAuthService::new(oneid_config.http_timeout)
        .map_err(|e| io::Error::other(e.to_string()))?;
    let oneid_service = web::Data::new(oneid_service);
    let oneid_config = web::Data::new(oneid_config);

    // Rate Limiting 설정
    let rate_limit = &server_config.rate_limit;
    let governor_conf = GovernorConfigBuilder::default()
        .period(rate_limit.replenish_period())
        .burst_size(rate_limit.max_requests)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: {}초당 {}요청",
        rate_limit.window.as_secs(),
        rate_limit.max_requests
    );

    if server_config.allowed_origins.is_empty() {
        warn!("🌍 ALLOWED_ORIGINS가 비어 있어 모든 Origin을 허용합니다");
    } else {
        info!("🌍 CORS 허용 Origin: {:?}", server_config.allowed_origins);
    }

    info!("🌐 OneID backend listening on {}", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let allowed_origins = server_config.allowed_origins.clone();

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&allowed_origins);

        // 마지막 wrap이 가장 바깥쪽: NormalizePath → Logger → CORS → Rate Limiting
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(oneid_config.clone())
            .app_data(oneid_service.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=<name>` - `.env.<name>` 파일 로드
/// * 미설정 - 기본 `.env` 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과 메시지를 돌려주고, 기록은 호출자가 합니다.
/// 파일이 없어도 프로세스 환경 변수만으로 실행할 수 있습니다.
fn load_env_file() -> Result<String, String> {
    match std::env::var("PROFILE") {
        Ok(profile) if !profile.trim().is_empty() => {
            let filename = format!(".env.{}", profile.trim());
            dotenv::from_filename(&filename)
                .map(|_| format!("{} 파일 로드 됨", filename))
                .map_err(|e| format!("{} 파일 로드 실패: {}", filename, e))
        }
        _ => Ok(match dotenv() {
            Ok(_) => "기본 .env 파일 로드".to_string(),
            Err(_) => ".env 파일 없음, 프로세스 환경 변수 사용".to_string(),
        }),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
