//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! OneID 릴레이 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 각 에러 종류를
//! 클라이언트와 약속된 HTTP 상태 코드와 JSON 본문으로 변환합니다.
//!
//! | 에러 | 상태 | 응답 본문 |
//! |------|------|-----------|
//! | `ValidationError` | 400 | `{"error": "code and redirectUri are required"}` |
//! | `ConfigurationError` | 500 | `{"error": "Server misconfigured: check env vars"}` |
//! | `UpstreamTokenError` | 502 | `{"error": "Token exchange failed", "details": "..."}` |
//! | `UpstreamProtocolError` | 502 | `{"error": "No access_token in response"}` |
//! | `InternalError` | 500 | `{"error": "Internal error"}` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, ErrorContext};
//!
//! async fn read_body(response: reqwest::Response) -> Result<String, AppError> {
//!     let body = response.text().await.context("응답 본문 읽기 실패")?;
//!     Ok(body)
//! }
//! ```

use actix_web::http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// 필수 입력값 누락 시 클라이언트에게 반환하는 메시지
pub const MISSING_FIELDS_MESSAGE: &str = "code and redirectUri are required";

/// 서버 설정 누락 시 클라이언트에게 반환하는 메시지
pub const MISCONFIGURED_MESSAGE: &str = "Server misconfigured: check env vars";

/// 애플리케이션 전역 에러 타입
///
/// 토큰 교환 플로우에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 서버 설정 누락 에러 (500 Internal Server Error)
    ///
    /// 내부 메시지는 누락된 환경 변수 이름을 담으며 로그에만 남습니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 공급자가 코드 교환을 거부한 경우 (502 Bad Gateway)
    ///
    /// 공급자의 원본 응답 본문을 그대로 담아 진단용으로 노출합니다.
    #[error("Upstream token error: {0}")]
    UpstreamTokenError(String),

    /// 공급자가 성공으로 응답했지만 페이로드가 잘못된 경우 (502 Bad Gateway)
    #[error("Upstream protocol error: {0}")]
    UpstreamProtocolError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 상세 내용은 서버 로그에만 기록되고 응답에는 포함되지 않습니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamTokenError(_) | AppError::UpstreamProtocolError(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::ConfigurationError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 클라이언트와 약속된 JSON 응답으로 변환합니다.
    /// 내부 에러의 상세 내용은 이 지점에서 로그로만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(message) => json!({ "error": message }),
            AppError::ConfigurationError(_) => json!({ "error": MISCONFIGURED_MESSAGE }),
            AppError::UpstreamTokenError(details) => json!({
                "error": "Token exchange failed",
                "details": details
            }),
            AppError::UpstreamProtocolError(_) => json!({ "error": "No access_token in response" }),
            AppError::InternalError(detail) => {
                log::error!("oneid/token 내부 오류: {}", detail);
                json!({ "error": "Internal error" })
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
