//! OneID 사용자 모델
//!
//! 공급자 클레임에서 매 요청마다 새로 만들어지며 어디에도 저장되지 않습니다.

use serde::Serialize;
use serde_json::{Map, Value};

/// 공급자 클레임 집합
pub type Claims = Map<String, Value>;

/// 정규화된 OneID 사용자
///
/// JSON 키는 기존 클라이언트 계약을 따릅니다
/// (`sub`, `givenName`, `familyName`, `phoneNumber`, `picture`, `raw` 등).
/// 값이 없는 선택 필드는 직렬화에서 생략됩니다. `name`은 항상 포함되며 이름 정보가 없으면 빈 문자열입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedUser {
    #[serde(rename = "sub", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "picture", skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// 공급자 고유 필드를 위해 원본 클레임을 그대로 보존합니다.
    #[serde(rename = "raw")]
    pub raw_claims: Claims,
}

/// 사용자 정보 조회 결과
///
/// 사용자 정보 조회는 토큰 교환의 부가 단계입니다.
/// 실패해도 상위 작업을 중단하지 않으므로 `AppError` 대신 이 타입으로 결과를 구분합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum UserInfoOutcome {
    /// 조회와 정규화에 성공함
    Fetched(NormalizedUser),
    /// 사용자 정보 엔드포인트가 설정되지 않음
    NotConfigured,
    /// 조회에 실패했지만 교환은 계속 진행함 (사유는 로그용)
    Unavailable(String),
}

impl UserInfoOutcome {
    pub fn into_user(self) -> Option<NormalizedUser> {
        match self {
            UserInfoOutcome::Fetched(user) => Some(user),
            UserInfoOutcome::NotConfigured | UserInfoOutcome::Unavailable(_) => None,
        }
    }
}
