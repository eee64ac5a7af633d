use serde::Serialize;

use crate::domain::models::oneid::NormalizedUser;

/// 토큰 교환 성공 응답
///
/// `idToken`과 `expiresIn`은 공급자가 돌려주지 않으면 생략되고,
/// `user`는 사용자 정보 조회를 건너뛰었거나 실패했을 때 `null`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeResult {
    pub access_token: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    #[serde(rename = "expiresIn", skip_serializing_if = "Option::is_none")]
    pub expires_in_seconds: Option<u64>,

    pub user: Option<NormalizedUser>,
}
