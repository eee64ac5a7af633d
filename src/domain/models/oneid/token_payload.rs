use serde::Deserialize;
use serde_json::Value;

/// OneID 토큰 엔드포인트 성공 응답
///
/// 공급자가 돌려주는 필드 중 릴레이가 사용하는 것만 매핑합니다.
/// 모든 필드를 원본 JSON 값으로 받아, 타입이 맞지 않는 선택 필드가 교환 전체를 실패시키지 않게 합니다.
/// `access_token` 누락 여부는 서비스 계층에서 판단합니다.
#[derive(Debug, Default, Deserialize)]
pub struct OneIdTokenResponse {
    #[serde(default)]
    pub access_token: Option<Value>,

    #[serde(default)]
    pub id_token: Option<Value>,

    /// 숫자 또는 숫자 문자열로 오는 공급자가 있어 원본 값으로 받습니다.
    #[serde(default)]
    pub expires_in: Option<Value>,
}

impl OneIdTokenResponse {
    /// 비어 있지 않은 문자열 액세스 토큰
    pub fn access_token(&self) -> Option<&str> {
        non_empty_str(self.access_token.as_ref())
    }

    /// 비어 있지 않은 문자열 ID 토큰. 다른 타입은 없는 것으로 봅니다.
    pub fn id_token(&self) -> Option<&str> {
        non_empty_str(self.id_token.as_ref())
    }

    /// 만료 시간(초). 음수나 해석할 수 없는 값은 버립니다.
    pub fn expires_in_seconds(&self) -> Option<u64> {
        match self.expires_in.as_ref()? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value?.as_str().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> OneIdTokenResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_full_payload() {
        let payload = parse(r#"{"access_token":"T","id_token":"I","expires_in":3600,"token_type":"Bearer"}"#);

        assert_eq!(payload.access_token(), Some("T"));
        assert_eq!(payload.id_token(), Some("I"));
        assert_eq!(payload.expires_in_seconds(), Some(3600));
    }

    #[test]
    fn test_empty_object_has_no_access_token() {
        let payload = parse("{}");

        assert_eq!(payload.access_token(), None);
        assert_eq!(payload.expires_in_seconds(), None);
    }

    #[test]
    fn test_empty_access_token_is_missing() {
        assert_eq!(parse(r#"{"access_token":""}"#).access_token(), None);
    }

    #[test]
    fn test_mistyped_tokens_are_ignored() {
        let payload = parse(r#"{"access_token":"T","id_token":123,"expires_in":3600}"#);

        assert_eq!(payload.access_token(), Some("T"));
        assert_eq!(payload.id_token(), None);
        assert_eq!(parse(r#"{"access_token":42}"#).access_token(), None);
    }

    #[test]
    fn test_expires_in_variants() {
        assert_eq!(parse(r#"{"expires_in":"1800"}"#).expires_in_seconds(), Some(1800));
        assert_eq!(parse(r#"{"expires_in":59.6}"#).expires_in_seconds(), Some(60));
        assert_eq!(parse(r#"{"expires_in":-5}"#).expires_in_seconds(), None);
        assert_eq!(parse(r#"{"expires_in":null}"#).expires_in_seconds(), None);
        assert_eq!(parse(r#"{"expires_in":"soon"}"#).expires_in_seconds(), None);
    }
}
