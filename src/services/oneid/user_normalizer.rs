//! 공급자 클레임 정규화
//!
//! I/O가 없는 순수 함수입니다. 어떤 클레임이 빠져 있거나 타입이 달라도 실패하지 않습니다.
//!
//! | 필드 | 클레임 |
//! |------|--------|
//! | `subject` | `sub`, 없으면 `id` |
//! | `name` | `name`, 없으면 `given_name` + `family_name`, 둘 다 없으면 빈 문자열 |
//! | `given_name` / `family_name` | `given_name` / `family_name` |
//! | `phone_number` | `phone`, 없으면 `phone_number` |
//! | `email` / `picture_url` / `locale` | `email` / `picture` / `locale` |
//! | `raw_claims` | 원본 클레임 전체 |

use serde_json::Value;

use crate::domain::models::oneid::{Claims, NormalizedUser};

/// 클레임 집합을 정규화된 사용자로 변환합니다.
///
/// 빈 문자열 클레임은 없는 것으로 취급합니다.
pub fn normalize_user(claims: Claims) -> NormalizedUser {
    let given_name = text_claim(&claims, "given_name");
    let family_name = text_claim(&claims, "family_name");
    let name = text_claim(&claims, "name")
        .unwrap_or_else(|| join_name_parts(given_name.as_deref(), family_name.as_deref()));

    NormalizedUser {
        subject: identifier_claim(&claims, "sub").or_else(|| identifier_claim(&claims, "id")),
        name,
        given_name,
        family_name,
        phone_number: text_claim(&claims, "phone").or_else(|| text_claim(&claims, "phone_number")),
        email: text_claim(&claims, "email"),
        picture_url: text_claim(&claims, "picture"),
        locale: text_claim(&claims, "locale"),
        raw_claims: claims,
    }
}

fn text_claim(claims: &Claims, key: &str) -> Option<String> {
    claims
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

// 일부 공급자는 숫자 ID를 돌려준다
fn identifier_claim(claims: &Claims, key: &str) -> Option<String> {
    match claims.get(key)? {
        Value::Number(n) => Some(n.to_string()),
        _ => text_claim(claims, key),
    }
}

fn join_name_parts(given_name: Option<&str>, family_name: Option<&str>) -> String {
    [given_name, family_name]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}
