//! # Data Transfer Objects
//!
//! HTTP 경계에서 오가는 요청/응답 구조체를 정의합니다.
//! 외부 계약(쿼리 파라미터 이름, JSON 키)은 이 모듈의 serde 속성으로 고정됩니다.

pub mod oneid;

pub use oneid::*;
