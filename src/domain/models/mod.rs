//! # Domain Models
//!
//! 공급자 응답과 정규화된 사용자처럼 한 요청 안에서만 존재하는 모델을 정의합니다.

pub mod oneid;

pub use oneid::*;
