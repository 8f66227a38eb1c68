//! # 데이터 모델 모듈
//!
//! 응답 JSON의 모양을 정의하는 구조체들입니다.
//! - `info`: `GET /` 응답(ResponseEnvelope)과 그 하위 객체들
//! - `health`: `GET /health` 응답
//!
//! 모든 구조체는 `Serialize`만 derive합니다. 이 서비스는 요청 본문을 읽지 않습니다.

pub mod health;
pub mod info;

pub use health::*;
pub use info::*;
