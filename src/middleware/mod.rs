//! # 미들웨어 / 추출기(Extractor) 모듈
//!
//! - `request_context`: 요청에서 메서드, 경로, User-Agent, 클라이언트 IP를 뽑는 추출기
//! - `panic`: 핸들러 panic을 500 JSON 응답으로 바꾸는 catch-panic 콜백

pub mod panic;
pub mod request_context;

pub use panic::handle_panic;
pub use request_context::{header_or, RequestContext};
