//! 핸들러 panic → 500 JSON 응답
//!
//! `tower_http::catch_panic::CatchPanicLayer::custom(handle_panic)`으로 등록합니다.
//! panic 메시지는 error 로그에만 남고, 응답 본문은 일반적인 500 메시지입니다.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// panic payload를 사람이 읽을 수 있는 문자열로 꺼낸 뒤
/// `AppError::Internal`로 감싸 응답을 만듭니다.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    // panic!("...")은 &str, panic!("{}", x)는 String payload를 만듭니다.
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", details)).into_response()
}
