//! # 에러 처리 모듈
//!
//! 핸들러에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 고정된 JSON 응답으로 자동 변환
//!
//! 모든 에러 응답 본문은 `{ "error": ..., "message": ... }` 두 키만 가집니다.
//! 내부 에러의 상세 내용은 로그에만 남고 클라이언트에는 절대 노출되지 않습니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 일치하는 라우트가 없음 (HTTP 404)
    #[error("Endpoint does not exist")]
    NotFound,

    /// 경로는 있지만 해당 HTTP 메서드를 지원하지 않음 (HTTP 405)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 메타데이터 수집/응답 생성 중 예기치 못한 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 호스트 정보 조회 중 발생한 OS 오류 (HTTP 500)
    /// #[from]: std::io::Error → AppError::Io 자동 변환
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 404/405는 예상된 상황이므로 error 레벨로 기록하지 않습니다.
    /// 500 계열은 실제 원인을 error 레벨 로그에 남기고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::NotFound => {
                tracing::debug!("No route matched");
                (StatusCode::NOT_FOUND, "Not Found", "Endpoint does not exist")
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed",
                "The method is not allowed for the requested URL.",
            ),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal server error: {}", msg);
                internal_error()
            }
            AppError::Io(ref e) => {
                tracing::error!("Internal server error (io): {}", e);
                internal_error()
            }
        };

        let body = Json(json!({
            "error": error,
            "message": message
        }));

        (status, body).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, &'static str) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        "An unexpected error occurred",
    )
}
