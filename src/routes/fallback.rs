//! 라우트에 매칭되지 않은 요청 처리

use crate::error::AppError;

/// 존재하지 않는 경로 → 404
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// 경로는 있지만 메서드가 다름 (예: `POST /health`) → 405
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
