//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "healthy", "timestamp": "...", "uptime_seconds": 42 }`
//!
//! 주로 다음 용도로 사용됩니다:
//! - 로드밸런서의 서버 상태 확인
//! - 컨테이너 오케스트레이터(Docker, Kubernetes)의 liveness probe

use axum::{
    extract::State,
    http::{Method, Uri},
    Json,
};

use crate::{
    models::HealthResponse,
    routes::AppState,
    services::utc_timestamp,
};

/// `GET /health` — 서버 상태를 확인합니다.
///
/// 외부 의존성이 없으므로 이 핸들러는 실패하지 않습니다.
/// `timestamp`와 `uptime_seconds`는 호출 시점에 계산됩니다.
pub async fn health_check(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Json<HealthResponse> {
    tracing::info!("Health check: {} {}", method, uri.path());

    Json(HealthResponse {
        status: "healthy",
        timestamp: utc_timestamp(),
        uptime_seconds: state.started.uptime_seconds(),
    })
}
