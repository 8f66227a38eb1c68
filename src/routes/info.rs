//! # 서비스 정보 핸들러
//!
//! ## 엔드포인트
//! - `GET /` → 서비스/시스템/런타임/요청 정보와 엔드포인트 목록
//!
//! 응답은 서로 독립적인 네 개의 하위 객체와 고정된 엔드포인트 목록으로 구성됩니다.

use axum::{extract::State, Json};

use crate::{
    error::AppError,
    middleware::RequestContext,
    models::*,
    routes::AppState,
    services::{format_uptime, utc_timestamp},
};

/// `GET /` — 서비스와 호스트에 대한 메타데이터를 반환합니다.
///
/// 호스트 정보 수집이 실패하면 `?`가 `AppError`를 그대로 전파하고,
/// 클라이언트는 일반적인 500 응답을 받습니다.
pub async fn service_info(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<InfoResponse>, AppError> {
    tracing::info!("Request received: {} {}", ctx.method, ctx.path);

    let system = state.host.system_info()?;
    let uptime = state.started.uptime_seconds();

    Ok(Json(InfoResponse {
        service: ServiceInfo::current(),
        system,
        runtime: RuntimeInfo {
            uptime_seconds: uptime,
            uptime_human: format_uptime(uptime),
            current_time: utc_timestamp(),
            timezone: "UTC",
        },
        request: ctx.into(),
        endpoints: ENDPOINTS.to_vec(),
    }))
}
