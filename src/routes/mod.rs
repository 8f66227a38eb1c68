//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `info`: `GET /` 서비스 정보
//! - `health`: `GET /health` 헬스체크
//! - `fallback`: 404 / 405 처리

pub mod fallback;
pub mod health;
pub mod info;

pub use fallback::*;
pub use health::*;
pub use info::*;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    middleware::handle_panic,
    services::{HostInfo, ServiceStartTime},
};

/// 모든 핸들러가 공유하는 읽기 전용 상태
///
/// 두 필드 모두 불변입니다. `Arc`는 참조 카운트만 늘리므로
/// 요청마다 `clone()` 되어도 실제 데이터는 복제되지 않습니다.
#[derive(Clone)]
pub struct AppState {
    /// 프로세스 시작 시각 (main에서 한 번 기록)
    pub started: ServiceStartTime,
    /// 호스트 정보 제공자. 테스트에서는 가짜 구현체로 교체됩니다.
    pub host: Arc<dyn HostInfo>,
}

impl AppState {
    pub fn new(started: ServiceStartTime, host: Arc<dyn HostInfo>) -> Self {
        Self { started, host }
    }
}

/// 애플리케이션 라우터를 만듭니다.
///
/// 레이어 순서: 바깥쪽부터 TraceLayer → CatchPanicLayer → 라우트.
/// 따라서 panic으로 만들어진 500 응답도 trace 로그에 기록됩니다.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
