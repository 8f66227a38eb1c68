//! # DevOps Info Service 진입점
//!
//! 이 파일은 애플리케이션의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 설정(HOST, PORT, DEBUG) 읽기
//! 3. 로깅(tracing) 초기화
//! 4. 시작 시각 기록
//! 5. 라우터 구성
//! 6. HTTP 서버 시작 (Ctrl+C / SIGTERM 시 정상 종료)

mod config;
mod error;
mod middleware;
mod models;
mod routes;
mod services;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use config::Config;
use routes::AppState;
use services::{OsHostInfo, ServiceStartTime};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 시작 시각 기록 ──
    // uptime의 기준점입니다. 이후 절대 변경되지 않습니다.
    let started = ServiceStartTime::capture();

    // ── 2단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 3단계: 설정 로딩 ──
    // 로깅보다 먼저 읽어야 DEBUG 값으로 기본 로그 레벨을 정할 수 있습니다.
    let config = Config::from_env()?;

    // ── 4단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수가 있으면 그 값을 우선합니다.
    let default_filter = if config.debug {
        "devops_info_service=debug,tower_http=debug,axum=debug"
    } else {
        "devops_info_service=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting DevOps Info Service on {}:{} (debug={})",
        config.host,
        config.port,
        config.debug
    );
    tracing::debug!("Service start time: {}", started.started_at());

    // ── 5단계: 애플리케이션 상태 & 라우터 ──
    let state = AppState::new(started, Arc::new(OsHostInfo));
    let app = routes::router(state);

    // ── 6단계: 서버 시작 ──
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    // into_make_service_with_connect_info: 핸들러에서 소켓 상대 주소
    // (ConnectInfo<SocketAddr>)를 꺼낼 수 있게 합니다.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Ctrl+C 또는 (유닉스에서) SIGTERM을 기다립니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
