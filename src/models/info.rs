//! `GET /` 응답 본문(ResponseEnvelope)의 구조체들
//!
//! 필드 순서가 곧 JSON 키 순서입니다 (serde는 선언 순서대로 직렬화합니다).

use serde::Serialize;

/// 최상위 응답. 정확히 다섯 개의 키를 가집니다.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
    pub endpoints: Vec<Endpoint>,
}

/// 서비스 식별 정보 (배포 단위의 고정 상수)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

impl ServiceInfo {
    pub const fn current() -> Self {
        Self {
            name: "devops-info-service",
            // Cargo.toml의 version 값을 컴파일 시점에 가져옵니다.
            version: env!("CARGO_PKG_VERSION"),
            description: "DevOps course info service",
            framework: "Axum",
        }
    }
}

/// 호스트 정보. `services::host::HostInfo` 구현체가 채웁니다.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub rust_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuntimeInfo {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    /// 항상 "UTC"
    pub timezone: &'static str,
}

/// 이번 요청의 에코(echo)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// 이 서비스가 제공하는 엔드포인트 목록 (순서 고정)
pub const ENDPOINTS: [Endpoint; 2] = [
    Endpoint {
        path: "/",
        method: "GET",
        description: "Service information",
    },
    Endpoint {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
];
