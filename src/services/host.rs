//! # 호스트 정보 제공자(Host Info Provider)
//!
//! 호스트 이름, OS, CPU 수 같은 환경 의존적인 정보를 조회합니다.
//!
//! `HostInfo` 트레이트 뒤에 숨겨 두었기 때문에, 테스트에서는 실제 OS를
//! 건드리지 않는 가짜 구현체로 바꿔 끼울 수 있습니다.
//! 모든 구현체는 읽기 전용이며 여러 요청에서 동시에 호출해도 안전해야 합니다
//! (`Send + Sync`).

use crate::{error::AppError, models::SystemInfo};
use sysinfo::System;

/// 호스트 정보를 조회하는 읽기 전용 인터페이스
pub trait HostInfo: Send + Sync {
    /// 현재 호스트의 시스템 정보를 수집합니다.
    ///
    /// 실패하면 핸들러가 그대로 `?`로 전파하여 500 응답이 됩니다.
    fn system_info(&self) -> Result<SystemInfo, AppError>;
}

/// 실제 운영체제에서 정보를 읽는 구현체
#[derive(Debug, Default, Clone, Copy)]
pub struct OsHostInfo;

impl HostInfo for OsHostInfo {
    fn system_info(&self) -> Result<SystemInfo, AppError> {
        // available_parallelism()은 cgroup 제한 등을 반영한 논리 CPU 수입니다.
        // io::Error는 #[from] 덕분에 AppError::Io로 자동 변환됩니다.
        let cpu_count = std::thread::available_parallelism()?.get();

        Ok(SystemInfo {
            hostname: System::host_name()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
            platform: std::env::consts::OS.to_string(),
            platform_version: System::os_version().unwrap_or_default(),
            architecture: std::env::consts::ARCH.to_string(),
            cpu_count,
            rust_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
        })
    }
}
