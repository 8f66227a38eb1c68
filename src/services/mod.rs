//! # 서비스 모듈
//!
//! 핸들러가 사용하는 순수 로직과 환경 조회를 모아둔 모듈입니다.
//! - `host`: 호스트 정보 제공자 (`HostInfo` 트레이트)
//! - `uptime`: 시작 시각, 가동 시간 계산, 타임스탬프 포맷

pub mod host;
pub mod uptime;

pub use host::{HostInfo, OsHostInfo};
pub use uptime::{format_uptime, utc_timestamp, ServiceStartTime};
