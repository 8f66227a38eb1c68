//! # 가동 시간(Uptime) 서비스
//!
//! 프로세스 시작 시각을 한 번 기록하고, 그로부터 경과한 시간을 계산합니다.
//!
//! 이 모듈의 함수들:
//! - `ServiceStartTime::capture()`: 시작 시각 기록 (main에서 단 한 번 호출)
//! - `ServiceStartTime::uptime_seconds()`: 경과 시간(초, 내림)
//! - `format_uptime()`: 경과 초를 "2 hours, 0 minutes" 같은 문자열로 변환
//! - `utc_timestamp()`: 현재 시각을 ISO-8601 UTC 문자열로 포맷

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Instant;

/// 프로세스 시작 시각
///
/// `Copy` 타입이므로 `AppState`에 그대로 복제되어 모든 핸들러에 전달됩니다.
/// 한 번 만들어지면 절대 변경되지 않습니다 (전역 가변 상태 없음).
///
/// 경과 시간은 벽시계(wall clock)가 아닌 단조 시계(`Instant`)로 계산하므로,
/// 시스템 시간이 뒤로 조정되어도 uptime은 줄어들지 않습니다.
#[derive(Debug, Clone, Copy)]
pub struct ServiceStartTime {
    instant: Instant,
    started_at: DateTime<Utc>,
}

impl ServiceStartTime {
    /// 지금 이 순간을 시작 시각으로 기록합니다.
    pub fn capture() -> Self {
        Self {
            instant: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// 시작 시각의 벽시계 값 (UTC)
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// 지금까지 경과한 시간(초). 소수점 이하는 버립니다.
    pub fn uptime_seconds(&self) -> u64 {
        self.uptime_seconds_at(Instant::now())
    }

    /// `now` 시점 기준 경과 시간(초)
    ///
    /// `now`가 시작 시각보다 앞서더라도 0을 반환합니다 (saturating).
    pub fn uptime_seconds_at(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.instant).as_secs()
    }
}

/// 경과 초를 사람이 읽기 쉬운 문자열로 변환합니다.
///
/// 규칙:
/// - 시간(hour)이 0이면 시간 부분은 아예 생략합니다.
/// - 분(minute) 부분은 0이어도 항상 붙입니다.
/// - 초 단위는 표시하지 않습니다.
///
/// # 예시
/// ```text
/// 0    → "0 minutes"
/// 60   → "1 minute"
/// 3661 → "1 hour, 1 minute"
/// 7200 → "2 hours, 0 minutes"
/// ```
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    let mut parts = Vec::with_capacity(2);
    match hours {
        0 => {}
        1 => parts.push("1 hour".to_string()),
        n => parts.push(format!("{} hours", n)),
    }
    if minutes == 1 {
        parts.push("1 minute".to_string());
    } else {
        parts.push(format!("{} minutes", minutes));
    }

    parts.join(", ")
}

/// 시각을 `YYYY-MM-DDTHH:MM:SS.ffffff+00:00` 형식으로 포맷합니다.
///
/// `use_z = false`이므로 `Z` 대신 명시적인 `+00:00` 오프셋이 붙습니다.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// 현재 시각(UTC)의 ISO-8601 문자열
pub fn utc_timestamp() -> String {
    format_timestamp(Utc::now())
}
