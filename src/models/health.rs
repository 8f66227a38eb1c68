use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// 항상 "healthy"
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
}
