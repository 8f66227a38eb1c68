//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 5000)
//! - `DEBUG`: 디버그 로깅 여부 (기본값: false)
//!
//! 이 값들은 서버가 어떻게 바인딩/실행되는지만 결정하며,
//! 핸들러의 동작에는 영향을 주지 않습니다.

use std::env;
use thiserror::Error;

/// 설정 로딩 중 발생할 수 있는 에러
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` 값이 0~65535 범위의 정수가 아님
    #[error("Invalid PORT value: {0:?}")]
    InvalidPort(String),
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
    /// true이면 기본 로그 레벨이 debug로 올라갑니다
    pub debug: bool,
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 읽습니다.
    ///
    /// 테스트에서 실제 환경변수를 건드리지 않기 위해 분리했습니다.
    /// `lookup`은 키를 받아 값이 있으면 `Some`을 돌려주는 클로저입니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        // 포트는 문자열 → u16 변환이 필요합니다.
        // 잘못된 값은 조용히 무시하지 않고 시작 단계에서 에러로 알립니다.
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 5000,
        };

        // "true"(대소문자 무시)만 참으로 취급합니다. "1", "yes" 등은 false.
        let debug = lookup("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self { host, port, debug })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEBUG", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.debug);
    }

    #[test]
    fn test_debug_only_accepts_true() {
        for value in ["1", "yes", "false", ""] {
            let config = Config::from_lookup(lookup_from(&[("DEBUG", value)])).unwrap();
            assert!(!config.debug, "DEBUG={value:?} should be false");
        }
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));

        let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
