use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header::USER_AGENT, request::Parts, HeaderMap},
};

use crate::models::RequestInfo;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// `GET /`이 그대로 돌려주는 요청 메타데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub user_agent: String,
    pub client_ip: String,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 실제 리스너의 ConnectInfo와 테스트의 MockConnectInfo 둘 다 처리됩니다.
        let peer = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(RequestContext {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            user_agent: header_or(&parts.headers, USER_AGENT.as_str(), "unknown"),
            client_ip: header_or(&parts.headers, X_FORWARDED_FOR, &peer),
        })
    }
}

impl From<RequestContext> for RequestInfo {
    fn from(ctx: RequestContext) -> Self {
        RequestInfo {
            client_ip: ctx.client_ip,
            user_agent: ctx.user_agent,
            method: ctx.method,
            path: ctx.path,
        }
    }
}

/// 헤더 값을 문자열로 돌려줍니다. 헤더가 없거나 비어 있거나
/// UTF-8이 아니면 `fallback`을 돌려줍니다. 헤더 이름은 대소문자를 구분하지 않습니다.
pub fn header_or(headers: &HeaderMap, name: &str, fallback: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
