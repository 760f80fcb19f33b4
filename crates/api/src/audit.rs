//! Best-effort audit trail recording for mutating handlers.
//!
//! Audit writes never fail the request that triggered them. A failed insert is
//! logged at `error` level and the handler proceeds as if it succeeded.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use staffdesk_core::types::DbId;
use staffdesk_db::models::audit::CreateAuditLog;
use staffdesk_db::repositories::AuditLogRepo;
use staffdesk_db::DbPool;

/// Client metadata attached to audit entries.
///
/// Extracted from request headers: the client IP comes from the first
/// `X-Forwarded-For` hop (falling back to `X-Real-IP`, as set by the reverse
/// proxy in front of the service), the user agent from `User-Agent`. Both
/// are optional; extraction never rejects a request.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestMeta {
    fn from_headers(headers: &HeaderMap) -> Self {
        let ip_address = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(|| {
                headers
                    .get("x-real-ip")
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
            });

        let user_agent = headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        RequestMeta {
            ip_address,
            user_agent,
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestMeta {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestMeta::from_headers(&parts.headers))
    }
}

/// Record an audit entry for a mutating action.
///
/// `old_values` and `new_values` are JSON snapshots of the affected entity
/// before and after the change; pass `None` for creates (old) and deletes (new).
pub async fn record(
    pool: &DbPool,
    meta: &RequestMeta,
    actor_id: DbId,
    action: &str,
    entity_type: &str,
    entity_id: Option<DbId>,
    old_values: Option<serde_json::Value>,
    new_values: Option<serde_json::Value>,
) {
    let entry = CreateAuditLog {
        actor_id: Some(actor_id),
        action: action.to_string(),
        entity_type: Some(entity_type.to_string()),
        entity_id,
        old_values,
        new_values,
        ip_address: meta.ip_address.clone(),
        user_agent: meta.user_agent.clone(),
    };

    if let Err(e) = AuditLogRepo::insert(pool, &entry).await {
        tracing::error!(
            action = %action,
            entity_type = %entity_type,
            error = %e,
            "Failed to record audit log entry"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                value.parse().unwrap(),
            );
        }
        map
    }

    #[test]
    fn forwarded_for_takes_the_first_hop() {
        let meta = RequestMeta::from_headers(&headers(&[
            ("x-forwarded-for", "203.0.113.9, 10.0.0.2"),
            ("x-real-ip", "10.0.0.2"),
            ("user-agent", "curl/8.5.0"),
        ]));
        assert_eq!(meta.ip_address.as_deref(), Some("203.0.113.9"));
        assert_eq!(meta.user_agent.as_deref(), Some("curl/8.5.0"));
    }

    #[test]
    fn real_ip_is_the_fallback() {
        let meta = RequestMeta::from_headers(&headers(&[("x-real-ip", "198.51.100.4")]));
        assert_eq!(meta.ip_address.as_deref(), Some("198.51.100.4"));
    }

    #[test]
    fn missing_headers_yield_none() {
        let meta = RequestMeta::from_headers(&HeaderMap::new());
        assert_eq!(meta.ip_address, None);
        assert_eq!(meta.user_agent, None);
    }

    #[test]
    fn empty_forwarded_for_is_ignored() {
        let meta = RequestMeta::from_headers(&headers(&[("x-forwarded-for", " ")]));
        assert_eq!(meta.ip_address, None);
    }
}
