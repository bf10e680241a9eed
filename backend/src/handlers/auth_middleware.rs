use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use serde_json::json;
use tracing::{debug, warn};

use crate::AppState;

pub type SubmissionLimiter = DefaultKeyedRateLimiter<String>;

pub fn submission_limiter(per_minute: NonZeroU32) -> SubmissionLimiter {
    RateLimiter::keyed(Quota::per_minute(per_minute))
}

/// Drops clients whose quota has fully replenished so the keyed store stays bounded.
pub fn prune_submission_limiter(limiter: &SubmissionLimiter) {
    let before = limiter.len();
    limiter.retain_recent();
    limiter.shrink_to_fit();
    debug!("Pruned submission limiter from {} to {} clients", before, limiter.len());
}

#[derive(Debug)]
pub struct AuthError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

/// Guards the admin routes with the static `ADMIN_TOKEN`.
/// Without a configured token the routes do not exist as far as callers can tell.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let Some(expected) = state.admin_token.as_deref() else {
        return Err(AuthError {
            status: StatusCode::NOT_FOUND,
            message: "Not found".to_string(),
        });
    };

    let token = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(AuthError {
            status: StatusCode::UNAUTHORIZED,
            message: "No authorization token provided".to_string(),
        })?;

    if !constant_time_eq(token.as_bytes(), expected.as_bytes()) {
        warn!("Rejected admin request with invalid token");
        return Err(AuthError {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid token".to_string(),
        });
    }

    Ok(next.run(request).await)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// The caller's address: first hop of `X-Forwarded-For` when a trusted proxy sets it,
/// otherwise the socket peer. Without a proxy the header is client controlled and ignored.
pub fn client_key(request: &Request<Body>, trust_proxy: bool) -> String {
    let forwarded = trust_proxy
        .then(|| request.headers().get("X-Forwarded-For"))
        .flatten()
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn rate_limit_submissions(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let key = client_key(&request, state.trust_proxy);
    if state.submission_limiter.check_key(&key).is_err() {
        warn!("Rate limited lead submission from {}", key);
        return Err(AuthError {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "Too many requests, please try again in a minute.".to_string(),
        });
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonzero_ext::nonzero;

    fn forwarded_request() -> Request<Body> {
        let mut request = Request::builder()
            .header("X-Forwarded-For", "203.0.113.9, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
        request
    }

    #[test]
    fn forwarded_header_wins_behind_trusted_proxy() {
        assert_eq!(client_key(&forwarded_request(), true), "203.0.113.9");
    }

    #[test]
    fn forwarded_header_is_ignored_without_trusted_proxy() {
        assert_eq!(client_key(&forwarded_request(), false), "127.0.0.1");
    }

    #[test]
    fn falls_back_to_peer_address() {
        let mut request = Request::builder().body(Body::empty()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 168, 1, 20], 4000))));
        assert_eq!(client_key(&request, true), "192.168.1.20");
    }

    #[test]
    fn pruning_keeps_clients_that_are_still_limited() {
        let limiter = submission_limiter(nonzero!(1u32));
        let client = "198.51.100.7".to_string();
        assert!(limiter.check_key(&client).is_ok());
        prune_submission_limiter(&limiter);
        assert_eq!(limiter.len(), 1);
        assert!(limiter.check_key(&client).is_err());
    }

    #[test]
    fn pruning_an_empty_limiter_is_a_no_op() {
        let limiter = submission_limiter(nonzero!(5u32));
        prune_submission_limiter(&limiter);
        assert!(limiter.is_empty());
    }

    #[test]
    fn limiter_tracks_clients_separately() {
        let limiter = submission_limiter(nonzero!(2u32));
        let a = "198.51.100.1".to_string();
        let b = "198.51.100.2".to_string();
        assert!(limiter.check_key(&a).is_ok());
        assert!(limiter.check_key(&a).is_ok());
        assert!(limiter.check_key(&a).is_err());
        assert!(limiter.check_key(&b).is_ok());
    }

    #[test]
    fn token_comparison() {
        assert!(constant_time_eq(b"secret", b"secret"));
        assert!(!constant_time_eq(b"secret", b"secreT"));
        assert!(!constant_time_eq(b"secret", b"secret-longer"));
    }
}
