//! Shared admin login and session handling.
//!
//! Credential checks use constant-time comparison to mitigate timing attacks.
//! Successful logins mint opaque session tokens kept in an in-process store;
//! there is deliberately no expiry or rate limiting for this single-admin site.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::{codes, ErrorDetails, ErrorResponse};

/// Header name for the admin session token.
pub const SESSION_HEADER: &str = "x-admin-token";

/// In-process store of active admin session tokens.
#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: RwLock<HashSet<String>>,
}

impl SessionStore {
    /// Mint a new session token.
    pub fn issue(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.tokens
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(token.clone());
        token
    }

    /// Check whether a token belongs to an active session.
    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(token)
    }

    /// Invalidate a token. Returns false if it was not active.
    pub fn revoke(&self, token: &str) -> bool {
        self.tokens
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(token)
    }
}

/// Check the submitted login against the configured admin credentials.
///
/// Always runs both comparisons so the timing does not reveal which field
/// was wrong. Returns false when no credentials are configured.
pub fn verify_credentials(config: &Config, email: &str, password: &str) -> bool {
    match (&config.admin_email, &config.admin_password) {
        (Some(expected_email), Some(expected_password)) => {
            let email_ok = constant_time_compare(email, expected_email);
            let password_ok = constant_time_compare(password, expected_password);
            email_ok & password_ok
        }
        _ => false,
    }
}

/// Session authentication layer guarding the admin routes.
pub async fn admin_auth_layer(
    sessions: Arc<SessionStore>,
    request: Request,
    next: Next,
) -> Response {
    match session_token(request.headers()) {
        Some(token) if sessions.is_valid(&token) => next.run(request).await,
        Some(_) => unauthorized_response("Invalid session token"),
        None => unauthorized_response("Missing session token"),
    }
}

/// Extract the session token from the dedicated header or a bearer token.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let provided = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    provided.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.to_string())
    })
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
        },
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(email: Option<&str>, password: Option<&str>) -> Config {
        Config {
            admin_email: email.map(String::from),
            admin_password: password.map(String::from),
            db_path: PathBuf::from("./data/atelier.sqlite"),
            media_path: PathBuf::from("./data/media"),
            content_path: PathBuf::from("./content"),
            public_base_url: "http://127.0.0.1:8080".to_string(),
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("test-key-123", "test-key-123"));
        assert!(!constant_time_compare("test-key-123", "test-key-124"));
        assert!(!constant_time_compare("short", "much-longer-key"));
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }

    #[test]
    fn test_verify_credentials() {
        let config = test_config(Some("artist@example.com"), Some("hunter2"));
        assert!(verify_credentials(&config, "artist@example.com", "hunter2"));
        assert!(!verify_credentials(&config, "artist@example.com", "wrong"));
        assert!(!verify_credentials(&config, "other@example.com", "hunter2"));
    }

    #[test]
    fn test_verify_credentials_unconfigured() {
        let config = test_config(None, None);
        assert!(!verify_credentials(&config, "artist@example.com", "hunter2"));
    }

    #[test]
    fn test_session_store_issue_and_revoke() {
        let store = SessionStore::default();
        let token = store.issue();
        assert!(store.is_valid(&token));
        assert!(store.revoke(&token));
        assert!(!store.is_valid(&token));
        assert!(!store.revoke(&token));
    }
}
