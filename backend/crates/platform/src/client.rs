//! Client identification utilities
//!
//! Common functions for identifying callers via HTTP headers.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Error when extracting caller credentials
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    #[error("Malformed credentials in header: {0}")]
    Malformed(String),
}

/// Extract a bearer token from the `Authorization` header
///
/// The scheme is matched case-insensitively and the token must be non-empty.
///
/// ## Returns
/// * `Ok(&str)` - The token, without the scheme
/// * `Err(CredentialError)` - Header missing, not valid UTF-8, or not a bearer credential
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| CredentialError::MissingHeader("Authorization".to_string()))?
        .to_str()
        .map_err(|_| CredentialError::Malformed("Authorization".to_string()))?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| CredentialError::Malformed("Authorization".to_string()))?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(CredentialError::Malformed("Authorization".to_string()));
    }

    Ok(token)
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}
