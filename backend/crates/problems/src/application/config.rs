//! Application Configuration
//!
//! Configuration for the problems application layer.

use crate::domain::value_objects::CallerRole;

/// Problems application configuration
#[derive(Debug, Clone, Default)]
pub struct ProblemsConfig {
    /// Include the underlying store message as `details` in error bodies
    pub expose_error_details: bool,
    /// SHA-256 digest of the bearer token that grants the admin role.
    /// `None` means no caller is an admin.
    pub admin_token_digest: Option<[u8; 32]>,
}

impl ProblemsConfig {
    /// Create config for development (detailed errors)
    pub fn development() -> Self {
        Self {
            expose_error_details: true,
            ..Default::default()
        }
    }

    /// Grant the admin role to callers presenting `token`
    pub fn with_admin_token(self, token: &str) -> Self {
        Self {
            admin_token_digest: Some(platform::crypto::sha256(token.as_bytes())),
            ..self
        }
    }

    /// Resolve the role carried by a presented bearer token
    pub fn role_for(&self, token: &str) -> CallerRole {
        match &self.admin_token_digest {
            Some(digest) if platform::crypto::matches_digest(token.as_bytes(), digest) => {
                CallerRole::Admin
            }
            _ => CallerRole::Viewer,
        }
    }
}
