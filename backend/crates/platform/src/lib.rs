//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, constant-time comparison, random tokens)
//! - Client identification from request headers (bearer credentials, client IP)

pub mod client;
pub mod crypto;
