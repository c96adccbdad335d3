//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every backend crate agrees on:
//! - Error classification and the unified error type
//! - Typed identifiers for stored documents
//!
//! Keep it small: anything specific to one collection belongs in that
//! collection's crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
