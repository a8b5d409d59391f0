//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary every backend crate agrees on:
//! - The unified error type rendered at the HTTP boundary
//! - Typed identifiers
//!
//! Only things with a stable meaning across domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
