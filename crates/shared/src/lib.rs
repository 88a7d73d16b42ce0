//! Inkwell Shared Types and Utilities
//!
//! This crate contains types, errors, and utilities shared across the Inkwell
//! platform.

pub mod db;
pub mod error;
pub mod subdomain;
pub mod types;

pub use db::*;
pub use error::*;
pub use subdomain::{is_reserved_subdomain, validate_subdomain, RESERVED_SUBDOMAINS};
pub use types::*;
