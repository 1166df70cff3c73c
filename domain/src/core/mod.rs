//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`clock`]: countdown formatting and minute/second conversion
//! - [`validation`]: structured configuration issues

pub mod clock;
pub mod error;
pub mod string;
pub mod validation;
