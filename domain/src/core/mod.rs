//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - model identifiers for the generator and evaluator
//! - [`credentials::Credentials`] - the two API keys, redacted in debug output
//! - [`error::DomainError`] - domain-level errors

pub mod credentials;
pub mod error;
pub mod model;
