//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`random::RandomSource`]: injectable randomness for the ambiguous branches

pub mod error;
pub mod random;
