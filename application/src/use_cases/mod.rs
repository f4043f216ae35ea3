//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify_submission;
pub mod orchestrate_analysis;
pub mod recommend_resources;
pub mod run_analysis;
pub mod shared;
