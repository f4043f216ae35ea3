//! Outcome mapping
//!
//! Turns a `(modality, score)` pair into an [`Assessment`]: outcome,
//! severity label, risk level and canned findings.

pub mod findings;

pub use findings::{Assessment, FindingsEntry, assess, findings_entry};
