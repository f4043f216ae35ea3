//! Submission domain
//!
//! A [`Submission`] is what the user hands in: free text, a URL, or the
//! metadata of an uploaded file. It never changes after intake.

pub mod entities;

pub use entities::{FileMeta, Modality, Submission, SubmissionContent};
