//! Progress display for the analysis timeline

pub mod reporter;
