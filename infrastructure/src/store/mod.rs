//! Key-value store adapters
//!
//! Implement the [`KeyValueStore`](veracity_application::KeyValueStore)
//! port: [`MemoryStore`] for tests and one-off runs, [`JsonFileStore`] to
//! keep recommendation history between runs.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
