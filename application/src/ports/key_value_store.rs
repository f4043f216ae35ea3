//! Key-value persistence port
//!
//! Defines the [`KeyValueStore`] trait the recommendation engine and the
//! intake use case persist through. Values are JSON strings.
//!
//! Reads go through [`load_json`], which treats a missing key, a store
//! failure and unparseable JSON alike: as absent. Persisted state is a
//! convenience here and must never fail an analysis.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

/// Key holding the active analysis
pub const CURRENT_ANALYSIS_KEY: &str = "currentAnalysis";

/// Key holding the names of the previously recommended sources
pub const LAST_RECOMMENDED_KEY: &str = "lastRecommendedResources";

/// Key holding the recommendation record of one analysis
pub fn resources_key(analysis_id: &str) -> String {
    format!("resources_{}", analysis_id)
}

/// Errors raised by store adapters.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store data: {0}")]
    Corrupt(String),
}

/// String-keyed store of string values.
///
/// Writes are last-writer-wins. Implementations live in the
/// infrastructure layer.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read and decode a JSON value, treating every failure as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read '{}' from store, treating as empty: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring corrupt value under '{}': {}", key, e);
            None
        }
    }
}

/// Encode and write a JSON value. Failures are logged and reported as `false`.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> bool {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Could not encode value for '{}': {}", key, e);
            return false;
        }
    };

    match store.set(key, &raw) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not write '{}' to store: {}", key, e);
            false
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MockStore;
    use super::*;

    #[test]
    fn test_resources_key() {
        assert_eq!(resources_key("1700000000000"), "resources_1700000000000");
    }

    #[test]
    fn test_load_json_roundtrip() {
        let store = MockStore::new();
        assert!(save_json(&store, "k", &vec!["a", "b"]));
        let loaded: Option<Vec<String>> = load_json(&store, "k");
        assert_eq!(loaded, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_load_json_missing_corrupt_or_unavailable_is_none() {
        let store = MockStore::new();
        assert_eq!(load_json::<Vec<String>>(&store, "missing"), None);

        store.put_raw("bad", "{not json");
        assert_eq!(load_json::<Vec<String>>(&store, "bad"), None);

        let offline = MockStore::unavailable();
        assert_eq!(load_json::<Vec<String>>(&offline, "k"), None);
        assert!(!save_json(&offline, "k", &1));
    }
}
