//! Shared utilities for use cases.
//!
//! Randomness is injected once and shared between the classify and
//! recommend use cases, so a seeded run is reproducible end to end.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use veracity_domain::{RandomSource, StdRandom};

/// Random source shared across use cases.
pub type SharedRandom = Arc<Mutex<dyn RandomSource>>;

/// Wrap a random source for sharing.
pub fn shared_random<R: RandomSource + 'static>(random: R) -> SharedRandom {
    Arc::new(Mutex::new(random))
}

/// Entropy-seeded random source.
pub fn entropy_random() -> SharedRandom {
    shared_random(StdRandom::from_entropy())
}

/// Lock the random source. A poisoned lock still yields a usable source.
pub(crate) fn lock_random(random: &SharedRandom) -> MutexGuard<'_, dyn RandomSource + 'static> {
    random.lock().unwrap_or_else(PoisonError::into_inner)
}
