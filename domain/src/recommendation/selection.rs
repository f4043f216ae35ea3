//! Resource selection with consecutive-repeat avoidance

use super::record::LastRecommendedSet;
use super::resource::Resource;
use crate::core::random::{RandomSource, shuffle};

/// Number of sources per recommendation
pub const RECOMMENDATION_SIZE: usize = 3;

/// Pick [`RECOMMENDATION_SIZE`] resources, skipping the previous picks.
///
/// If excluding the previous picks leaves fewer than three candidates the
/// whole catalog is used instead, so three picks stay possible.
pub fn select_resources(
    catalog: &[Resource],
    last: &LastRecommendedSet,
    random: &mut dyn RandomSource,
) -> Vec<Resource> {
    let available: Vec<&Resource> = catalog.iter().filter(|r| !last.contains(&r.name)).collect();
    let mut pool = if available.len() < RECOMMENDATION_SIZE {
        catalog.iter().collect()
    } else {
        available
    };
    shuffle(&mut pool, random);
    pool.into_iter()
        .take(RECOMMENDATION_SIZE)
        .cloned()
        .collect()
}
