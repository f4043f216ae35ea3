//! Recommend Resources use case.
//!
//! For a low-scoring analysis, suggests three trusted sources to
//! cross-check against, skipping the three suggested last time.
//!
//! State lives in the injected [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | `resources_<analysisId>` | [`RecommendationRecord`], written once |
//! | `lastRecommendedResources` | names of the previous picks, overwritten |
//!
//! Asking again for the same analysis returns the stored record unchanged.

use crate::config::RecommendationParams;
use crate::ports::event_logger::{AnalysisEvent, AnalysisEventLogger, NoEventLogger};
use crate::ports::key_value_store::{
    KeyValueStore, LAST_RECOMMENDED_KEY, load_json, resources_key, save_json,
};
use crate::use_cases::shared::{SharedRandom, lock_random};
use std::sync::Arc;
use tracing::{debug, info};
use veracity_domain::{
    LastRecommendedSet, RecommendationReason, RecommendationRecord, Resource, build_search_query,
    default_catalog, select_resources,
};

/// Use case for recommending reference sources.
pub struct RecommendResourcesUseCase {
    store: Arc<dyn KeyValueStore>,
    random: SharedRandom,
    catalog: Vec<Resource>,
    params: RecommendationParams,
    event_logger: Arc<dyn AnalysisEventLogger>,
}

impl RecommendResourcesUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>, random: SharedRandom) -> Self {
        Self {
            store,
            random,
            catalog: default_catalog(),
            params: RecommendationParams::default(),
            event_logger: Arc::new(NoEventLogger),
        }
    }

    pub fn with_params(mut self, params: RecommendationParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the built-in catalog.
    pub fn with_catalog(mut self, catalog: Vec<Resource>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn AnalysisEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub fn params(&self) -> &RecommendationParams {
        &self.params
    }

    /// Recommend sources for `analysis_id`, or `None` when the score is high
    /// enough not to need any.
    pub fn recommend(
        &self,
        analysis_id: &str,
        score: u8,
        content_snippet: &str,
    ) -> Option<RecommendationRecord> {
        if !self.params.should_recommend(score) {
            debug!(
                "Score {} at or above threshold {}, no recommendation",
                score, self.params.threshold
            );
            return None;
        }

        let key = resources_key(analysis_id);
        if let Some(existing) = load_json::<RecommendationRecord>(self.store.as_ref(), &key) {
            debug!("Returning stored recommendation for {}", analysis_id);
            return Some(existing);
        }

        let last: LastRecommendedSet =
            load_json(self.store.as_ref(), LAST_RECOMMENDED_KEY).unwrap_or_default();
        let sources = {
            let mut random = lock_random(&self.random);
            select_resources(&self.catalog, &last, &mut *random)
        };

        let record = RecommendationRecord {
            analysis_id: analysis_id.to_string(),
            sources,
            search_query: build_search_query(content_snippet),
            reason: RecommendationReason::from_score(score, self.params.questionable_below),
        };
        let names = record.source_names();

        save_json(
            self.store.as_ref(),
            LAST_RECOMMENDED_KEY,
            &LastRecommendedSet::new(names.clone()),
        );
        save_json(self.store.as_ref(), &key, &record);

        info!(
            "Recommended {} for {} ({})",
            names.join(", "),
            analysis_id,
            record.reason.as_outcome().as_str()
        );
        self.event_logger.log(AnalysisEvent::new(
            "recommendation_issued",
            serde_json::json!({
                "analysis_id": analysis_id,
                "score": score,
                "reason": record.reason,
                "sources": names,
                "search_query": record.search_query,
            }),
        ));

        Some(record)
    }
}
