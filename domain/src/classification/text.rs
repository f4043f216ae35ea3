//! Text classifier

use super::lexicon::{
    CITATION_PATTERN, REFERENCE_PATTERN, count_questionable_terms, count_trusted_terms,
    mentions_health,
};
use super::outcome::{AmbiguousBands, Outcome, ScoreBand};
use super::result::{ClassificationDetails, ClassificationResult, ContentType, TextSignals};
use super::EMPTY_CONTENT_SCORE;
use crate::core::random::RandomSource;

const TRUSTED_BAND: ScoreBand = ScoreBand::new(80, 100);
const QUESTIONABLE_BAND: ScoreBand = ScoreBand::new(15, 40);
const AMBIGUOUS_BANDS: AmbiguousBands = AmbiguousBands {
    acceptable: ScoreBand::new(75, 100),
    partially_acceptable: ScoreBand::new(45, 75),
    questionable: ScoreBand::new(10, 45),
};

/// Minimum number of distinct terms that decides a branch on its own
const TERM_THRESHOLD: usize = 2;

/// Classify free text.
///
/// Rules, first match wins:
/// 1. two or more trusted terms, a citation or a reference section → acceptable
/// 2. two or more questionable terms → questionable
/// 3. otherwise a uniformly random outcome
pub fn classify_text(text: &str, random: &mut dyn RandomSource) -> ClassificationResult {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return empty_text();
    }

    let trusted_term_count = count_trusted_terms(&normalized);
    let questionable_term_count = count_questionable_terms(&normalized);
    let has_citations = CITATION_PATTERN.is_match(&normalized);
    let has_references = REFERENCE_PATTERN.is_match(&normalized);
    let has_health_content = mentions_health(&normalized);

    let (outcome, score) =
        if trusted_term_count >= TERM_THRESHOLD || has_citations || has_references {
            (Outcome::Acceptable, TRUSTED_BAND.sample(random))
        } else if questionable_term_count >= TERM_THRESHOLD {
            (Outcome::Questionable, QUESTIONABLE_BAND.sample(random))
        } else {
            AMBIGUOUS_BANDS.draw(random)
        };

    ClassificationResult::new(
        score,
        outcome,
        ClassificationDetails::Text(TextSignals {
            trusted_term_count,
            questionable_term_count,
            has_citations,
            has_references,
            has_health_content,
            content_type: if has_health_content {
                ContentType::HealthClaim
            } else {
                ContentType::General
            },
            risk_level: outcome.risk_level(),
        }),
    )
}

fn empty_text() -> ClassificationResult {
    ClassificationResult::new(
        EMPTY_CONTENT_SCORE,
        Outcome::Questionable,
        ClassificationDetails::Text(TextSignals {
            trusted_term_count: 0,
            questionable_term_count: 0,
            has_citations: false,
            has_references: false,
            has_health_content: false,
            content_type: ContentType::General,
            risk_level: Outcome::Questionable.risk_level(),
        }),
    )
}
