//! URL classifier
//!
//! Only the host is inspected; nothing is fetched.

use super::lexicon::{
    NEWS_DOMAINS, QUESTIONABLE_DOMAINS, SOCIAL_MEDIA_DOMAINS, TRUSTED_GOVERNMENT_DOMAINS,
    TRUSTED_MEDICAL_DOMAINS, domain_in,
};
use super::outcome::{AmbiguousBands, Outcome, ScoreBand};
use super::result::{ClassificationDetails, ClassificationResult, SourceType, UrlCategory, UrlSignals};
use crate::core::random::RandomSource;
use url::Url;

const TRUSTED_BAND: ScoreBand = ScoreBand::new(85, 100);
const QUESTIONABLE_BAND: ScoreBand = ScoreBand::new(10, 35);
const AMBIGUOUS_BANDS: AmbiguousBands = AmbiguousBands {
    acceptable: ScoreBand::new(75, 90),
    partially_acceptable: ScoreBand::new(45, 75),
    questionable: ScoreBand::new(20, 45),
};

/// Score given to every URL that fails to parse
pub const INVALID_URL_SCORE: u8 = 10;

/// Classify a URL by its domain.
///
/// Unparseable input never errors: it yields the fixed
/// `questionable / 10 / invalid` result without touching `random`.
pub fn classify_url(raw: &str, random: &mut dyn RandomSource) -> ClassificationResult {
    let Some(domain) = parse_domain(raw) else {
        return invalid_url();
    };

    let (outcome, score, source_type, category) = if let Some(category) = trusted_category(&domain)
    {
        (
            Outcome::Acceptable,
            TRUSTED_BAND.sample(random),
            SourceType::Trusted,
            category,
        )
    } else if domain_in(&domain, QUESTIONABLE_DOMAINS) {
        (
            Outcome::Questionable,
            QUESTIONABLE_BAND.sample(random),
            SourceType::Questionable,
            UrlCategory::LowCredibility,
        )
    } else {
        let (outcome, score) = AMBIGUOUS_BANDS.draw(random);
        (outcome, score, SourceType::Unknown, informational_category(&domain))
    };

    ClassificationResult::new(
        score,
        outcome,
        ClassificationDetails::Url(UrlSignals {
            domain: Some(domain),
            source_type,
            category,
        }),
    )
}

/// The deterministic result for input that is not a URL.
pub fn invalid_url() -> ClassificationResult {
    ClassificationResult::new(
        INVALID_URL_SCORE,
        Outcome::Questionable,
        ClassificationDetails::Url(UrlSignals {
            domain: None,
            source_type: SourceType::Questionable,
            category: UrlCategory::Invalid,
        }),
    )
}

/// Lower-cased host with a leading `www.` removed.
pub fn parse_domain(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let host = url.host_str()?.trim_end_matches('.').to_lowercase();
    let domain = host.strip_prefix("www.").unwrap_or(&host);
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

fn trusted_category(domain: &str) -> Option<UrlCategory> {
    if domain.ends_with(".edu") {
        Some(UrlCategory::Educational)
    } else if domain.ends_with(".gov") || domain_in(domain, TRUSTED_GOVERNMENT_DOMAINS) {
        Some(UrlCategory::Government)
    } else if domain_in(domain, TRUSTED_MEDICAL_DOMAINS) {
        Some(UrlCategory::Medical)
    } else {
        None
    }
}

fn informational_category(domain: &str) -> UrlCategory {
    if domain_in(domain, SOCIAL_MEDIA_DOMAINS) {
        UrlCategory::SocialMedia
    } else if domain_in(domain, NEWS_DOMAINS) {
        UrlCategory::NewsMedia
    } else {
        UrlCategory::General
    }
}
