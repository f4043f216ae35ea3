//! Term and domain lists used by the heuristic classifiers.

use regex::Regex;
use std::sync::LazyLock;

// ==================== Text ====================

/// Scientific and citation vocabulary
pub const TRUSTED_TERMS: &[&str] = &[
    "peer-reviewed",
    "peer reviewed",
    "clinical trial",
    "randomized controlled trial",
    "meta-analysis",
    "systematic review",
    "cohort study",
    "double-blind",
    "placebo-controlled",
    "evidence-based",
    "world health organization",
    "centers for disease control",
    "national institutes of health",
    "food and drug administration",
    "mayo clinic",
    "the lancet",
    "new england journal of medicine",
    "jama",
    "british medical journal",
];

/// Conspiracy and alternative-medicine rhetoric
pub const QUESTIONABLE_TERMS: &[&str] = &[
    "miracle cure",
    "big pharma conspiracy",
    "detox",
    "cure-all",
    "doctors hate",
    "they don't want you to know",
    "secret remedy",
    "toxins",
    "cover-up",
    "hoax",
    "mainstream media lies",
    "suppressed cure",
    "natural immunity is better",
    "plandemic",
];

pub const HEALTH_KEYWORDS: &[&str] = &[
    "health",
    "medical",
    "disease",
    "vaccine",
    "treatment",
    "symptom",
    "doctor",
    "medicine",
    "cancer",
    "diabetes",
    "heart",
    "virus",
    "infection",
    "therapy",
    "diet",
    "nutrition",
    "mental",
    "depression",
    "covid",
    "drug",
];

/// Parenthetical year, "et al.", DOI, PMID or NCBI mention
pub static CITATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*(?:19|20)\d{2}[a-z]?\s*\)|\bet al\b\.?|\bdoi\s*:|\b10\.\d{4,9}/\S+|\bpmid\b|\bncbi\b")
        .expect("citation pattern is valid")
});

/// Reference sections and "study shows" phrasing
pub static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:references|bibliography|works cited|sources cited|stud(?:y|ies) shows?|research shows)\b",
    )
    .expect("reference pattern is valid")
});

static TRUSTED_TERM_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| word_patterns(TRUSTED_TERMS));
static QUESTIONABLE_TERM_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| word_patterns(QUESTIONABLE_TERMS));
static HEALTH_KEYWORD_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| word_patterns(HEALTH_KEYWORDS));

fn word_patterns(terms: &[&str]) -> Vec<Regex> {
    terms
        .iter()
        .filter_map(|term| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).ok())
        .collect()
}

fn count_matching(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().filter(|p| p.is_match(text)).count()
}

/// Number of distinct trusted terms present in `text`.
pub fn count_trusted_terms(text: &str) -> usize {
    count_matching(&TRUSTED_TERM_PATTERNS, text)
}

/// Number of distinct questionable terms present in `text`.
pub fn count_questionable_terms(text: &str) -> usize {
    count_matching(&QUESTIONABLE_TERM_PATTERNS, text)
}

pub fn mentions_health(text: &str) -> bool {
    HEALTH_KEYWORD_PATTERNS.iter().any(|p| p.is_match(text))
}

// ==================== URL ====================

/// Government and public-health agencies (besides any `.gov` host)
pub const TRUSTED_GOVERNMENT_DOMAINS: &[&str] = &[
    "who.int",
    "cdc.gov",
    "nih.gov",
    "fda.gov",
    "medlineplus.gov",
    "nhs.uk",
    "ema.europa.eu",
];

/// Medical institutions, journals and literature databases
pub const TRUSTED_MEDICAL_DOMAINS: &[&str] = &[
    "mayoclinic.org",
    "clevelandclinic.org",
    "hopkinsmedicine.org",
    "pubmed.ncbi.nlm.nih.gov",
    "nejm.org",
    "thelancet.com",
    "bmj.com",
    "jamanetwork.com",
    "nature.com",
    "science.org",
    "cochranelibrary.com",
    "sciencedirect.com",
    "cell.com",
];

pub const QUESTIONABLE_DOMAINS: &[&str] = &[
    "naturalnews.com",
    "infowars.com",
    "mercola.com",
    "greenmedinfo.com",
    "collective-evolution.com",
    "healthimpactnews.com",
    "thetruthaboutcancer.com",
];

pub const SOCIAL_MEDIA_DOMAINS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "x.com",
    "instagram.com",
    "tiktok.com",
    "youtube.com",
    "reddit.com",
];

pub const NEWS_DOMAINS: &[&str] = &[
    "bbc.com",
    "bbc.co.uk",
    "cnn.com",
    "reuters.com",
    "apnews.com",
    "nytimes.com",
    "theguardian.com",
    "washingtonpost.com",
];

/// Exact match or subdomain of one of `domains`.
pub fn domain_in(domain: &str, domains: &[&str]) -> bool {
    domains.iter().any(|listed| {
        domain == *listed
            || domain
                .strip_suffix(listed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

// ==================== File ====================

pub const FILE_TRUSTED_INDICATORS: &[&str] = &[
    "journal",
    "research",
    "clinical",
    "trial",
    "peer-review",
    "peer_review",
    "cdc",
    "nih",
    "fda",
    "world-health",
    "lancet",
    "nejm",
    "university",
];

pub const FILE_QUESTIONABLE_INDICATORS: &[&str] = &[
    "conspiracy",
    "secret",
    "hoax",
    "miracle",
    "exposed",
    "banned",
    "cover-up",
    "leaked",
];

/// MIME types a trusted-looking document has to carry to score as acceptable
pub const DOCUMENT_MIME_TYPES: &[&str] = &["application/pdf", "application/msword", "text/plain"];

pub fn count_indicators(name: &str, indicators: &[&str]) -> usize {
    indicators.iter().filter(|w| name.contains(*w)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes() {
        assert_eq!(TRUSTED_TERMS.len(), 19);
        assert_eq!(QUESTIONABLE_TERMS.len(), 14);
        assert_eq!(HEALTH_KEYWORDS.len(), 20);
        assert_eq!(QUESTIONABLE_DOMAINS.len(), 7);
        assert_eq!(TRUSTED_TERM_PATTERNS.len(), TRUSTED_TERMS.len());
        assert_eq!(QUESTIONABLE_TERM_PATTERNS.len(), QUESTIONABLE_TERMS.len());
    }

    #[test]
    fn test_term_counts_are_distinct_and_word_bounded() {
        assert_eq!(count_trusted_terms("jama jama jama"), 1);
        assert_eq!(count_trusted_terms("comfortable pajamas"), 0);
        assert_eq!(count_questionable_terms("big pharma conspiracy"), 1);
        assert_eq!(count_questionable_terms("big pharma says otherwise"), 0);
    }

    #[test]
    fn test_citation_pattern() {
        assert!(CITATION_PATTERN.is_match("as shown by Smith et al. in their work"));
        assert!(CITATION_PATTERN.is_match("published (2021)"));
        assert!(CITATION_PATTERN.is_match("doi: 10.1000/xyz123"));
        assert!(CITATION_PATTERN.is_match("PMID 123456"));
        assert!(CITATION_PATTERN.is_match("see ncbi for details"));
        assert!(!CITATION_PATTERN.is_match("I feel better since 2021"));
    }

    #[test]
    fn test_reference_pattern() {
        assert!(REFERENCE_PATTERN.is_match("References: 1. Foo"));
        assert!(REFERENCE_PATTERN.is_match("a new study shows that"));
        assert!(REFERENCE_PATTERN.is_match("Studies show benefits"));
        assert!(!REFERENCE_PATTERN.is_match("my cousin says so"));
    }

    #[test]
    fn test_domain_in_matches_subdomains_only_on_label_boundary() {
        assert!(domain_in("cdc.gov", TRUSTED_GOVERNMENT_DOMAINS));
        assert!(domain_in("wwwnc.cdc.gov", TRUSTED_GOVERNMENT_DOMAINS));
        assert!(!domain_in("notcdc.gov.example.com", TRUSTED_GOVERNMENT_DOMAINS));
        assert!(!domain_in("fakecdc.gov", &["cdc.gov"]));
    }
}
