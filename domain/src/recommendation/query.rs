//! Search query derivation

/// Sites the generated search is restricted to
pub const SEARCH_SITES: [&str; 4] = ["cdc.gov", "who.int", "nih.gov", "mayoclinic.org"];

pub const DEFAULT_TOPIC: &str = "health information";

/// Topic keyword groups in priority order
const TOPIC_GROUPS: &[(&[&str], &str)] = &[
    (&["vaccine", "covid"], "vaccine safety covid-19"),
    (&["diet", "nutrition"], "nutrition and diet"),
    (&["mental", "depression"], "mental health depression"),
    (&["cancer"], "cancer treatment"),
    (&["heart"], "heart disease"),
    (&["diabetes"], "diabetes management"),
];

/// First topic whose keywords appear in `snippet`, or [`DEFAULT_TOPIC`].
pub fn detect_topic(snippet: &str) -> &'static str {
    let lowered = snippet.to_lowercase();
    TOPIC_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, topic)| *topic)
        .unwrap_or(DEFAULT_TOPIC)
}

/// Site-restricted search string for the snippet's topic.
pub fn build_search_query(snippet: &str) -> String {
    let sites = SEARCH_SITES
        .iter()
        .map(|site| format!("site:{}", site))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("{} {}", detect_topic(snippet), sites)
}
