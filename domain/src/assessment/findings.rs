//! Score-to-findings lookup
//!
//! Findings text is chosen from the score alone through one table keyed by
//! `(modality, band)`. Raw content is never re-read here.

use crate::classification::{
    BandThresholds, ClassificationDetails, ClassificationResult, ContentType, Outcome, RiskLevel,
    SourceType,
};
use crate::submission::Modality;
use serde::Serialize;

/// One row of the findings table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindingsEntry {
    pub severity_label: &'static str,
    pub findings: &'static [&'static str],
}

/// Indexed as `FINDINGS_TABLE[modality][outcome]`
const FINDINGS_TABLE: [[FindingsEntry; 3]; 3] = [
    // Text
    [
        FindingsEntry {
            severity_label: "Credible",
            findings: &[
                "Content references recognised scientific sources",
                "Claims align with established medical consensus",
                "Language is measured and evidence-based",
                "Citations or study references are present",
            ],
        },
        FindingsEntry {
            severity_label: "Needs Verification",
            findings: &[
                "Some claims lack supporting references",
                "Content mixes factual and unverified statements",
                "Cross-check key claims with trusted health sources",
            ],
        },
        FindingsEntry {
            severity_label: "Likely Misleading",
            findings: &[
                "Content uses sensational or conspiratorial language",
                "No credible sources or citations were found",
                "Claims contradict established medical consensus",
                "Consult a healthcare professional before acting on this",
            ],
        },
    ],
    // Url
    [
        FindingsEntry {
            severity_label: "Trusted Source",
            findings: &[
                "Domain belongs to a recognised health or research institution",
                "Source has a strong record of editorial standards",
                "Content is likely reviewed by subject-matter experts",
            ],
        },
        FindingsEntry {
            severity_label: "Unverified Source",
            findings: &[
                "Domain is not on the list of recognised health sources",
                "Author credentials could not be established",
                "Compare the page with official health guidance",
            ],
        },
        FindingsEntry {
            severity_label: "Unreliable Source",
            findings: &[
                "Domain is known for publishing misleading health content",
                "Page may promote products or unproven treatments",
                "Prefer government or academic sources for this topic",
                "Do not share without independent verification",
            ],
        },
    ],
    // File
    [
        FindingsEntry {
            severity_label: "Credible Document",
            findings: &[
                "File metadata points to research or clinical material",
                "Document type is consistent with formal publications",
                "No manipulation indicators were detected",
            ],
        },
        FindingsEntry {
            severity_label: "Inconclusive",
            findings: &[
                "File origin could not be determined from its metadata",
                "Content may be partially accurate",
                "Look for the original publication or author",
            ],
        },
        FindingsEntry {
            severity_label: "Suspicious Document",
            findings: &[
                "File name suggests sensational or conspiratorial content",
                "Media may be edited or presented out of context",
                "Origin and authorship are unknown",
                "Verify with a trusted source before sharing",
            ],
        },
    ],
];

/// Look up the findings row for a modality and outcome.
pub fn findings_entry(modality: Modality, outcome: Outcome) -> &'static FindingsEntry {
    &FINDINGS_TABLE[modality.index()][outcome.index()]
}

/// Presentation-free explanation of a score (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub modality: Modality,
    pub outcome: Outcome,
    pub severity_label: &'static str,
    pub risk_level: RiskLevel,
    pub findings: &'static [&'static str],
    /// Text submissions only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// URL submissions only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

/// Map a score to its outcome and findings for a modality.
pub fn assess(modality: Modality, score: u8) -> Assessment {
    let outcome = BandThresholds::for_modality(modality).outcome_for(score);
    let entry = findings_entry(modality, outcome);
    Assessment {
        modality,
        outcome,
        severity_label: entry.severity_label,
        risk_level: outcome.risk_level(),
        findings: entry.findings,
        content_type: None,
        source_type: None,
    }
}

impl Assessment {
    /// Assess a classification result, carrying over its secondary labels.
    pub fn of(result: &ClassificationResult) -> Self {
        let mut assessment = assess(result.modality(), result.score);
        match &result.details {
            ClassificationDetails::Text(text) => assessment.content_type = Some(text.content_type),
            ClassificationDetails::Url(url) => assessment.source_type = Some(url.source_type),
            ClassificationDetails::File(_) => {}
        }
        assessment
    }
}
