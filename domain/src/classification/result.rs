//! Classification result value objects

use super::outcome::{BandThresholds, Outcome, RiskLevel};
use crate::submission::Modality;
use serde::{Deserialize, Serialize};

/// Whether a text looks like a health claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    HealthClaim,
    General,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::HealthClaim => "health_claim",
            ContentType::General => "general",
        }
    }
}

/// Reputation of the domain a URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Trusted,
    Questionable,
    Unknown,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Trusted => "trusted",
            SourceType::Questionable => "questionable",
            SourceType::Unknown => "unknown",
        }
    }
}

/// Informational grouping of a URL's domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlCategory {
    Government,
    Educational,
    Medical,
    LowCredibility,
    SocialMedia,
    NewsMedia,
    General,
    Invalid,
}

impl UrlCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlCategory::Government => "government",
            UrlCategory::Educational => "educational",
            UrlCategory::Medical => "medical",
            UrlCategory::LowCredibility => "low-credibility",
            UrlCategory::SocialMedia => "social-media",
            UrlCategory::NewsMedia => "news-media",
            UrlCategory::General => "general",
            UrlCategory::Invalid => "invalid",
        }
    }
}

/// Kind of analysis a file needs, derived from its MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Image,
    Audio,
    Video,
    Document,
}

impl AnalysisType {
    pub fn from_mime(mime_type: &str) -> Self {
        let mime = mime_type.trim().to_lowercase();
        if mime.starts_with("image/") {
            AnalysisType::Image
        } else if mime.starts_with("audio/") {
            AnalysisType::Audio
        } else if mime.starts_with("video/") {
            AnalysisType::Video
        } else {
            AnalysisType::Document
        }
    }

    pub fn processing_complexity(&self) -> ProcessingComplexity {
        match self {
            AnalysisType::Video => ProcessingComplexity::High,
            AnalysisType::Audio => ProcessingComplexity::Medium,
            AnalysisType::Image | AnalysisType::Document => ProcessingComplexity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Image => "image",
            AnalysisType::Audio => "audio",
            AnalysisType::Video => "video",
            AnalysisType::Document => "document",
        }
    }
}

/// How heavy a file is to analyse; scales the orchestrator's stage durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingComplexity {
    #[default]
    Low,
    Medium,
    High,
}

impl ProcessingComplexity {
    /// Multiplier applied to every stage dwell time.
    pub fn duration_factor(&self) -> f64 {
        match self {
            ProcessingComplexity::Low => 1.0,
            ProcessingComplexity::Medium => 1.5,
            ProcessingComplexity::High => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingComplexity::Low => "low",
            ProcessingComplexity::Medium => "medium",
            ProcessingComplexity::High => "high",
        }
    }
}

/// Signals extracted from a text submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSignals {
    pub trusted_term_count: usize,
    pub questionable_term_count: usize,
    pub has_citations: bool,
    pub has_references: bool,
    pub has_health_content: bool,
    pub content_type: ContentType,
    pub risk_level: RiskLevel,
}

/// Signals extracted from a URL submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSignals {
    /// Host without a leading `www.`; `None` when the URL did not parse
    pub domain: Option<String>,
    pub source_type: SourceType,
    pub category: UrlCategory,
}

/// Signals extracted from a file submission's metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSignals {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub analysis_type: AnalysisType,
    pub processing_complexity: ProcessingComplexity,
    pub trusted_indicator_count: usize,
    pub questionable_indicator_count: usize,
}

/// Modality-specific part of a [`ClassificationResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationDetails {
    Text(TextSignals),
    Url(UrlSignals),
    File(FileSignals),
}

impl ClassificationDetails {
    pub fn modality(&self) -> Modality {
        match self {
            ClassificationDetails::Text(_) => Modality::Text,
            ClassificationDetails::Url(_) => Modality::Url,
            ClassificationDetails::File(_) => Modality::File,
        }
    }
}

/// Output of a score classifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Credibility score in `[0, 100]`
    pub score: u8,
    pub outcome: Outcome,
    pub details: ClassificationDetails,
}

impl ClassificationResult {
    pub(crate) fn new(score: u8, outcome: Outcome, details: ClassificationDetails) -> Self {
        debug_assert_eq!(
            BandThresholds::for_modality(details.modality()).outcome_for(score),
            outcome,
            "score {} outside the {} band",
            score,
            outcome.as_str()
        );
        Self {
            score,
            outcome,
            details,
        }
    }

    pub fn modality(&self) -> Modality {
        self.details.modality()
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.outcome.risk_level()
    }

    /// Complexity used to size the analysis timeline. Text and URLs are low.
    pub fn processing_complexity(&self) -> ProcessingComplexity {
        match &self.details {
            ClassificationDetails::File(file) => file.processing_complexity,
            _ => ProcessingComplexity::Low,
        }
    }

    /// Check that the score lies inside its outcome's band.
    pub fn is_consistent(&self) -> bool {
        self.score <= 100
            && BandThresholds::for_modality(self.modality()).outcome_for(self.score)
                == self.outcome
    }
}
