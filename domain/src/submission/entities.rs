//! Submission entities

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of content a user submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Url,
    File,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Text, Modality::Url, Modality::File];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Url => "url",
            Modality::File => "file",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Modality::Text => 0,
            Modality::Url => 1,
            Modality::File => 2,
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Modality::Text),
            "url" | "link" => Ok(Modality::Url),
            "file" | "upload" => Ok(Modality::File),
            _ => Err(format!("Unknown modality: {}. Valid: text, url, file", s)),
        }
    }
}

/// Metadata of an uploaded file. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// Submitted payload, one variant per modality.
///
/// URLs are kept as raw strings: an unparseable URL is still a valid
/// submission and classifies as questionable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum SubmissionContent {
    Text(String),
    Url(String),
    File(FileMeta),
}

impl SubmissionContent {
    pub fn modality(&self) -> Modality {
        match self {
            SubmissionContent::Text(_) => Modality::Text,
            SubmissionContent::Url(_) => Modality::Url,
            SubmissionContent::File(_) => Modality::File,
        }
    }

    /// Text used for topic detection and display: the text itself, the URL,
    /// or the file name.
    pub fn snippet(&self) -> &str {
        match self {
            SubmissionContent::Text(text) => text,
            SubmissionContent::Url(url) => url,
            SubmissionContent::File(meta) => &meta.name,
        }
    }

    fn is_blank(&self) -> bool {
        self.snippet().trim().is_empty()
    }
}

/// A unit of user-submitted content (Entity, immutable once created)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    content: SubmissionContent,
    submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Create a submission stamped with the current time.
    ///
    /// No validation happens here; use [`Submission::try_new`] at intake.
    pub fn new(content: SubmissionContent) -> Self {
        Self::at(content, Utc::now())
    }

    /// Create a submission with an explicit timestamp.
    pub fn at(content: SubmissionContent, submitted_at: DateTime<Utc>) -> Self {
        Self {
            content,
            submitted_at,
        }
    }

    /// Validate and create a submission, rejecting blank content.
    pub fn try_new(content: SubmissionContent) -> Result<Self, DomainError> {
        if content.is_blank() {
            return Err(DomainError::EmptySubmission(content.modality()));
        }
        Ok(Self::new(content))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(SubmissionContent::Text(text.into()))
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::new(SubmissionContent::Url(url.into()))
    }

    pub fn file(meta: FileMeta) -> Self {
        Self::new(SubmissionContent::File(meta))
    }

    pub fn content(&self) -> &SubmissionContent {
        &self.content
    }

    pub fn modality(&self) -> Modality {
        self.content.modality()
    }

    pub fn snippet(&self) -> &str {
        self.content.snippet()
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Analysis id: the submission timestamp in epoch milliseconds.
    pub fn analysis_id(&self) -> String {
        self.submitted_at.timestamp_millis().to_string()
    }
}
