//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use thiserror::Error;
use veracity_domain::{DomainError, FileMeta, Submission, SubmissionContent};

/// Why a command line could not become a submission
#[derive(Error, Debug)]
pub enum SubmissionInputError {
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Rejected(#[from] DomainError),
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Verdict, findings and recommended sources
    Full,
    /// One line per analysis
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for veracity_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => veracity_domain::OutputFormat::Full,
            OutputFormat::Summary => veracity_domain::OutputFormat::Summary,
            OutputFormat::Json => veracity_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for veracity
#[derive(Parser, Debug)]
#[command(name = "veracity")]
#[command(author, version, about = "Check how credible a piece of content looks")]
#[command(long_about = r#"
Veracity scores a piece of text, a URL or a file against credibility
heuristics and explains the verdict.

The analysis runs in three stages (processing, analyzing, verifying).
When the score is low, three trusted sources are recommended to
cross-check against, never the same three twice in a row.

Configuration files are loaded from (in priority order):
1. --config <path>                   Explicit config file
2. ./veracity.toml                   Project-level config
3. ~/.config/veracity/config.toml    Global config

Example:
  veracity text "A peer-reviewed clinical trial found no link"
  veracity url https://www.cdc.gov/vaccines
  veracity -o json file ./report.pdf --mime application/pdf
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Seed for the random source, for reproducible scores
    #[arg(long, value_name = "SEED", global = true)]
    pub seed: Option<u64>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// What to analyze
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze free text
    Text {
        /// The text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Analyze a URL (the page is not fetched)
    Url {
        url: String,
    },
    /// Analyze a file by its name, type and size
    File {
        path: PathBuf,

        /// MIME type; guessed from the extension when omitted
        #[arg(long, value_name = "TYPE")]
        mime: Option<String>,
    },
}

impl Command {
    /// Build the submission payload. Files are only stat'ed, never read.
    pub fn to_content(&self) -> std::io::Result<SubmissionContent> {
        match self {
            Command::Text { text } => Ok(SubmissionContent::Text(text.join(" "))),
            Command::Url { url } => Ok(SubmissionContent::Url(url.clone())),
            Command::File { path, mime } => {
                let size_bytes = std::fs::metadata(path)?.len();
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let mime_type = mime.clone().unwrap_or_else(|| guess_mime(path).to_string());
                Ok(SubmissionContent::File(FileMeta::new(
                    name, mime_type, size_bytes,
                )))
            }
        }
    }
}

impl Command {
    /// Build a validated submission; blank text, URLs and file names are rejected.
    pub fn to_submission(&self) -> Result<Submission, SubmissionInputError> {
        let content = self.to_content().map_err(|source| {
            let path = match self {
                Command::File { path, .. } => path.clone(),
                Command::Text { .. } | Command::Url { .. } => PathBuf::new(),
            };
            SubmissionInputError::Read { path, source }
        })?;
        Ok(Submission::try_new(content)?)
    }
}

/// MIME type from a file extension, `application/octet-stream` if unknown.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" | "md" => "text/plain",
        "html" | "htm" => "text/html",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use veracity_domain::Modality;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_text_with_global_options() {
        let cli = Cli::parse_from(["veracity", "-vv", "text", "miracle", "cure", "-o", "json"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Command::Text { ref text }) => assert_eq!(text.join(" "), "miracle cure"),
            ref other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_with_mime() {
        let cli = Cli::parse_from([
            "veracity",
            "--seed",
            "42",
            "file",
            "report.pdf",
            "--mime",
            "application/pdf",
        ]);
        assert_eq!(cli.seed, Some(42));
        match cli.command {
            Some(Command::File { path, mime }) => {
                assert_eq!(path, PathBuf::from("report.pdf"));
                assert_eq!(mime.as_deref(), Some("application/pdf"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_text_and_url_content() {
        let text = Command::Text {
            text: vec!["a".into(), "b".into()],
        };
        assert_eq!(
            text.to_content().unwrap(),
            SubmissionContent::Text("a b".to_string())
        );
        let url = Command::Url {
            url: "https://who.int".into(),
        };
        assert_eq!(
            url.to_content().unwrap(),
            SubmissionContent::Url("https://who.int".to_string())
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let file = Command::File {
            path: PathBuf::from("/definitely/not/here.pdf"),
            mime: None,
        };
        assert!(file.to_content().is_err());
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let text = Command::Text {
            text: vec!["  ".into(), "\t".into()],
        };
        let err = text.to_submission().unwrap_err();
        assert!(matches!(
            err,
            SubmissionInputError::Rejected(DomainError::EmptySubmission(Modality::Text))
        ));
        assert_eq!(err.to_string(), "Empty text submission");
    }

    #[test]
    fn test_blank_url_is_rejected() {
        let url = Command::Url { url: " ".into() };
        assert!(matches!(
            url.to_submission(),
            Err(SubmissionInputError::Rejected(DomainError::EmptySubmission(
                Modality::Url
            )))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_without_name_is_rejected() {
        // the root directory has metadata but no file name
        let file = Command::File {
            path: PathBuf::from("/"),
            mime: None,
        };
        assert!(matches!(
            file.to_submission(),
            Err(SubmissionInputError::Rejected(DomainError::EmptySubmission(
                Modality::File
            )))
        ));
    }

    #[test]
    fn test_missing_file_reports_its_path() {
        let file = Command::File {
            path: PathBuf::from("/definitely/not/here.pdf"),
            mime: None,
        };
        let err = file.to_submission().unwrap_err();
        assert!(matches!(err, SubmissionInputError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.pdf"));
    }

    #[test]
    fn test_non_blank_text_becomes_a_submission() {
        let text = Command::Text {
            text: vec!["miracle".into(), "cure".into()],
        };
        let submission = text.to_submission().unwrap();
        assert_eq!(submission.modality(), Modality::Text);
        assert_eq!(submission.snippet(), "miracle cure");
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("a/Study.PDF")), "application/pdf");
        assert_eq!(guess_mime(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(guess_mime(Path::new("noext")), "application/octet-stream");
    }
}
