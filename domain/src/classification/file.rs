//! File classifier
//!
//! Works on metadata only: the file name and its MIME type.

use super::lexicon::{
    DOCUMENT_MIME_TYPES, FILE_QUESTIONABLE_INDICATORS, FILE_TRUSTED_INDICATORS, count_indicators,
};
use super::outcome::{AmbiguousBands, Outcome, ScoreBand};
use super::result::{AnalysisType, ClassificationDetails, ClassificationResult, FileSignals};
use super::EMPTY_CONTENT_SCORE;
use crate::core::random::RandomSource;
use crate::submission::FileMeta;

const TRUSTED_DOCUMENT_BAND: ScoreBand = ScoreBand::new(85, 100);
const QUESTIONABLE_BAND: ScoreBand = ScoreBand::new(15, 40);
const RESEARCH_PDF_BAND: ScoreBand = ScoreBand::new(80, 95);
const AMBIGUOUS_BANDS: AmbiguousBands = AmbiguousBands {
    acceptable: ScoreBand::new(75, 100),
    partially_acceptable: ScoreBand::new(45, 75),
    questionable: ScoreBand::new(10, 45),
};

/// Classify an uploaded file.
///
/// Rules, first match wins:
/// 1. a trusted indicator in the name of a PDF, Word or plain-text file → acceptable
/// 2. a questionable indicator in the name → questionable
/// 3. a name mentioning "pdf" and "research" or "study" → acceptable
/// 4. otherwise a uniformly random outcome
pub fn classify_file(meta: &FileMeta, random: &mut dyn RandomSource) -> ClassificationResult {
    let name = meta.name.trim().to_lowercase();
    let mime_type = meta.mime_type.trim().to_lowercase();
    let analysis_type = AnalysisType::from_mime(&mime_type);

    let trusted_indicator_count = count_indicators(&name, FILE_TRUSTED_INDICATORS);
    let questionable_indicator_count = count_indicators(&name, FILE_QUESTIONABLE_INDICATORS);

    let (outcome, score) = if name.is_empty() {
        (Outcome::Questionable, EMPTY_CONTENT_SCORE)
    } else if trusted_indicator_count >= 1 && DOCUMENT_MIME_TYPES.contains(&mime_type.as_str()) {
        (Outcome::Acceptable, TRUSTED_DOCUMENT_BAND.sample(random))
    } else if questionable_indicator_count >= 1 {
        (Outcome::Questionable, QUESTIONABLE_BAND.sample(random))
    } else if name.contains("pdf") && (name.contains("research") || name.contains("study")) {
        (Outcome::Acceptable, RESEARCH_PDF_BAND.sample(random))
    } else {
        AMBIGUOUS_BANDS.draw(random)
    };

    ClassificationResult::new(
        score,
        outcome,
        ClassificationDetails::File(FileSignals {
            file_name: meta.name.clone(),
            mime_type: meta.mime_type.clone(),
            size_bytes: meta.size_bytes,
            analysis_type,
            processing_complexity: analysis_type.processing_complexity(),
            trusted_indicator_count,
            questionable_indicator_count,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::result::ProcessingComplexity;
    use crate::core::random::{SequenceRandom, StdRandom};

    fn signals(result: &ClassificationResult) -> &FileSignals {
        match &result.details {
            ClassificationDetails::File(signals) => signals,
            other => panic!("Expected file details, got {:?}", other),
        }
    }

    #[test]
    fn test_trusted_pdf_is_acceptable() {
        let meta = FileMeta::new("Clinical_Trial_Results.pdf", "application/pdf", 204_800);
        let mut random = StdRandom::seeded(4);
        for _ in 0..50 {
            let result = classify_file(&meta, &mut random);
            assert_eq!(result.outcome, Outcome::Acceptable);
            assert!((85..100).contains(&result.score));
        }
        let result = classify_file(&meta, &mut random);
        assert_eq!(signals(&result).trusted_indicator_count, 2);
        assert_eq!(signals(&result).analysis_type, AnalysisType::Document);
    }

    #[test]
    fn test_trusted_name_with_other_mime_skips_rule_one() {
        // "journal" is trusted but image/png is not a document type
        let meta = FileMeta::new("journal_cover.png", "image/png", 1024);
        let result = classify_file(&meta, &mut SequenceRandom::new([1, 0]));
        assert_eq!(result.outcome, Outcome::PartiallyAcceptable);
        assert_eq!(result.score, 45);
    }

    #[test]
    fn test_questionable_indicator() {
        let meta = FileMeta::new("secret-cure-EXPOSED.mp4", "video/mp4", 10_000_000);
        let result = classify_file(&meta, &mut SequenceRandom::zeros());
        assert_eq!(result.outcome, Outcome::Questionable);
        assert_eq!(result.score, 15);
        assert_eq!(signals(&result).questionable_indicator_count, 2);
        assert_eq!(
            signals(&result).processing_complexity,
            ProcessingComplexity::High
        );
    }

    #[test]
    fn test_trusted_document_beats_questionable_indicator() {
        let meta = FileMeta::new("research-on-hoax-claims.txt", "text/plain", 900);
        let result = classify_file(&meta, &mut SequenceRandom::zeros());
        assert_eq!(result.outcome, Outcome::Acceptable);
        assert_eq!(result.score, 85);
    }

    #[test]
    fn test_research_pdf_name_with_generic_mime() {
        let meta = FileMeta::new("study_pdf_export.bin", "application/octet-stream", 300);
        let mut random = StdRandom::seeded(6);
        for _ in 0..50 {
            let result = classify_file(&meta, &mut random);
            assert_eq!(result.outcome, Outcome::Acceptable);
            assert!((80..95).contains(&result.score));
        }
    }

    #[test]
    fn test_neutral_audio_file_is_random_with_medium_complexity() {
        let meta = FileMeta::new("podcast-episode-12.mp3", "audio/mpeg", 5_000_000);
        let result = classify_file(&meta, &mut SequenceRandom::new([2, 34]));
        assert_eq!((result.outcome, result.score), (Outcome::Questionable, 44));
        assert_eq!(signals(&result).analysis_type, AnalysisType::Audio);
        assert_eq!(result.processing_complexity(), ProcessingComplexity::Medium);
    }

    #[test]
    fn test_empty_name_is_deterministic_questionable() {
        let meta = FileMeta::new("  ", "application/pdf", 0);
        let result = classify_file(&meta, &mut StdRandom::seeded(1));
        assert_eq!(result.outcome, Outcome::Questionable);
        assert_eq!(result.score, EMPTY_CONTENT_SCORE);
    }
}
