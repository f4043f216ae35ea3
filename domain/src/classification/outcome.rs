//! Outcomes and score bands
//!
//! Every classification lands on one of three [`Outcome`]s. The score that
//! comes with it always lies inside the outcome's band, as described by
//! [`BandThresholds`].

use crate::core::error::DomainError;
use crate::core::random::RandomSource;
use crate::submission::Modality;
use serde::{Deserialize, Serialize};

/// Discrete credibility verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Acceptable,
    PartiallyAcceptable,
    Questionable,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [
        Outcome::Acceptable,
        Outcome::PartiallyAcceptable,
        Outcome::Questionable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Acceptable => "acceptable",
            Outcome::PartiallyAcceptable => "partially_acceptable",
            Outcome::Questionable => "questionable",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Outcome::Acceptable => "Acceptable",
            Outcome::PartiallyAcceptable => "Partially Acceptable",
            Outcome::Questionable => "Questionable",
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            Outcome::Acceptable => RiskLevel::Low,
            Outcome::PartiallyAcceptable => RiskLevel::Moderate,
            Outcome::Questionable => RiskLevel::High,
        }
    }

    /// Uniform choice over the three outcomes.
    pub fn pick(random: &mut dyn RandomSource) -> Outcome {
        Self::ALL[random.next_below(Self::ALL.len() as u32) as usize]
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Outcome::Acceptable => 0,
            Outcome::PartiallyAcceptable => 1,
            Outcome::Questionable => 2,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Outcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "acceptable" => Ok(Outcome::Acceptable),
            "partially_acceptable" | "partial" => Ok(Outcome::PartiallyAcceptable),
            "questionable" => Ok(Outcome::Questionable),
            _ => Err(DomainError::UnknownOutcome(s.to_string())),
        }
    }
}

/// Risk label derived from the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Half-open score range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub min: u8,
    pub max: u8,
}

impl ScoreBand {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, score: u8) -> bool {
        score >= self.min && score < self.max
    }

    /// Draw a score uniformly from the band.
    pub fn sample(&self, random: &mut dyn RandomSource) -> u8 {
        let width = self.max.saturating_sub(self.min) as u32;
        self.min + random.next_below(width) as u8
    }
}

/// Score bands used when the outcome itself is drawn at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousBands {
    pub acceptable: ScoreBand,
    pub partially_acceptable: ScoreBand,
    pub questionable: ScoreBand,
}

impl AmbiguousBands {
    pub fn band(&self, outcome: Outcome) -> ScoreBand {
        match outcome {
            Outcome::Acceptable => self.acceptable,
            Outcome::PartiallyAcceptable => self.partially_acceptable,
            Outcome::Questionable => self.questionable,
        }
    }

    /// Pick an outcome uniformly, then a score from its band.
    pub fn draw(&self, random: &mut dyn RandomSource) -> (Outcome, u8) {
        let outcome = Outcome::pick(random);
        (outcome, self.band(outcome).sample(random))
    }
}

/// Score cut-offs separating the three outcomes for one modality.
///
/// Every branch band of every classifier sits inside these cut-offs, so an
/// outcome can always be recovered from its score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandThresholds {
    /// Lowest acceptable score
    pub acceptable_min: u8,
    /// Lowest partially acceptable score
    pub partially_min: u8,
}

impl BandThresholds {
    pub fn for_modality(modality: Modality) -> Self {
        match modality {
            Modality::Text => Self {
                acceptable_min: 75,
                partially_min: 45,
            },
            Modality::Url => Self {
                acceptable_min: 75,
                partially_min: 45,
            },
            Modality::File => Self {
                acceptable_min: 75,
                partially_min: 45,
            },
        }
    }

    pub fn outcome_for(&self, score: u8) -> Outcome {
        if score >= self.acceptable_min {
            Outcome::Acceptable
        } else if score >= self.partially_min {
            Outcome::PartiallyAcceptable
        } else {
            Outcome::Questionable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{SequenceRandom, StdRandom};

    #[test]
    fn test_outcome_parse() {
        assert_eq!("acceptable".parse::<Outcome>().unwrap(), Outcome::Acceptable);
        assert_eq!(
            "partially-acceptable".parse::<Outcome>().unwrap(),
            Outcome::PartiallyAcceptable
        );
        assert_eq!(
            "Questionable".parse::<Outcome>().unwrap(),
            Outcome::Questionable
        );
        assert!("fine".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        let json = serde_json::to_string(&Outcome::PartiallyAcceptable).unwrap();
        assert_eq!(json, "\"partially_acceptable\"");
    }

    #[test]
    fn test_risk_level_follows_outcome() {
        assert_eq!(Outcome::Acceptable.risk_level(), RiskLevel::Low);
        assert_eq!(Outcome::PartiallyAcceptable.risk_level(), RiskLevel::Moderate);
        assert_eq!(Outcome::Questionable.risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_band_sample_stays_in_band() {
        let band = ScoreBand::new(80, 100);
        let mut random = StdRandom::seeded(11);
        for _ in 0..500 {
            assert!(band.contains(band.sample(&mut random)));
        }
    }

    #[test]
    fn test_band_sample_edges() {
        let band = ScoreBand::new(15, 40);
        assert_eq!(band.sample(&mut SequenceRandom::zeros()), 15);
        assert_eq!(band.sample(&mut SequenceRandom::new([24])), 39);
    }

    #[test]
    fn test_ambiguous_draw_is_pinned_by_sequence() {
        let bands = AmbiguousBands {
            acceptable: ScoreBand::new(75, 100),
            partially_acceptable: ScoreBand::new(45, 75),
            questionable: ScoreBand::new(10, 45),
        };
        assert_eq!(bands.draw(&mut SequenceRandom::new([0, 5])), (Outcome::Acceptable, 80));
        assert_eq!(
            bands.draw(&mut SequenceRandom::new([1, 10])),
            (Outcome::PartiallyAcceptable, 55)
        );
        assert_eq!(bands.draw(&mut SequenceRandom::new([2, 0])), (Outcome::Questionable, 10));
    }

    #[test]
    fn test_thresholds_outcome_for() {
        let thresholds = BandThresholds::for_modality(Modality::Text);
        assert_eq!(thresholds.outcome_for(100), Outcome::Acceptable);
        assert_eq!(thresholds.outcome_for(75), Outcome::Acceptable);
        assert_eq!(thresholds.outcome_for(74), Outcome::PartiallyAcceptable);
        assert_eq!(thresholds.outcome_for(45), Outcome::PartiallyAcceptable);
        assert_eq!(thresholds.outcome_for(44), Outcome::Questionable);
        assert_eq!(thresholds.outcome_for(0), Outcome::Questionable);
    }
}
