//! Multi-method sentiment scoring.
//!
//! Four sub-scores are combined with a fixed weight vector: two sentence-level
//! polarity estimators, a keyword lexicon count and punctuation/emoticon rules.

use crate::config::{ScoringSettings, Weights};
use crate::error::Result;
use crate::lexicon::{self, Lexicon};
use crate::polarity::{PatternEstimator, PolarityEstimator, ValenceEstimator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const EXCLAMATION_STEP: f64 = 0.1;
const EMOTICON_STEP: f64 = 0.3;
const SHOUTING_BONUS: f64 = 0.2;
const SHOUTING_MIN_CHARS: usize = 3;

const HIGH_CONFIDENCE: f64 = 0.7;
const MEDIUM_CONFIDENCE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > HIGH_CONFIDENCE {
            ConfidenceLevel::High
        } else if confidence > MEDIUM_CONFIDENCE {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Label cut-offs. Both comparisons are strict, so a score sitting exactly on
/// a threshold is neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.1,
            negative: -0.1,
        }
    }
}

impl Thresholds {
    pub fn label_for(&self, score: f64) -> SentimentLabel {
        if score > self.positive {
            SentimentLabel::Positive
        } else if score < self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub combined_score: f64,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub breakdown: BTreeMap<String, f64>,
}

pub struct SentimentScorer {
    primary: Box<dyn PolarityEstimator>,
    secondary: Box<dyn PolarityEstimator>,
    lexicon: Lexicon,
    lexicon_magnitude: f64,
    weights: Weights,
    thresholds: Thresholds,
    clamp_combined: bool,
}

impl SentimentScorer {
    pub fn new(settings: &ScoringSettings) -> Self {
        Self::with_estimators(
            settings,
            Box::new(ValenceEstimator),
            Box::new(PatternEstimator),
        )
    }

    pub fn with_estimators(
        settings: &ScoringSettings,
        primary: Box<dyn PolarityEstimator>,
        secondary: Box<dyn PolarityEstimator>,
    ) -> Self {
        Self {
            primary,
            secondary,
            lexicon: settings.profile.lexicon(),
            lexicon_magnitude: settings.profile.lexicon_magnitude(),
            weights: settings.weights,
            thresholds: Thresholds {
                positive: settings.positive_threshold,
                negative: settings.negative_threshold,
            },
            clamp_combined: settings.clamp_combined,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Scores `text`. Callers reject empty input; an estimator failure is
    /// returned as-is and no partial result is produced.
    pub fn score(&self, text: &str) -> Result<SentimentResult> {
        let primary = self.primary.polarity(text)?;
        let secondary = self.secondary.polarity(text)?;
        let keywords = self.keyword_score(text);
        let rules = self.rule_score(text);

        let mut combined_score = primary * self.weights.valence
            + secondary * self.weights.pattern
            + keywords * self.weights.keywords
            + rules * self.weights.rules;
        if self.clamp_combined {
            combined_score = combined_score.clamp(-1.0, 1.0);
        }

        let confidence = combined_score.abs();
        let breakdown = BTreeMap::from([
            (self.primary.name().to_string(), primary),
            (self.secondary.name().to_string(), secondary),
            ("keywords".to_string(), keywords),
            ("rules".to_string(), rules),
        ]);

        Ok(SentimentResult {
            label: self.thresholds.label_for(combined_score),
            combined_score,
            confidence,
            confidence_level: ConfidenceLevel::from_confidence(confidence),
            breakdown,
        })
    }

    /// `±magnitude` for whichever keyword set has more hits, 0 on a tie.
    pub fn keyword_score(&self, text: &str) -> f64 {
        let tokens = lexicon::lowercase_words(text);
        let positive = tokens
            .iter()
            .filter(|t| self.lexicon.positive_words.contains(t.as_str()))
            .count();
        let negative = tokens
            .iter()
            .filter(|t| self.lexicon.negative_words.contains(t.as_str()))
            .count();

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => self.lexicon_magnitude,
            std::cmp::Ordering::Less => -self.lexicon_magnitude,
            std::cmp::Ordering::Equal => 0.0,
        }
    }

    pub fn rule_score(&self, text: &str) -> f64 {
        let mut score = EXCLAMATION_STEP * text.matches('!').count() as f64;

        let positive: usize = self
            .lexicon
            .positive_emoticons
            .iter()
            .map(|e| text.matches(e).count())
            .sum();
        let negative: usize = self
            .lexicon
            .negative_emoticons
            .iter()
            .map(|e| text.matches(e).count())
            .sum();
        score += EMOTICON_STEP * (positive as f64 - negative as f64);

        if is_shouting(text) && text.chars().count() > SHOUTING_MIN_CHARS {
            score += SHOUTING_BONUS;
        }

        score.clamp(-1.0, 1.0)
    }
}

/// True when the text has cased characters and none of them is lower-case.
fn is_shouting(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringProfile;
    use crate::error::ChatError;

    struct Fixed(&'static str, f64);

    impl PolarityEstimator for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        fn polarity(&self, _text: &str) -> Result<f64> {
            Ok(self.1)
        }
    }

    struct Failing;

    impl PolarityEstimator for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn polarity(&self, _text: &str) -> Result<f64> {
            Err(ChatError::Estimator {
                name: "failing".into(),
                reason: "model unavailable".into(),
            })
        }
    }

    fn scorer() -> SentimentScorer {
        SentimentScorer::new(&ScoringSettings::default())
    }

    #[test]
    fn label_thresholds_are_strict() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.label_for(0.1), SentimentLabel::Neutral);
        assert_eq!(thresholds.label_for(-0.1), SentimentLabel::Neutral);
        assert_eq!(thresholds.label_for(0.0), SentimentLabel::Neutral);
        assert_eq!(thresholds.label_for(0.1000001), SentimentLabel::Positive);
        assert_eq!(thresholds.label_for(-0.1000001), SentimentLabel::Negative);
        assert_eq!(thresholds.label_for(3.0), SentimentLabel::Positive);
    }

    #[test]
    fn confidence_buckets() {
        assert_eq!(ConfidenceLevel::from_confidence(0.0), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0.4), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0.41), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.7), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.71), ConfidenceLevel::High);
    }

    #[test]
    fn keyword_tie_scores_zero() {
        assert_eq!(scorer().keyword_score("good bad"), 0.0);
        assert_eq!(scorer().keyword_score("nothing here"), 0.0);
        assert_eq!(scorer().keyword_score("good good bad"), 0.5);
        assert_eq!(scorer().keyword_score("Terrible, awful, but nice"), -0.5);
    }

    #[test]
    fn enhanced_profile_uses_larger_keyword_magnitude() {
        let settings = ScoringSettings {
            profile: ScoringProfile::Enhanced,
            ..ScoringSettings::default()
        };
        let scorer = SentimentScorer::new(&settings);
        assert_eq!(scorer.keyword_score("I feel blessed"), 0.6);
        assert_eq!(scorer.keyword_score("I am furious"), -0.6);
    }

    #[test]
    fn emoticons_add_up() {
        let scorer = scorer();
        assert!((scorer.rule_score("nice 😊 😍") - 0.6).abs() < 1e-9);
        assert!(scorer.rule_score("meh 😊 😢").abs() < 1e-9);
        assert!((scorer.rule_score("ok :) :)") - 0.6).abs() < 1e-9);
    }

    #[test]
    fn rules_count_exclamations_and_shouting() {
        let scorer = scorer();
        assert!((scorer.rule_score("wow!!") - 0.2).abs() < 1e-9);
        assert!((scorer.rule_score("THIS IS GREAT") - 0.2).abs() < 1e-9);
        assert_eq!(scorer.rule_score("OK"), 0.0);
        assert_eq!(scorer.rule_score("1234 5678"), 0.0);
    }

    #[test]
    fn rule_score_is_clamped() {
        assert_eq!(scorer().rule_score("!!!!!!!!!!!!!!!"), 1.0);
        assert_eq!(scorer().rule_score("💔💔💔💔💔"), -1.0);
    }

    #[test]
    fn combined_score_uses_weights_without_reclamp() {
        let settings = ScoringSettings::default();
        let scorer = SentimentScorer::with_estimators(
            &settings,
            Box::new(Fixed("valence", 3.0)),
            Box::new(Fixed("pattern", 2.0)),
        );
        let result = scorer.score("plain words").unwrap();
        assert!((result.combined_score - 1.8).abs() < 1e-9);
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);
        assert_eq!(result.breakdown["valence"], 3.0);
        assert_eq!(result.breakdown["keywords"], 0.0);
    }

    #[test]
    fn combined_score_can_be_reclamped() {
        let settings = ScoringSettings {
            clamp_combined: true,
            ..ScoringSettings::default()
        };
        let scorer = SentimentScorer::with_estimators(
            &settings,
            Box::new(Fixed("valence", -3.0)),
            Box::new(Fixed("pattern", -2.0)),
        );
        let result = scorer.score("plain words").unwrap();
        assert_eq!(result.combined_score, -1.0);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn estimator_failure_propagates() {
        let scorer = SentimentScorer::with_estimators(
            &ScoringSettings::default(),
            Box::new(ValenceEstimator),
            Box::new(Failing),
        );
        assert!(matches!(
            scorer.score("hello"),
            Err(ChatError::Estimator { .. })
        ));
    }

    #[test]
    fn scores_everyday_messages() {
        let scorer = scorer();

        let happy = scorer.score("I love this! 😊").unwrap();
        assert_eq!(happy.label, SentimentLabel::Positive);
        assert!(happy.confidence > 0.0);

        let unhappy = scorer.score("I hate my job, it's terrible").unwrap();
        assert_eq!(unhappy.label, SentimentLabel::Negative);
        assert_eq!(unhappy.breakdown["keywords"], -0.5);

        let flat = scorer.score("I'm just checking in").unwrap();
        assert_eq!(flat.label, SentimentLabel::Neutral);
        assert!(flat.confidence >= 0.0);
    }
}
