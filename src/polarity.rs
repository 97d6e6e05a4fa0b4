//! Sentence-level polarity estimators.
//!
//! The scorer treats these as opaque collaborators: each one maps a sentence to
//! a signed float in [-1, 1]. Two implementations ship with the crate, a
//! rule-aware valence scorer and a plain bag-of-words average.

use crate::error::Result;
use crate::lexicon::{self, INTENSIFIERS, POLARITY};

pub trait PolarityEstimator: Send + Sync {
    /// Key used in the score breakdown.
    fn name(&self) -> &str;

    fn polarity(&self, text: &str) -> Result<f64>;
}

const VALENCE_SCALE: f64 = 4.0;
const NORMALIZATION_ALPHA: f64 = 15.0;
const BOOSTER_STEP: f64 = 0.293;
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];
const CAPS_EMPHASIS: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const LOOKBACK: usize = 3;

/// Rule-aware lexicon scorer.
///
/// Word valences live on a ±4 scale and are adjusted by boosters, negation in
/// the preceding three tokens, ALL-CAPS emphasis in mixed-case text, and a
/// "but" contrast (clauses before it count half, after it one and a half).
/// The raw sum is amplified by trailing exclamation marks and squashed into
/// [-1, 1] with `s / sqrt(s² + 15)`.
#[derive(Debug, Default, Clone)]
pub struct ValenceEstimator;

impl ValenceEstimator {
    fn is_all_caps(word: &str) -> bool {
        word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
    }

    fn normalize(sum: f64) -> f64 {
        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl PolarityEstimator for ValenceEstimator {
    fn name(&self) -> &str {
        "valence"
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        let raw = lexicon::words(text);
        let lower: Vec<String> = raw.iter().map(|w| w.to_lowercase()).collect();

        let caps_count = raw.iter().filter(|w| Self::is_all_caps(w)).count();
        let mixed_case = caps_count > 0 && caps_count < raw.len();

        let mut valences: Vec<(usize, f64)> = Vec::new();
        for (i, token) in lower.iter().enumerate() {
            let Some(&polarity) = POLARITY.get(token.as_str()) else {
                continue;
            };
            let mut valence = polarity * VALENCE_SCALE;
            let direction = valence.signum();

            if mixed_case && Self::is_all_caps(raw[i]) {
                valence += CAPS_EMPHASIS * direction;
            }

            let window = i.saturating_sub(LOOKBACK)..i;
            for (distance, j) in window.clone().rev().enumerate() {
                if let Some(&factor) = INTENSIFIERS.get(lower[j].as_str()) {
                    let step = if factor >= 1.0 { BOOSTER_STEP } else { -BOOSTER_STEP };
                    valence += step * BOOSTER_DAMPING[distance] * direction;
                }
            }

            if window.clone().any(|j| lexicon::is_negator(&lower[j])) {
                valence *= NEGATION_SCALAR;
            }

            valences.push((i, valence));
        }

        if let Some(pivot) = lower.iter().position(|t| t == "but") {
            for (i, valence) in valences.iter_mut() {
                if *i < pivot {
                    *valence *= 0.5;
                } else {
                    *valence *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().map(|(_, v)| v).sum();
        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += bangs * EXCLAMATION_STEP * sum.signum();
        }

        Ok(Self::normalize(sum))
    }
}

/// Mean polarity of the words found in the lexicon.
///
/// An intensifier right before a word multiplies it; a negator within the two
/// preceding tokens scales it by -0.5. Text without any known word scores 0.
#[derive(Debug, Default, Clone)]
pub struct PatternEstimator;

impl PolarityEstimator for PatternEstimator {
    fn name(&self) -> &str {
        "pattern"
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        let tokens = lexicon::lowercase_words(text);
        let mut total = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&polarity) = POLARITY.get(token.as_str()) else {
                continue;
            };
            let mut value = polarity;
            if i > 0 {
                if let Some(&factor) = INTENSIFIERS.get(tokens[i - 1].as_str()) {
                    value *= factor;
                }
            }
            if tokens[i.saturating_sub(2)..i].iter().any(|t| lexicon::is_negator(t)) {
                value *= -0.5;
            }
            total += value;
            matched += 1;
        }

        if matched == 0 {
            return Ok(0.0);
        }
        Ok((total / matched as f64).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valence(text: &str) -> f64 {
        ValenceEstimator.polarity(text).unwrap()
    }

    fn pattern(text: &str) -> f64 {
        PatternEstimator.polarity(text).unwrap()
    }

    #[test]
    fn unknown_words_score_zero() {
        assert_eq!(valence("The train leaves at noon"), 0.0);
        assert_eq!(pattern("The train leaves at noon"), 0.0);
        assert_eq!(pattern(""), 0.0);
    }

    #[test]
    fn polarity_sign_follows_the_words() {
        assert!(valence("I love this!") > 0.0);
        assert!(pattern("I love this!") > 0.0);
        assert!(valence("I hate my job, it's terrible") < 0.0);
        assert!(pattern("I hate my job, it's terrible") < 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        assert!(valence("this is not good") < 0.0);
        assert!(pattern("this is not good") < 0.0);
        assert!(valence("I don't hate it") > 0.0);
    }

    #[test]
    fn boosters_and_caps_amplify() {
        assert!(valence("this is very good") > valence("this is good"));
        assert!(pattern("this is very good") > pattern("this is good"));
        assert!(valence("I LOVE this") > valence("I love this"));
    }

    #[test]
    fn exclamations_amplify_valence() {
        assert!(valence("this is good!!!") > valence("this is good"));
    }

    #[test]
    fn clause_after_but_dominates() {
        assert!(valence("The food was good but the service was terrible") < 0.0);
        assert!(valence("The start was terrible but the ending was good") > 0.0);
    }

    #[test]
    fn scores_stay_bounded() {
        let text = "amazing wonderful perfect superb excellent awesome best!!!!!!";
        let v = valence(text);
        assert!(v > 0.9 && v <= 1.0);
        assert!(pattern("extremely perfect") <= 1.0);
    }
}
