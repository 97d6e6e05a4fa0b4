//! Static word lists and emoticon tables shared by the scorers.
//!
//! Every list here is fixed at startup. The "extended" lists are only used by
//! the enhanced scoring profile.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome",
    "happy", "joy", "love", "like", "enjoy", "pleased", "satisfied", "perfect",
    "beautiful", "nice", "brilliant", "outstanding", "superb",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disgusting", "hate", "dislike",
    "sad", "angry", "frustrated", "disappointed", "upset", "worried", "anxious",
    "depressed", "miserable", "painful", "suffering", "dreadful",
];

pub const EXTENDED_POSITIVE_WORDS: &[&str] = &[
    "delighted", "ecstatic", "thrilled", "excited", "grateful", "blessed",
    "fortunate", "lucky", "successful", "achievement", "victory", "triumph",
];

pub const EXTENDED_NEGATIVE_WORDS: &[&str] = &[
    "devastated", "heartbroken", "crushed", "defeated", "hopeless", "desperate",
    "furious", "enraged", "irritated", "annoyed", "bothered", "troubled",
];

pub const POSITIVE_EMOTICONS: &[&str] = &[":)", ":-)", "😊", "😄", "😍", "👍", "❤️"];

pub const NEGATIVE_EMOTICONS: &[&str] = &[":(", ":-(", "😢", "😭", "😡", "👎", "💔"];

pub const EXTENDED_POSITIVE_EMOTICONS: &[&str] = &[
    "😃", "😀", "😁", "😆", "😅", "🤗", "🥰", "😘", "😋", "😎", "🤩", "🥳", "😇", "✨", "🌟",
];

pub const EXTENDED_NEGATIVE_EMOTICONS: &[&str] = &[
    "😞", "😔", "😟", "😕", "😣", "😖", "😠", "😤", "😾", "😿", "😰", "😨", "😧", "😦",
];

/// Word polarities in [-1, 1], used by both sentence-level estimators.
const POLARITY_ENTRIES: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.9),
    ("wonderful", 1.0),
    ("fantastic", 0.9),
    ("awesome", 1.0),
    ("happy", 0.8),
    ("joy", 0.8),
    ("love", 0.8),
    ("loved", 0.7),
    ("like", 0.3),
    ("enjoy", 0.5),
    ("enjoyed", 0.5),
    ("pleased", 0.5),
    ("satisfied", 0.5),
    ("perfect", 1.0),
    ("perfectly", 1.0),
    ("beautiful", 0.85),
    ("nice", 0.6),
    ("brilliant", 0.9),
    ("outstanding", 0.9),
    ("superb", 1.0),
    ("glad", 0.5),
    ("incredible", 0.9),
    ("delighted", 0.9),
    ("ecstatic", 0.9),
    ("thrilled", 0.8),
    ("excited", 0.6),
    ("grateful", 0.6),
    ("blessed", 0.6),
    ("lucky", 0.5),
    ("successful", 0.7),
    ("fun", 0.5),
    ("best", 1.0),
    ("better", 0.5),
    ("okay", 0.1),
    ("fine", 0.2),
    ("thanks", 0.4),
    ("thank", 0.4),
    ("bad", -0.7),
    ("terrible", -0.9),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("disgusting", -1.0),
    ("hate", -0.8),
    ("hated", -0.8),
    ("dislike", -0.5),
    ("sad", -0.5),
    ("angry", -0.5),
    ("frustrated", -0.6),
    ("disappointed", -0.6),
    ("upset", -0.5),
    ("worried", -0.4),
    ("anxious", -0.4),
    ("depressed", -0.7),
    ("miserable", -0.9),
    ("painful", -0.7),
    ("suffering", -0.7),
    ("dreadful", -0.9),
    ("worst", -1.0),
    ("worse", -0.5),
    ("devastated", -0.9),
    ("heartbroken", -0.9),
    ("hopeless", -0.8),
    ("furious", -0.9),
    ("annoyed", -0.5),
    ("boring", -0.5),
    ("stressed", -0.6),
    ("tired", -0.3),
    ("lonely", -0.6),
    ("scared", -0.6),
];

/// Words that amplify the polarity word that follows them.
const INTENSIFIER_ENTRIES: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("absolutely", 1.4),
    ("incredibly", 1.4),
    ("totally", 1.3),
    ("super", 1.3),
    ("quite", 1.1),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "neither", "nor", "cannot", "without",
];

pub static POLARITY: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| POLARITY_ENTRIES.iter().copied().collect());

pub static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIER_ENTRIES.iter().copied().collect());

static NEGATOR_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| NEGATORS.iter().copied().collect());

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?").unwrap());

/// Splits text into word tokens, keeping the original casing.
pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Splits text into lowercase word tokens.
pub fn lowercase_words(text: &str) -> Vec<String> {
    words(text).into_iter().map(|w| w.to_lowercase()).collect()
}

pub fn is_negator(token: &str) -> bool {
    NEGATOR_SET.contains(token) || token.ends_with("n't")
}

/// Positive and negative keyword sets plus emoticons for one scoring profile.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub positive_words: HashSet<&'static str>,
    pub negative_words: HashSet<&'static str>,
    pub positive_emoticons: Vec<&'static str>,
    pub negative_emoticons: Vec<&'static str>,
}

impl Lexicon {
    pub fn standard() -> Self {
        Self {
            positive_words: POSITIVE_WORDS.iter().copied().collect(),
            negative_words: NEGATIVE_WORDS.iter().copied().collect(),
            positive_emoticons: POSITIVE_EMOTICONS.to_vec(),
            negative_emoticons: NEGATIVE_EMOTICONS.to_vec(),
        }
    }

    pub fn extended() -> Self {
        let mut lexicon = Self::standard();
        lexicon.positive_words.extend(EXTENDED_POSITIVE_WORDS.iter().copied());
        lexicon.negative_words.extend(EXTENDED_NEGATIVE_WORDS.iter().copied());
        lexicon.positive_emoticons.extend(EXTENDED_POSITIVE_EMOTICONS.iter().copied());
        lexicon.negative_emoticons.extend(EXTENDED_NEGATIVE_EMOTICONS.iter().copied());
        lexicon
    }
}
