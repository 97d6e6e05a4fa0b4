use crate::error::{ChatError, Result};
use crate::lexicon::Lexicon;
use crate::responses::TemplateSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CONFIG_NAME: &str = "Config";
const CONFIG_NAME_VAR: &str = "SENTIBOT_CONFIG";
const ENV_PREFIX: &str = "SENTIBOT";
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Named scoring variants. Each one picks a keyword lexicon, the magnitude
/// the keyword sub-score reports and the reply templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringProfile {
    #[default]
    Standard,
    Enhanced,
}

impl ScoringProfile {
    pub fn lexicon(self) -> Lexicon {
        match self {
            ScoringProfile::Standard => Lexicon::standard(),
            ScoringProfile::Enhanced => Lexicon::extended(),
        }
    }

    pub fn lexicon_magnitude(self) -> f64 {
        match self {
            ScoringProfile::Standard => 0.5,
            ScoringProfile::Enhanced => 0.6,
        }
    }

    pub fn templates(self) -> TemplateSet {
        match self {
            ScoringProfile::Standard => TemplateSet::standard(),
            ScoringProfile::Enhanced => TemplateSet::extended(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub valence: f64,
    pub pattern: f64,
    pub keywords: f64,
    pub rules: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            valence: 0.4,
            pattern: 0.3,
            keywords: 0.2,
            rules: 0.1,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.valence + self.pattern + self.keywords + self.rules
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicMatching {
    /// Trigger may appear anywhere, including inside other words.
    #[default]
    Substring,
    WordBoundary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub profile: ScoringProfile,
    pub weights: Weights,
    pub positive_threshold: f64,
    pub negative_threshold: f64,
    /// Reclamp the weighted sum to [-1, 1]. Off keeps the historical behavior.
    pub clamp_combined: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            profile: ScoringProfile::Standard,
            weights: Weights::default(),
            positive_threshold: 0.1,
            negative_threshold: -0.1,
            clamp_combined: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationSettings {
    pub max_messages: usize,
    pub long_conversation_threshold: usize,
    pub max_suggestions: usize,
    pub trend_window: usize,
    pub topic_matching: TopicMatching,
    pub idle_ttl_secs: Option<u64>,
}

impl ConversationSettings {
    /// Idle TTL as a duration. Values chrono cannot represent are rejected.
    pub fn idle_ttl(&self) -> Result<Option<chrono::Duration>> {
        let Some(secs) = self.idle_ttl_secs else {
            return Ok(None);
        };
        i64::try_from(secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .map(Some)
            .ok_or_else(|| ChatError::InvalidConfig(format!("idle_ttl_secs {secs} is out of range")))
    }
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self {
            max_messages: 50,
            long_conversation_threshold: 10,
            max_suggestions: 3,
            trend_window: 5,
            topic_matching: TopicMatching::Substring,
            idle_ttl_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub scoring: ScoringSettings,
    pub conversation: ConversationSettings,
}

impl Settings {
    /// Loads `Config.toml` (or the file named by `SENTIBOT_CONFIG`) if present,
    /// then applies `SENTIBOT__SECTION__KEY` environment overrides.
    pub fn load() -> Result<Self> {
        let name = std::env::var(CONFIG_NAME_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_NAME.to_string());
        let settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(&name).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let sum = self.scoring.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ChatError::InvalidConfig(format!(
                "scoring weights must sum to 1.0, got {sum}"
            )));
        }
        if self.scoring.negative_threshold > self.scoring.positive_threshold {
            return Err(ChatError::InvalidConfig(
                "negative_threshold must not exceed positive_threshold".to_string(),
            ));
        }
        if self.conversation.max_messages == 0 {
            return Err(ChatError::InvalidConfig("max_messages must be positive".to_string()));
        }
        if self.conversation.trend_window == 0 {
            return Err(ChatError::InvalidConfig("trend_window must be positive".to_string()));
        }
        self.conversation.idle_ttl()?;
        Ok(())
    }
}
