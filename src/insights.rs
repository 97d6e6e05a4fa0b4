//! Follow-up suggestions and coarse conversation insights derived from the
//! accumulated session state.

use crate::sentiment::Thresholds;
use crate::session::SessionContext;
use crate::topics::TopicVocabulary;
use chrono::{DateTime, Utc};
use serde::Serialize;

const EARLY_CONVERSATION: usize = 3;
const MIN_SUGGESTIONS: usize = 3;
const MAX_SUGGESTIONS: usize = 5;

const GENERIC_PROMPTS: &[&str] = &["Tell me more about your day", "What's on your mind lately?"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentTrend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl EngagementLevel {
    pub fn from_message_count(count: usize) -> Self {
        match count {
            0..=4 => EngagementLevel::Low,
            5..=14 => EngagementLevel::Medium,
            15..=29 => EngagementLevel::High,
            _ => EngagementLevel::VeryHigh,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub message_count: usize,
    pub topics: Vec<String>,
    pub last_activity: DateTime<Utc>,
    pub engagement: EngagementLevel,
    pub trend: SentimentTrend,
    pub average_sentiment: f64,
}

pub struct InsightEngine {
    thresholds: Thresholds,
    trend_window: usize,
    long_conversation_threshold: usize,
    max_suggestions: usize,
}

impl InsightEngine {
    pub fn new(
        thresholds: Thresholds,
        trend_window: usize,
        long_conversation_threshold: usize,
        max_suggestions: usize,
    ) -> Self {
        Self {
            thresholds,
            trend_window,
            long_conversation_threshold,
            max_suggestions: max_suggestions.clamp(MIN_SUGGESTIONS, MAX_SUGGESTIONS),
        }
    }

    /// Compares positive and negative entries among the newest `trend_window`
    /// scores. A strict majority decides; anything else is stable.
    pub fn sentiment_trend(&self, history: &[f64]) -> SentimentTrend {
        let recent = &history[history.len().saturating_sub(self.trend_window)..];
        let positive = recent.iter().filter(|&&s| s > self.thresholds.positive).count();
        let negative = recent.iter().filter(|&&s| s < self.thresholds.negative).count();

        if positive > negative {
            SentimentTrend::Improving
        } else if negative > positive {
            SentimentTrend::Declining
        } else {
            SentimentTrend::Stable
        }
    }

    fn trend_prompt(trend: SentimentTrend) -> &'static str {
        match trend {
            SentimentTrend::Improving => "It sounds like things are looking up. What's been going well?",
            SentimentTrend::Declining => "Would you like to talk about what's been weighing on you?",
            SentimentTrend::Stable => "Is there a new topic you'd like to explore together?",
        }
    }

    pub fn suggest(&self, context: &SessionContext, vocabulary: &TopicVocabulary) -> Vec<String> {
        let mut candidates: Vec<&str> = Vec::new();

        if context.message_count < EARLY_CONVERSATION {
            candidates.extend(GENERIC_PROMPTS.iter().copied());
        }

        candidates.extend(
            vocabulary
                .topics()
                .iter()
                .filter(|topic| context.topics.contains(topic.label))
                .map(|topic| topic.prompt),
        );

        if context.message_count > self.long_conversation_threshold {
            candidates.push(Self::trend_prompt(self.sentiment_trend(&context.sentiment_history)));
        }

        let mut suggestions: Vec<String> = Vec::with_capacity(self.max_suggestions);
        for candidate in candidates {
            if suggestions.len() == self.max_suggestions {
                break;
            }
            if !suggestions.iter().any(|s| s == candidate) {
                suggestions.push(candidate.to_string());
            }
        }
        suggestions
    }

    pub fn summarize(&self, context: &SessionContext) -> SessionSummary {
        let average_sentiment = if context.sentiment_history.is_empty() {
            0.0
        } else {
            context.sentiment_history.iter().sum::<f64>() / context.sentiment_history.len() as f64
        };

        SessionSummary {
            message_count: context.message_count,
            topics: context.topics.iter().cloned().collect(),
            last_activity: context.last_activity,
            engagement: EngagementLevel::from_message_count(context.message_count),
            trend: self.sentiment_trend(&context.sentiment_history),
            average_sentiment,
        }
    }
}
