use crate::config::Settings;
use crate::error::{ChatError, Result};
use crate::insights::{InsightEngine, SessionSummary};
use crate::responses::{RandomSource, ResponseSelector, ThreadRandom};
use crate::sentiment::{SentimentResult, SentimentScorer};
use crate::session::{InMemorySessionStore, SessionStore};
use crate::topics::TopicVocabulary;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

/// Everything produced for one inbound message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    pub sentiment: SentimentResult,
    pub detected_topics: Vec<String>,
    pub response: String,
    pub suggestions: Vec<String>,
    pub summary: SessionSummary,
}

pub struct Chatbot {
    scorer: SentimentScorer,
    vocabulary: TopicVocabulary,
    selector: ResponseSelector,
    insights: InsightEngine,
    sessions: Arc<dyn SessionStore>,
    rng: Arc<dyn RandomSource>,
    max_messages: usize,
}

impl Chatbot {
    pub fn new(settings: &Settings) -> Result<Self> {
        let sessions: Arc<dyn SessionStore> = match settings.conversation.idle_ttl()? {
            Some(ttl) => Arc::new(InMemorySessionStore::with_idle_ttl(ttl)),
            None => Arc::new(InMemorySessionStore::new()),
        };
        Ok(Self::with_parts(
            settings,
            SentimentScorer::new(&settings.scoring),
            sessions,
            Arc::new(ThreadRandom),
        ))
    }

    pub fn with_parts(
        settings: &Settings,
        scorer: SentimentScorer,
        sessions: Arc<dyn SessionStore>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        let conversation = &settings.conversation;
        Self {
            insights: InsightEngine::new(
                scorer.thresholds(),
                conversation.trend_window,
                conversation.long_conversation_threshold,
                conversation.max_suggestions,
            ),
            scorer,
            vocabulary: TopicVocabulary::with_matching(conversation.topic_matching),
            selector: ResponseSelector::for_profile(
                settings.scoring.profile,
                conversation.long_conversation_threshold,
            ),
            sessions,
            rng,
            max_messages: conversation.max_messages,
        }
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    /// Scores `text` without touching any session.
    pub fn analyze(&self, text: &str) -> Result<SentimentResult> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        self.scorer.score(text)
    }

    /// Runs the full pipeline for one message. The session lock is held from
    /// the context update through the summary so concurrent requests on the
    /// same session cannot interleave.
    pub fn process(&self, session_id: &str, message: &str) -> Result<ChatOutcome> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let sentiment = self.scorer.score(message).map_err(|e| {
            log::error!("Scoring failed for session '{}': {}", session_id, e);
            e
        })?;
        let detected_topics = self.vocabulary.detect(message);

        let handle = self.sessions.entry(session_id);
        let mut context = handle.lock();
        context.record(
            message,
            sentiment.combined_score,
            &detected_topics,
            Utc::now(),
            self.max_messages,
        );

        let response = self.selector.select(&sentiment, message, &context, self.rng.as_ref());
        let suggestions = self.insights.suggest(&context, &self.vocabulary);
        let summary = self.insights.summarize(&context);
        drop(context);

        log::debug!(
            "Session '{}' message #{}: {} ({:.3})",
            session_id,
            summary.message_count,
            sentiment.label,
            sentiment.combined_score
        );

        Ok(ChatOutcome {
            sentiment,
            detected_topics,
            response,
            suggestions,
            summary,
        })
    }

    pub fn summary(&self, session_id: &str) -> Option<SessionSummary> {
        self.sessions
            .get(session_id)
            .map(|context| self.insights.summarize(&context))
    }
}
