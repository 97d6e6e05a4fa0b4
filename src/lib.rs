//! Sentiment-aware chatbot core: multi-method sentiment scoring, per-session
//! conversation context, topic detection and follow-up suggestions, plus the
//! thin actix-web surface that serves them.

pub mod chatbot;
pub mod config;
pub mod error;
pub mod insights;
pub mod lexicon;
pub mod polarity;
pub mod responses;
pub mod routes;
pub mod sentiment;
pub mod session;
pub mod topics;

pub use crate::chatbot::{ChatOutcome, Chatbot};
pub use crate::config::Settings;
pub use crate::error::{ChatError, Result};
pub use crate::sentiment::{SentimentLabel, SentimentResult, SentimentScorer};
