//! Per-session conversation state, kept in process memory.
//!
//! Sessions are created on first use and live until the process exits unless
//! an idle TTL is configured. Each session sits behind its own lock so that a
//! request can update and then read its context without interleaving with
//! another request for the same session.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub messages: VecDeque<Message>,
    /// Every topic ever detected in this session. Never shrinks.
    pub topics: BTreeSet<String>,
    pub sentiment_history: Vec<f64>,
    pub message_count: usize,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: VecDeque::new(),
            topics: BTreeSet::new(),
            sentiment_history: Vec::new(),
            message_count: 0,
            created_at: now,
            last_activity: now,
        }
    }

    /// Applies one inbound message to the context. The message log keeps only
    /// the newest `max_messages` entries.
    pub fn record(
        &mut self,
        text: &str,
        score: f64,
        topics: &[String],
        now: DateTime<Utc>,
        max_messages: usize,
    ) {
        self.messages.push_back(Message {
            text: text.to_string(),
            timestamp: now,
        });
        while self.messages.len() > max_messages {
            self.messages.pop_front();
        }
        self.message_count += 1;
        self.last_activity = now;
        self.topics.extend(topics.iter().cloned());
        self.sentiment_history.push(score);
    }

    pub fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_activity > ttl
    }
}

pub type SessionHandle = Arc<Mutex<SessionContext>>;

pub trait SessionStore: Send + Sync {
    /// Returns the handle for `session_id`, creating an empty context on first
    /// use.
    fn entry(&self, session_id: &str) -> SessionHandle;

    /// Snapshot of an existing session.
    fn get(&self, session_id: &str) -> Option<SessionContext>;

    fn remove(&self, session_id: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionHandle>>,
    idle_ttl: Option<Duration>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl: Some(ttl),
        }
    }

    /// Drops sessions idle for longer than the configured TTL. Sessions whose
    /// lock is currently held are in use and are kept.
    pub fn purge_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.lock();
        Self::purge_locked(&mut sessions, self.idle_ttl, now)
    }

    fn purge_locked(
        sessions: &mut HashMap<String, SessionHandle>,
        idle_ttl: Option<Duration>,
        now: DateTime<Utc>,
    ) -> usize {
        let Some(ttl) = idle_ttl else {
            return 0;
        };
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Some(context) => !context.is_idle(now, ttl),
            None => true,
        });
        let purged = before - sessions.len();
        if purged > 0 {
            log::info!("Purged {} idle sessions", purged);
        }
        purged
    }
}

impl SessionStore for InMemorySessionStore {
    fn entry(&self, session_id: &str) -> SessionHandle {
        let mut sessions = self.sessions.lock();
        if let Some(handle) = sessions.get(session_id) {
            return handle.clone();
        }

        let now = Utc::now();
        Self::purge_locked(&mut sessions, self.idle_ttl, now);
        log::debug!("Creating session '{}'", session_id);
        let handle = Arc::new(Mutex::new(SessionContext::new(now)));
        sessions.insert(session_id.to_string(), handle.clone());
        handle
    }

    fn get(&self, session_id: &str) -> Option<SessionContext> {
        let handle = self.sessions.lock().get(session_id).cloned()?;
        let context = handle.lock().clone();
        Some(context)
    }

    fn remove(&self, session_id: &str) -> bool {
        self.sessions.lock().remove(session_id).is_some()
    }

    fn len(&self) -> usize {
        self.sessions.lock().len()
    }
}
