use crate::config::ScoringProfile;
use crate::sentiment::{SentimentLabel, SentimentResult};
use crate::session::SessionContext;
use rand::Rng;

const GREETING_PHRASES: &[&str] = &["how are you", "how do you feel"];

const POSITIVE_TEMPLATES: &[&str] = &[
    "That's wonderful! Your positive energy is contagious. 😊",
    "I'm so glad to hear that! It sounds like things are going well for you.",
    "That's fantastic! Your enthusiasm really comes through in your message.",
    "Wonderful! I can feel your positive vibes. Keep that energy going! ✨",
];

const NEGATIVE_TEMPLATES: &[&str] = &[
    "I'm sorry to hear that you're feeling this way. Remember, it's okay to not be okay.",
    "I can sense that you're going through a difficult time. Would you like to talk more about it?",
    "I'm here to listen. Sometimes talking about our feelings can help us feel better.",
    "I understand this is tough. Remember that difficult times are temporary, and you're not alone.",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
    "I see you're being quite neutral about this. Would you like to elaborate?",
    "Interesting perspective. I'd love to hear more about your thoughts on this.",
    "I'm curious to know more about how you feel. Care to share?",
    "Thanks for sharing. I'd like to understand your perspective better.",
];

const EXTENDED_POSITIVE_TEMPLATES: &[&str] = &[
    "That's wonderful! Your positive energy is contagious. 😊",
    "I'm so glad to hear that! It sounds like things are going well for you.",
    "That's fantastic! Your enthusiasm really comes through in your message.",
    "Wonderful! I can feel your positive vibes. Keep that energy going! ✨",
    "Amazing! Your positivity is inspiring. Keep spreading that joy! 🌟",
];

const EXTENDED_NEGATIVE_TEMPLATES: &[&str] = &[
    "I'm sorry to hear that you're feeling this way. Remember, it's okay to not be okay.",
    "I can sense that you're going through a difficult time. Would you like to talk more about it?",
    "I'm here to listen. Sometimes talking about our feelings can help us feel better.",
    "I understand this is tough. Remember that difficult times are temporary, and you're not alone.",
    "I hear you, and I want you to know that your feelings are valid. You're not alone in this.",
];

const EXTENDED_NEUTRAL_TEMPLATES: &[&str] = &[
    "I see you're being quite neutral about this. Would you like to elaborate?",
    "Interesting perspective. I'd love to hear more about your thoughts on this.",
    "I'm curious to know more about how you feel. Care to share?",
    "Thanks for sharing. I'd like to understand your perspective better.",
    "That's an interesting point. Tell me more about what you think.",
];

const LONG_POSITIVE_TEMPLATES: &[&str] = &[
    "We've covered a lot together, and your good mood keeps shining through!",
    "It's great to see you still in such high spirits after all this chatting.",
];

const LONG_NEGATIVE_TEMPLATES: &[&str] = &[
    "Thank you for trusting me with all of this. I'm still here, and we can keep talking.",
    "We've talked for a while now, and I can tell this weighs on you. Take all the time you need.",
];

const LONG_NEUTRAL_TEMPLATES: &[&str] = &[
    "We've had quite a conversation. Is there anything you'd like to dig into further?",
    "I've enjoyed chatting with you. What else is on your mind?",
];

/// Chooses an index in `0..len`. Injected so tests can pin the choice.
pub trait RandomSource: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Per-label reply templates for ordinary (not greeting, not long) turns.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSet {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    neutral: &'static [&'static str],
}

impl TemplateSet {
    pub fn standard() -> Self {
        Self {
            positive: POSITIVE_TEMPLATES,
            negative: NEGATIVE_TEMPLATES,
            neutral: NEUTRAL_TEMPLATES,
        }
    }

    pub fn extended() -> Self {
        Self {
            positive: EXTENDED_POSITIVE_TEMPLATES,
            negative: EXTENDED_NEGATIVE_TEMPLATES,
            neutral: EXTENDED_NEUTRAL_TEMPLATES,
        }
    }

    pub fn for_label(&self, label: SentimentLabel) -> &'static [&'static str] {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::standard()
    }
}

pub struct ResponseSelector {
    long_conversation_threshold: usize,
    templates: TemplateSet,
}

impl ResponseSelector {
    pub fn new(long_conversation_threshold: usize, templates: TemplateSet) -> Self {
        Self {
            long_conversation_threshold,
            templates,
        }
    }

    pub fn for_profile(profile: ScoringProfile, long_conversation_threshold: usize) -> Self {
        Self::new(long_conversation_threshold, profile.templates())
    }

    pub fn greeting(label: SentimentLabel) -> &'static str {
        match label {
            SentimentLabel::Positive => {
                "I'm doing great, and I can sense your positive energy! How can I help you today?"
            }
            SentimentLabel::Negative => {
                "I'm here for you. I notice you might be having a tough time. Would you like to talk about it?"
            }
            SentimentLabel::Neutral => {
                "I'm doing well, thank you for asking. How are you feeling today?"
            }
        }
    }

    pub fn templates(&self, label: SentimentLabel) -> &'static [&'static str] {
        self.templates.for_label(label)
    }

    pub fn long_conversation_templates(label: SentimentLabel) -> &'static [&'static str] {
        match label {
            SentimentLabel::Positive => LONG_POSITIVE_TEMPLATES,
            SentimentLabel::Negative => LONG_NEGATIVE_TEMPLATES,
            SentimentLabel::Neutral => LONG_NEUTRAL_TEMPLATES,
        }
    }

    fn is_greeting(text: &str) -> bool {
        let lower = text.to_lowercase();
        GREETING_PHRASES.iter().any(|p| lower.contains(p))
    }

    /// Greeting questions win, then long conversations get their own tier,
    /// otherwise a random template for the label.
    pub fn select(
        &self,
        result: &SentimentResult,
        text: &str,
        context: &SessionContext,
        rng: &dyn RandomSource,
    ) -> String {
        if Self::is_greeting(text) {
            return Self::greeting(result.label).to_string();
        }

        let templates = if context.message_count > self.long_conversation_threshold {
            Self::long_conversation_templates(result.label)
        } else {
            self.templates(result.label)
        };
        templates[rng.pick(templates.len()).min(templates.len() - 1)].to_string()
    }
}
