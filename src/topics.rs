use crate::config::TopicMatching;
use regex::Regex;

#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
    /// Follow-up prompt offered once the topic has come up.
    pub prompt: &'static str,
}

const DEFAULT_TOPICS: &[Topic] = &[
    Topic {
        label: "technology",
        triggers: &[
            "computer", "software", "programming", "ai", "machine learning", "data",
            "internet", "app", "digital", "tech", "code", "algorithm", "database",
            "cloud", "cybersecurity",
        ],
        prompt: "What's your favorite tech gadget?",
    },
    Topic {
        label: "health",
        triggers: &[
            "health", "medical", "doctor", "hospital", "medicine", "symptoms",
            "treatment", "exercise", "diet", "nutrition", "fitness", "wellness",
            "mental health", "therapy", "recovery",
        ],
        prompt: "How do you stay healthy?",
    },
    Topic {
        label: "work",
        triggers: &[
            "job", "career", "work", "office", "business", "company", "project",
            "meeting", "colleague", "boss", "salary", "promotion", "workplace",
            "professional", "industry",
        ],
        prompt: "What do you enjoy most about your work?",
    },
    Topic {
        label: "relationships",
        triggers: &[
            "friend", "family", "partner", "relationship", "dating", "marriage",
            "parent", "child", "sibling", "romance", "boyfriend", "girlfriend",
            "wife", "husband",
        ],
        prompt: "Who are the people that matter most to you?",
    },
    Topic {
        label: "education",
        triggers: &[
            "school", "university", "college", "study", "exam", "homework", "class",
            "teacher", "student", "course", "learning",
        ],
        prompt: "What's something you've learned recently?",
    },
    Topic {
        label: "travel",
        triggers: &[
            "travel", "trip", "vacation", "holiday", "flight", "hotel", "beach",
            "abroad", "journey", "tourist",
        ],
        prompt: "Where would you most like to travel next?",
    },
    Topic {
        label: "food",
        triggers: &[
            "food", "recipe", "cooking", "restaurant", "dinner", "lunch", "breakfast",
            "meal", "pizza", "coffee",
        ],
        prompt: "What's your favorite thing to eat?",
    },
    Topic {
        label: "entertainment",
        triggers: &[
            "movie", "film", "music", "song", "book", "game", "netflix", "series",
            "concert", "show",
        ],
        prompt: "Have you watched or read anything good lately?",
    },
    Topic {
        label: "sports",
        triggers: &[
            "sport", "football", "soccer", "basketball", "tennis", "gym", "running",
            "match", "team", "workout",
        ],
        prompt: "Do you have a favorite sport or team?",
    },
    Topic {
        label: "finance",
        triggers: &[
            "money", "budget", "savings", "invest", "loan", "debt", "rent", "bank",
            "expense", "bills",
        ],
        prompt: "Are you working toward any financial goals?",
    },
    Topic {
        label: "weather",
        triggers: &[
            "weather", "rain", "sunny", "snow", "storm", "cold outside", "hot outside",
            "temperature", "forecast",
        ],
        prompt: "What's your favorite kind of weather?",
    },
    Topic {
        label: "hobbies",
        triggers: &[
            "hobby", "painting", "drawing", "gardening", "photography", "reading",
            "writing", "craft", "knitting", "hiking",
        ],
        prompt: "What do you like to do in your free time?",
    },
];

/// Static topic table plus the matcher configured for it.
#[derive(Debug, Clone)]
pub struct TopicVocabulary {
    topics: Vec<Topic>,
    matching: TopicMatching,
    boundary_patterns: Vec<Regex>,
}

impl TopicVocabulary {
    pub fn new(topics: Vec<Topic>, matching: TopicMatching) -> Self {
        let boundary_patterns = match matching {
            TopicMatching::Substring => Vec::new(),
            TopicMatching::WordBoundary => topics.iter().map(Self::boundary_pattern).collect(),
        };
        Self {
            topics,
            matching,
            boundary_patterns,
        }
    }

    pub fn with_matching(matching: TopicMatching) -> Self {
        Self::new(DEFAULT_TOPICS.to_vec(), matching)
    }

    fn boundary_pattern(topic: &Topic) -> Regex {
        let alternatives: Vec<String> = topic.triggers.iter().map(|t| regex::escape(t)).collect();
        // Escaped literals joined by `|` always form a valid pattern.
        Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))).unwrap()
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn get(&self, label: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.label == label)
    }

    /// Returns every topic with at least one trigger in `text`, in vocabulary
    /// order. Matching ignores case.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.topics
            .iter()
            .enumerate()
            .filter(|(i, topic)| match self.matching {
                TopicMatching::Substring => topic.triggers.iter().any(|t| lower.contains(t)),
                TopicMatching::WordBoundary => self.boundary_patterns[*i].is_match(&lower),
            })
            .map(|(_, topic)| topic.label.to_string())
            .collect()
    }
}

impl Default for TopicVocabulary {
    fn default() -> Self {
        Self::with_matching(TopicMatching::default())
    }
}
