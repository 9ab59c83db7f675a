//! Keyword Tables - immutable reference data shared by every analysis component.
//!
//! Built once at startup and handed out behind an `Arc`. Nothing mutates the
//! tables after construction, so concurrent requests read them without locking.

use std::fmt;

/// Stress vocabulary with its weight, in definition order.
pub const STRESS_KEYWORDS: &[(&str, u32)] = &[
    ("stress", 12),
    ("stressed", 12),
    ("anxious", 15),
    ("anxiety", 15),
    ("worry", 10),
    ("worried", 10),
    ("panic", 10),
    ("fear", 10),
    ("sad", 8),
    ("tired", 8),
    ("overwhelmed", 12),
    ("depressed", 20),
    ("angry", 12),
    ("frustrated", 10),
    ("lonely", 12),
];

/// Keyword-driven coping tasks, in definition order.
pub const TASK_KEYWORDS: &[(&str, &str)] = &[
    ("stress", "Do 5 minutes of deep breathing"),
    ("stressed", "Do 5 minutes of deep breathing"),
    ("anxiety", "Practice slow breathing for 3 minutes"),
    ("anxious", "Practice slow breathing for 3 minutes"),
    ("worried", "Write down your worries and one solution"),
    ("tired", "Take a 10-minute rest and drink water"),
    ("fear", "Ground yourself and focus on your breath"),
    ("overwhelmed", "Break your work into 3 smaller tasks"),
    ("sad", "Write 2 things that made you smile"),
    ("lonely", "Call a friend for 5 minutes"),
    ("angry", "Take a brisk walk for 5 minutes"),
    ("frustrated", "Take a brisk walk for 5 minutes"),
    ("depressed", "Write one positive affirmation"),
    ("happy", "Celebrate a small win today"),
    ("motivated", "Plan one productive task today"),
];

const POSITIVE_TASKS: &[&str] = &[
    "Write 3 things you are grateful for",
    "Do a 2-minute smiling exercise",
    "Message someone you care about",
];

const NEGATIVE_TASKS: &[&str] = &[
    "Do a 2-minute relaxation exercise",
    "Drink a glass of water slowly",
    "Write one kind sentence to yourself",
];

const NEUTRAL_TASKS: &[&str] = &[
    "Write one goal for today",
    "Take 10 deep breaths",
    "Stretch your body for 1 minute",
];

/// Coarse polarity grouping used only to pick fallback tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionBucket {
    Positive,
    Negative,
    Neutral,
}

impl EmotionBucket {
    pub fn label(&self) -> &'static str {
        match self {
            EmotionBucket::Positive => "positive",
            EmotionBucket::Negative => "negative",
            EmotionBucket::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmotionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fallback tasks for each emotion bucket.
#[derive(Debug, Clone)]
pub struct EmotionTaskBank {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

impl Default for EmotionTaskBank {
    fn default() -> Self {
        Self {
            positive: to_owned_list(POSITIVE_TASKS),
            negative: to_owned_list(NEGATIVE_TASKS),
            neutral: to_owned_list(NEUTRAL_TASKS),
        }
    }
}

impl EmotionTaskBank {
    pub fn tasks_for(&self, bucket: EmotionBucket) -> &[String] {
        match bucket {
            EmotionBucket::Positive => &self.positive,
            EmotionBucket::Negative => &self.negative,
            EmotionBucket::Neutral => &self.neutral,
        }
    }
}

/// The stress weight table, the task keyword table and the fallback bank.
///
/// Entries keep their definition order: keyword extraction and task selection
/// both depend on it.
#[derive(Debug, Clone)]
pub struct KeywordTables {
    stress_weights: Vec<(String, u32)>,
    task_keywords: Vec<(String, String)>,
    emotion_tasks: EmotionTaskBank,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordTables {
    /// Create the standard tables
    pub fn new() -> Self {
        Self::with_entries(
            STRESS_KEYWORDS.iter().map(|(k, w)| (k.to_string(), *w)),
            TASK_KEYWORDS.iter().map(|(k, t)| (k.to_string(), t.to_string())),
            EmotionTaskBank::default(),
        )
    }

    /// Create tables from custom entries. Keys are lowercased so that they can
    /// be matched against lowercased journal text.
    pub fn with_entries(
        stress_weights: impl IntoIterator<Item = (String, u32)>,
        task_keywords: impl IntoIterator<Item = (String, String)>,
        emotion_tasks: EmotionTaskBank,
    ) -> Self {
        Self {
            stress_weights: stress_weights
                .into_iter()
                .map(|(k, w)| (k.to_lowercase(), w))
                .collect(),
            task_keywords: task_keywords
                .into_iter()
                .map(|(k, t)| (k.to_lowercase(), t))
                .collect(),
            emotion_tasks,
        }
    }

    pub fn stress_weights(&self) -> &[(String, u32)] {
        &self.stress_weights
    }

    pub fn task_keywords(&self) -> &[(String, String)] {
        &self.task_keywords
    }

    pub fn emotion_tasks(&self) -> &EmotionTaskBank {
        &self.emotion_tasks
    }

    /// Stress keywords present as substrings of `text_lower`, with their weights,
    /// in table order. Each keyword is reported at most once.
    pub fn stress_matches<'a>(
        &'a self,
        text_lower: &'a str,
    ) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        self.stress_weights
            .iter()
            .filter(move |(keyword, _)| text_lower.contains(keyword.as_str()))
            .map(|(keyword, weight)| (keyword.as_str(), *weight))
    }

    /// Tasks whose trigger keyword is present in `text_lower`, in table order.
    pub fn task_matches<'a>(&'a self, text_lower: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.task_keywords
            .iter()
            .filter(move |(keyword, _)| text_lower.contains(keyword.as_str()))
            .map(|(_, task)| task.as_str())
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_sizes() {
        let tables = KeywordTables::new();

        assert_eq!(tables.stress_weights().len(), 15);
        assert_eq!(tables.task_keywords().len(), 15);
        for bucket in [
            EmotionBucket::Positive,
            EmotionBucket::Negative,
            EmotionBucket::Neutral,
        ] {
            assert_eq!(tables.emotion_tasks().tasks_for(bucket).len(), 3);
        }
    }

    #[test]
    fn test_stress_matches_keep_table_order() {
        let tables = KeywordTables::new();

        let matches: Vec<(&str, u32)> = tables
            .stress_matches("lonely and stressed, so stressed")
            .collect();

        assert_eq!(
            matches,
            vec![("stress", 12), ("stressed", 12), ("lonely", 12)]
        );
    }

    #[test]
    fn test_custom_keys_are_lowercased() {
        let tables = KeywordTables::with_entries(
            vec![("Burnout".to_string(), 9)],
            vec![("Burnout".to_string(), "Rest".to_string())],
            EmotionTaskBank::default(),
        );

        assert_eq!(tables.stress_weights()[0].0, "burnout");
        assert_eq!(tables.task_matches("total burnout").collect::<Vec<_>>(), vec!["Rest"]);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(EmotionBucket::Positive.to_string(), "positive");
        assert_eq!(EmotionBucket::Negative.label(), "negative");
        assert_eq!(EmotionBucket::Neutral.label(), "neutral");
    }
}
