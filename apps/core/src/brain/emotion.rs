//! Emotion Classification.
//!
//! Self-reported emotion words win over the classifier's polarity score:
//! phrase rules are checked first, in order, and only then the score thresholds.

use serde::Serialize;
use std::fmt;

use super::thresholds::AnalysisThresholds;

/// Emotion label reported by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Crisis override, never produced by the classifier rules
    Critical,
    Anxious,
    Angry,
    Sad,
    Happy,
    Neutral,
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Emotion {
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Critical => "critical",
            Emotion::Anxious => "anxious",
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
            Emotion::Happy => "happy",
            Emotion::Neutral => "neutral",
        }
    }
}

/// Phrase rule: any of `phrases` as a substring selects `emotion`
struct PhraseRule {
    emotion: Emotion,
    phrases: &'static [&'static str],
}

/// Checked in order; "depress" also covers "depressed" and "depression".
const PHRASE_RULES: &[PhraseRule] = &[
    PhraseRule {
        emotion: Emotion::Anxious,
        phrases: &["anxiety", "anxious"],
    },
    PhraseRule {
        emotion: Emotion::Angry,
        phrases: &["angry", "frustrated"],
    },
    PhraseRule {
        emotion: Emotion::Sad,
        phrases: &["sad", "depress"],
    },
];

/// Rule-based emotion classifier
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    score_threshold: f64,
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self::new(&AnalysisThresholds::default())
    }
}

impl EmotionClassifier {
    pub fn new(thresholds: &AnalysisThresholds) -> Self {
        Self {
            score_threshold: thresholds.emotion_score_threshold,
        }
    }

    /// Classify the text; the first matching rule wins.
    pub fn classify(&self, text: &str, sentiment_score: f64) -> Emotion {
        let text_lower = text.to_lowercase();

        if let Some(rule) = PHRASE_RULES
            .iter()
            .find(|rule| rule.phrases.iter().any(|p| text_lower.contains(*p)))
        {
            return rule.emotion;
        }

        if sentiment_score > self.score_threshold {
            Emotion::Happy
        } else if sentiment_score < -self.score_threshold {
            Emotion::Sad
        } else {
            Emotion::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_rules() {
        let classifier = EmotionClassifier::default();

        assert_eq!(classifier.classify("My anxiety is back", 0.0), Emotion::Anxious);
        assert_eq!(classifier.classify("so FRUSTRATED with this", 0.0), Emotion::Angry);
        assert_eq!(classifier.classify("feeling depressed", 0.0), Emotion::Sad);
        assert_eq!(classifier.classify("my depression", 0.0), Emotion::Sad);
    }

    #[test]
    fn test_phrase_precedence_order() {
        let classifier = EmotionClassifier::default();

        // anxious before angry before sad
        assert_eq!(classifier.classify("angry and anxious", 0.0), Emotion::Anxious);
        assert_eq!(classifier.classify("sad and angry", 0.0), Emotion::Angry);
    }

    #[test]
    fn test_phrase_beats_score() {
        let classifier = EmotionClassifier::default();

        assert_eq!(classifier.classify("anxious but happy", 0.99), Emotion::Anxious);
    }

    #[test]
    fn test_score_thresholds_are_strict() {
        let classifier = EmotionClassifier::default();

        assert_eq!(classifier.classify("a day", 0.66), Emotion::Happy);
        assert_eq!(classifier.classify("a day", 0.65), Emotion::Neutral);
        assert_eq!(classifier.classify("a day", -0.65), Emotion::Neutral);
        assert_eq!(classifier.classify("a day", -0.66), Emotion::Sad);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Emotion::Critical.to_string(), "critical");
        assert_eq!(Emotion::Neutral.label(), "neutral");
    }
}
