//! Crisis phrase detection.
//!
//! Runs before the sentiment classifier. A hit short-circuits the whole
//! analysis with a fixed, model-independent result.

/// Phrases that always trigger the crisis override.
pub const CRISIS_PHRASES: &[&str] = &["suicide", "kill myself", "self harm", "die", "end my life"];

/// Substring scanner over a fixed crisis phrase set
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    phrases: Vec<String>,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CrisisDetector {
    pub fn new() -> Self {
        Self {
            phrases: CRISIS_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// True if any crisis phrase occurs anywhere in the text, ignoring case.
    pub fn is_crisis(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();
        self.phrases
            .iter()
            .any(|phrase| text_lower.contains(phrase.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_phrase() {
        let detector = CrisisDetector::new();

        for phrase in CRISIS_PHRASES {
            let text = format!("lately I keep thinking about {} again", phrase);
            assert!(detector.is_crisis(&text), "Expected crisis for '{}'", phrase);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let detector = CrisisDetector::new();

        assert!(detector.is_crisis("I want to KILL MYSELF"));
        assert!(detector.is_crisis("End My Life"));
    }

    #[test]
    fn test_substring_semantics() {
        let detector = CrisisDetector::new();

        // "die" is matched as a plain substring
        assert!(detector.is_crisis("I started a new diet"));
        assert!(!detector.is_crisis("Had a calm walk by the river"));
    }

    #[test]
    fn test_empty_text() {
        let detector = CrisisDetector::new();

        assert!(!detector.is_crisis(""));
        assert!(!detector.is_crisis("   "));
    }
}
