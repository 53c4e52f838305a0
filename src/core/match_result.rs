use serde::{Deserialize, Serialize};

/// Outcome of resolving one (name, key) query.
///
/// `NoMatch` covers a missing block, an empty block and a best score under
/// the threshold. It is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    /// Accepted roster name with its matcher score (0.0 - 100.0)
    Matched { name: String, score: f64 },
    NoMatch,
}

impl MatchResult {
    pub fn matched(name: impl Into<String>, score: f64) -> Self {
        MatchResult::Matched {
            name: name.into(),
            score,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    /// Matched roster name, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            MatchResult::Matched { name, .. } => Some(name),
            MatchResult::NoMatch => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            MatchResult::Matched { score, .. } => Some(*score),
            MatchResult::NoMatch => None,
        }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self {
            MatchResult::Matched { name, score } => format!("{} - {:.1}%", name, score),
            MatchResult::NoMatch => "no match".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let hit = MatchResult::matched("John Doe", 96.5);
        assert!(hit.is_match());
        assert_eq!(hit.name(), Some("John Doe"));
        assert_eq!(hit.score(), Some(96.5));
        assert_eq!(hit.display(), "John Doe - 96.5%");

        let miss = MatchResult::NoMatch;
        assert!(!miss.is_match());
        assert_eq!(miss.name(), None);
        assert_eq!(miss.score(), None);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MatchResult::matched("Jane Smith", 81.0)).unwrap();
        assert_eq!(json, r#"{"status":"matched","name":"Jane Smith","score":81.0}"#);

        let json = serde_json::to_string(&MatchResult::NoMatch).unwrap();
        assert_eq!(json, r#"{"status":"no_match"}"#);
    }
}
