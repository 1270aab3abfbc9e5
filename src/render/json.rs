//! JSON rendering for parsed messages.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::ClassifiedMessage;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert messages to a JSON array.
pub fn to_json(messages: &[ClassifiedMessage], format: JsonFormat) -> Result<String> {
    serialize(messages, format)
}

/// Serialize any result type (messages, statistics, a full parse result).
pub fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;

    fn sample() -> Vec<ClassifiedMessage> {
        vec![
            ClassifiedMessage::system("10:32 AM", Rect::new(150.0, 50.0, 100.0, 20.0), 0),
            ClassifiedMessage::text("Hello", false, Rect::new(20.0, 100.0, 100.0, 30.0), 1),
        ]
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"kind\": \"system\""));
        assert!(json.contains("10:32 AM"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_json_round_trips_messages() {
        let messages = sample();
        let json = to_json(&messages, JsonFormat::Compact).unwrap();
        let back: Vec<ClassifiedMessage> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, messages);
    }
}
