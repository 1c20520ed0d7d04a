//! Record serialization
//!
//! Converts a [`UserRecord`] to and from compact JSON. Compact form keeps
//! the serialized text inside printable ASCII for ASCII-only field values,
//! which is what the stream cipher requires to round-trip correctly.
//!
//! A corrupt or truncated blob, or one missing the top-level keys, yields a
//! `Deserialize` error; callers treat that as "no usable record" rather
//! than crashing.

use crate::error::{VaultError, VaultResult};
use crate::models::UserRecord;

/// Serialize a record to its stored textual form
pub fn serialize_record(record: &UserRecord) -> VaultResult<String> {
    serde_json::to_string(record)
        .map_err(|e| VaultError::Storage(format!("Failed to serialize record: {}", e)))
}

/// Parse stored text back into a record
pub fn deserialize_record(text: &str) -> VaultResult<UserRecord> {
    serde_json::from_str(text)
        .map_err(|e| VaultError::Deserialize(format!("Failed to parse record: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Objective, Task};

    fn sample_record() -> UserRecord {
        let mut record = UserRecord::new("alice");
        let mut gym = Objective::new("Gym");
        gym.tasks.push(Task::new("Leg day", "2024-05-01"));
        record.objectives.push(gym);
        record.objectives.push(Objective::new("Reading"));
        record
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record();
        let text = serialize_record(&record).unwrap();
        let parsed = deserialize_record(&text).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_compact_form_is_single_line() {
        let text = serialize_record(&sample_record()).unwrap();
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_ascii_record_serializes_to_printable_ascii() {
        // The cipher only round-trips printable ASCII, so the stored form
        // of an ASCII-only record must stay inside that range
        let text = serialize_record(&sample_record()).unwrap();
        assert!(text.chars().all(|c| (' '..='~').contains(&c)));
    }

    #[test]
    fn test_truncated_blob_fails() {
        let text = serialize_record(&sample_record()).unwrap();
        let truncated = &text[..text.len() / 2];

        let err = deserialize_record(truncated).unwrap_err();
        assert!(err.is_deserialize());
    }

    #[test]
    fn test_missing_top_level_key_fails() {
        let err = deserialize_record(r#"{"objectives":[]}"#).unwrap_err();
        assert!(err.is_deserialize());
    }

    #[test]
    fn test_garbage_fails() {
        assert!(deserialize_record("!garbled nonsense!").is_err());
        assert!(deserialize_record("").is_err());
    }

    #[test]
    fn test_preserves_objective_order() {
        let text = serialize_record(&sample_record()).unwrap();
        let parsed = deserialize_record(&text).unwrap();

        assert_eq!(parsed.objectives[0].title, "Gym");
        assert_eq!(parsed.objectives[1].title, "Reading");
    }
}
