use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::OmniexError;

/// Uniform response wrapper returned by every adapter operation.
///
/// `error` is the empty string on success. On failure it carries the
/// flattened failure message and `data` holds the payload type's default
/// value, so callers always see the same envelope shape. `timestamp` is
/// the construction time of the envelope, not an event time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub timestamp: DateTime<Utc>,
    pub error: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            timestamp: Utc::now(),
            error: String::new(),
            data,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

impl<T: Default> Envelope<T> {
    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            timestamp: Utc::now(),
            error: error.to_string(),
            data: T::default(),
        }
    }

    pub fn not_implemented() -> Self {
        Self::failure(OmniexError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_empty_error() {
        let envelope = Envelope::success(vec![1, 2, 3]);
        assert!(envelope.is_ok());
        assert_eq!(envelope.error, "");
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[test]
    fn failure_carries_default_data() {
        let envelope: Envelope<Vec<i32>> = Envelope::failure("connection refused");
        assert!(!envelope.is_ok());
        assert_eq!(envelope.error, "connection refused");
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn not_implemented_message() {
        let envelope: Envelope<Vec<i32>> = Envelope::not_implemented();
        assert_eq!(envelope.error, "Method not implemented");
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn serializes_with_data_field_on_failure() {
        let envelope: Envelope<Vec<i32>> = Envelope::failure("boom");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["error"], "boom");
        assert!(value["data"].as_array().unwrap().is_empty());
        assert!(value.get("timestamp").is_some());
    }
}
