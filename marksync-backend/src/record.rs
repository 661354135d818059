//! Sync record — the per-note metadata bundle handed over by the remote
//! note service.

use serde::{Deserialize, Serialize};

/// Identifies a note's sync context. The store only reads `category`;
/// everything else the remote side sends is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRecord {
    /// Hierarchical note folder, e.g. "/work/projects/".
    pub category: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SyncRecord {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_with_extra_fields() {
        let record: SyncRecord = serde_json::from_str(
            r#"{"category": "/a/b/", "noteId": "n-123", "modifyTime": 1700000000}"#,
        )
        .expect("Failed to parse record");

        assert_eq!(record.category, "/a/b/");
        assert_eq!(record.extra["noteId"], "n-123");
    }
}
