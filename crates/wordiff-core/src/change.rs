//! Change representation for diff operations

use serde::{Deserialize, Serialize};

/// The kind of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Token is present in both texts
    Unchanged,
    /// Token only exists in the new text
    Added,
    /// Token only exists in the old text
    Deleted,
    /// Token was substituted by another one at the same position
    Modified,
}

impl ChangeKind {
    /// Class name used by renderers (`added`, `deleted`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Unchanged => "unchanged",
            ChangeKind::Added => "added",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Modified => "modified",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified unit of a word-level diff
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffOp {
    Unchanged {
        value: String,
    },
    Added {
        value: String,
    },
    Deleted {
        value: String,
    },
    Modified {
        #[serde(rename = "oldValue")]
        old_value: String,
        #[serde(rename = "newValue")]
        new_value: String,
    },
}

impl DiffOp {
    pub fn unchanged(value: impl Into<String>) -> Self {
        DiffOp::Unchanged {
            value: value.into(),
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        DiffOp::Added {
            value: value.into(),
        }
    }

    pub fn deleted(value: impl Into<String>) -> Self {
        DiffOp::Deleted {
            value: value.into(),
        }
    }

    pub fn modified(old: impl Into<String>, new: impl Into<String>) -> Self {
        DiffOp::Modified {
            old_value: old.into(),
            new_value: new.into(),
        }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            DiffOp::Unchanged { .. } => ChangeKind::Unchanged,
            DiffOp::Added { .. } => ChangeKind::Added,
            DiffOp::Deleted { .. } => ChangeKind::Deleted,
            DiffOp::Modified { .. } => ChangeKind::Modified,
        }
    }

    /// Text this op contributes to the old side, if any
    pub fn old_value(&self) -> Option<&str> {
        match self {
            DiffOp::Unchanged { value } | DiffOp::Deleted { value } => Some(value),
            DiffOp::Modified { old_value, .. } => Some(old_value),
            DiffOp::Added { .. } => None,
        }
    }

    /// Text this op contributes to the new side, if any
    pub fn new_value(&self) -> Option<&str> {
        match self {
            DiffOp::Unchanged { value } | DiffOp::Added { value } => Some(value),
            DiffOp::Modified { new_value, .. } => Some(new_value),
            DiffOp::Deleted { .. } => None,
        }
    }

    /// Check if this is an actual change (not just context)
    pub fn is_change(&self) -> bool {
        self.kind() != ChangeKind::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides() {
        let op = DiffOp::modified("world", "earth");
        assert_eq!(op.old_value(), Some("world"));
        assert_eq!(op.new_value(), Some("earth"));
        assert_eq!(DiffOp::added("x").old_value(), None);
        assert_eq!(DiffOp::deleted("x").new_value(), None);
        assert!(!DiffOp::unchanged("x").is_change());
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(DiffOp::modified("a", "b")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "modified", "oldValue": "a", "newValue": "b"})
        );

        let json = serde_json::to_value(DiffOp::added(" ")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "added", "value": " "}));
    }

    #[test]
    fn test_deserialize() {
        let op: DiffOp = serde_json::from_str(r#"{"type":"deleted","value":"b"}"#).unwrap();
        assert_eq!(op, DiffOp::deleted("b"));
        assert_eq!(op.kind().to_string(), "deleted");
    }
}
