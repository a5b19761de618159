use serde::{Deserialize, Serialize};

/// Line — a shipping line, the scoping parent for container companies and
/// sea voyages. Line names are unique across all branches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: String,

    /// Line name — unique natural key.
    pub line_name: String,

    /// Owning branch.
    pub branch_id: String,

    /// Principal that created this document.
    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_json_roundtrip() {
        let line = Line {
            id: "l1".into(),
            line_name: "Atlantic Line".into(),
            branch_id: "b1".into(),
            created_by: "u1".into(),
            create_at: Some("2026-01-01T00:00:00+00:00".into()),
            update_at: None,
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"lineName\""));
        assert!(json.contains("\"branchId\""));
        let back: Line = serde_json::from_str(&json).unwrap();
        assert_eq!(line, back);
    }
}
