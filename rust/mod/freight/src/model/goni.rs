use serde::{Deserialize, Serialize};

/// Goni — a burlap-sack inventory unit scoped to a container company.
/// Goni names are unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goni {
    pub id: String,

    /// Goni name — unique natural key.
    pub goni_name: String,

    /// Owning container company.
    pub company_id: String,

    /// Owning branch.
    pub branch_id: String,

    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}
