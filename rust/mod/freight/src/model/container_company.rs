use serde::{Deserialize, Serialize};

/// ContainerCompany — a container operator working under a shipping line.
/// Company names are unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerCompany {
    pub id: String,

    /// Company name — unique natural key.
    pub company_name: String,

    /// Owning shipping line.
    pub line_id: String,

    /// Owning branch.
    pub branch_id: String,

    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}
