use serde::{Deserialize, Serialize};

/// Completion status of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    Pending,
    Completed,
}

impl Default for ContainerStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl ContainerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// SeaContainer — a physical container assigned to a sea voyage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeaContainer {
    pub id: String,

    pub container_number: String,

    /// Owning sea voyage.
    pub sea_voyage_id: String,

    /// Owning branch.
    pub branch_id: String,

    #[serde(default)]
    pub status: ContainerStatus,

    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}
