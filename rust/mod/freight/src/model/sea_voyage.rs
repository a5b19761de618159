use serde::{Deserialize, Serialize};

/// Completion status of a voyage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoyageStatus {
    Pending,
    Completed,
}

impl Default for VoyageStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl VoyageStatus {
    /// Wire/index representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// Tracking lifecycle of a voyage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    Created,
    Dispatched,
    Delayed,
    Received,
}

impl Default for TrackingStatus {
    fn default() -> Self {
        Self::Created
    }
}

impl TrackingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Dispatched => "dispatched",
            Self::Delayed => "delayed",
            Self::Received => "received",
        }
    }
}

/// Default voyage location when none is given.
pub const DEFAULT_LOCATION: &str = "Libya";

/// Upper bound on the delay message length.
pub const MAX_DELAY_MESSAGE: usize = 500;

/// SeaVoyage — a scheduled shipment run under a shipping line, with a
/// completion status and a tracking lifecycle. Voyage numbers are unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeaVoyage {
    pub id: String,

    pub sea_voyage_name: String,

    /// Voyage number — unique natural key.
    pub sea_voyage_number: String,

    /// Owning branch.
    pub branch_id: String,

    /// Owning shipping line.
    pub line_id: String,

    pub year: i32,

    #[serde(default)]
    pub status: VoyageStatus,

    #[serde(default)]
    pub tracking_status: TrackingStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_arrival_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_date: Option<String>,

    /// Free-text delay explanation, at most [`MAX_DELAY_MESSAGE`] chars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_message: Option<String>,

    pub location: String,

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
    fn status_wire_values_are_lowercase() {
        assert_eq!(serde_json::to_string(&VoyageStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&TrackingStatus::Dispatched).unwrap(), "\"dispatched\"");

        let s: VoyageStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(s, VoyageStatus::Completed);
        assert_eq!(s.as_str(), "completed");
    }

    #[test]
    fn missing_statuses_default() {
        let v: SeaVoyage = serde_json::from_value(serde_json::json!({
            "id": "v1",
            "seaVoyageName": "Spring Run",
            "seaVoyageNumber": "SV-001",
            "branchId": "b1",
            "lineId": "l1",
            "year": 2026,
            "location": "Libya",
            "createdBy": "u1",
        }))
        .unwrap();
        assert_eq!(v.status, VoyageStatus::Pending);
        assert_eq!(v.tracking_status, TrackingStatus::Created);
    }
}
