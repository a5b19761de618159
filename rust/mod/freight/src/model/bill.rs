use serde::{Deserialize, Serialize};

/// One goods line item on a bill of lading. Order is significant and is
/// preserved as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoodsItem {
    #[serde(default)]
    pub marks_and_numbers: String,

    #[serde(default)]
    pub gross_weight: String,

    #[serde(default)]
    pub measurement: String,

    #[serde(default)]
    pub quantity_description: String,
}

/// BillOfLading — the shipping document recording goods, parties, and
/// ports for a shipment. The only resource with an update operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillOfLading {
    pub id: String,

    pub bill_number: String,

    pub shipper: String,

    pub consignee: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_party: Option<String>,

    #[serde(default)]
    pub port_of_loading: String,

    #[serde(default)]
    pub port_of_discharge: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_receipt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_delivery: Option<String>,

    #[serde(default)]
    pub vessel: String,

    #[serde(default)]
    pub voyage_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freight_details: Option<String>,

    /// Ordered goods line items.
    #[serde(default)]
    pub goods: Vec<GoodsItem>,

    /// Draft bills are still being edited and are not yet issued.
    #[serde(default)]
    pub is_draft: bool,

    #[serde(default)]
    pub is_negotiable: bool,

    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_at: Option<String>,
}
