use shiperp_core::{Page, PageParams, Principal, ServiceError, new_id, now_rfc3339};
use shiperp_sql::Value;

use super::{FreightService, ListSpec, not_found_as, require};
use crate::model::{BillOfLading, GoodsItem};

pub struct CreateBillInput {
    pub bill_number: String,
    pub shipper: String,
    pub consignee: String,
    pub notify_party: Option<String>,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub place_of_receipt: Option<String>,
    pub place_of_delivery: Option<String>,
    pub vessel: String,
    pub voyage_number: String,
    pub freight_details: Option<String>,
    pub goods: Vec<GoodsItem>,
    pub is_draft: bool,
    pub is_negotiable: bool,
}

impl FreightService {
    pub fn create_bill(
        &self,
        who: &Principal,
        input: CreateBillInput,
    ) -> Result<BillOfLading, ServiceError> {
        require("billNumber", &input.bill_number)?;
        require("shipper", &input.shipper)?;
        require("consignee", &input.consignee)?;

        let now = now_rfc3339();
        let bill = BillOfLading {
            id: new_id(),
            bill_number: input.bill_number,
            shipper: input.shipper,
            consignee: input.consignee,
            notify_party: input.notify_party,
            port_of_loading: input.port_of_loading,
            port_of_discharge: input.port_of_discharge,
            place_of_receipt: input.place_of_receipt,
            place_of_delivery: input.place_of_delivery,
            vessel: input.vessel,
            voyage_number: input.voyage_number,
            freight_details: input.freight_details,
            goods: input.goods,
            is_draft: input.is_draft,
            is_negotiable: input.is_negotiable,
            created_by: who.id.clone(),
            create_at: Some(now.clone()),
            update_at: Some(now.clone()),
        };

        self.insert_record("bills", &bill.id, &bill, &bill_indexes(&bill))?;

        tracing::info!(id = %bill.id, number = %bill.bill_number, "bill of lading created");
        Ok(bill)
    }

    pub fn get_bill(&self, id: &str) -> Result<BillOfLading, ServiceError> {
        self.get_record("bills", id)
            .map_err(|e| not_found_as(e, "Bill of lading not found!"))
    }

    pub fn list_bills(&self, params: &PageParams) -> Result<Page<BillOfLading>, ServiceError> {
        // Bills are the one unscoped listing: no branch in the surface.
        self.list_page(
            &ListSpec {
                table: "bills",
                scope: &[],
                status_col: None,
                search_cols: &["bill_number", "shipper"],
            },
            params,
        )
    }

    /// Merge the caller-supplied fields over the stored document and
    /// persist the result. Partial payloads are fine; `id`, `createAt`,
    /// and `createdBy` cannot be changed.
    pub fn update_bill(
        &self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<BillOfLading, ServiceError> {
        let current = self.get_bill(id)?;
        let updated: BillOfLading = Self::apply_patch(&current, patch)?;

        self.update_record("bills", id, &updated, &bill_indexes(&updated))
            .map_err(|e| not_found_as(e, "Bill of lading not found!"))?;

        tracing::info!(id, "bill of lading updated");
        Ok(updated)
    }

    pub fn delete_bill(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("bills", id)
            .map_err(|e| not_found_as(e, "Bill of lading not found!"))?;
        tracing::info!(id, "bill of lading deleted");
        Ok(())
    }
}

fn bill_indexes(bill: &BillOfLading) -> Vec<(&'static str, Value)> {
    vec![
        ("bill_number", Value::Text(bill.bill_number.clone())),
        ("shipper", Value::Text(bill.shipper.clone())),
        ("consignee", Value::Text(bill.consignee.clone())),
        ("voyage_number", Value::Text(bill.voyage_number.clone())),
        ("is_draft", Value::Integer(if bill.is_draft { 1 } else { 0 })),
        ("create_at", Value::Text(bill.create_at.clone().unwrap_or_default())),
        ("update_at", Value::Text(bill.update_at.clone().unwrap_or_default())),
    ]
}
