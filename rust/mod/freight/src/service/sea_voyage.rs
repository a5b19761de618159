use shiperp_core::{Page, PageParams, Principal, ServiceError, new_id, now_rfc3339};
use shiperp_sql::Value;

use super::{FreightService, ListSpec, conflict_as, not_found_as, require};
use crate::model::{DEFAULT_LOCATION, MAX_DELAY_MESSAGE, SeaVoyage, TrackingStatus, VoyageStatus};

pub struct CreateSeaVoyageInput {
    pub sea_voyage_name: String,
    pub sea_voyage_number: String,
    pub branch_id: String,
    pub line_id: String,
    pub year: i32,
    pub status: Option<VoyageStatus>,
    pub tracking_status: Option<TrackingStatus>,
    pub dispatch_date: Option<String>,
    pub expected_arrival_date: Option<String>,
    pub received_date: Option<String>,
    pub delay_date: Option<String>,
    pub delay_message: Option<String>,
    pub location: Option<String>,
}

impl FreightService {
    pub fn create_sea_voyage(
        &self,
        who: &Principal,
        input: CreateSeaVoyageInput,
    ) -> Result<SeaVoyage, ServiceError> {
        require("seaVoyageName", &input.sea_voyage_name)?;
        require("seaVoyageNumber", &input.sea_voyage_number)?;
        require("branchId", &input.branch_id)?;
        require("lineId", &input.line_id)?;

        if let Some(ref msg) = input.delay_message {
            if msg.chars().count() > MAX_DELAY_MESSAGE {
                return Err(ServiceError::Validation(format!(
                    "delayMessage must be at most {} characters",
                    MAX_DELAY_MESSAGE
                )));
            }
        }

        let _line = self.get_line(&input.line_id)?;

        let now = now_rfc3339();
        let voyage = SeaVoyage {
            id: new_id(),
            sea_voyage_name: input.sea_voyage_name,
            sea_voyage_number: input.sea_voyage_number,
            branch_id: input.branch_id,
            line_id: input.line_id,
            year: input.year,
            status: input.status.unwrap_or_default(),
            tracking_status: input.tracking_status.unwrap_or_default(),
            dispatch_date: input.dispatch_date,
            expected_arrival_date: input.expected_arrival_date,
            received_date: input.received_date,
            delay_date: input.delay_date,
            delay_message: input.delay_message,
            location: input
                .location
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            created_by: who.id.clone(),
            create_at: Some(now.clone()),
            update_at: Some(now.clone()),
        };

        self.insert_record("sea_voyages", &voyage.id, &voyage, &[
            ("sea_voyage_name", Value::Text(voyage.sea_voyage_name.clone())),
            ("sea_voyage_number", Value::Text(voyage.sea_voyage_number.clone())),
            ("branch_id", Value::Text(voyage.branch_id.clone())),
            ("line_id", Value::Text(voyage.line_id.clone())),
            ("year", Value::Integer(voyage.year as i64)),
            ("status", Value::Text(voyage.status.as_str().into())),
            ("tracking_status", Value::Text(voyage.tracking_status.as_str().into())),
            ("create_at", Value::Text(now.clone())),
            ("update_at", Value::Text(now)),
        ])
        .map_err(|e| conflict_as(e, "Sea voyage already exist!"))?;

        tracing::info!(
            id = %voyage.id,
            number = %voyage.sea_voyage_number,
            "sea voyage created"
        );
        Ok(voyage)
    }

    pub fn get_sea_voyage(&self, id: &str) -> Result<SeaVoyage, ServiceError> {
        self.get_record("sea_voyages", id)
            .map_err(|e| not_found_as(e, "Sea voyage not found!"))
    }

    pub fn list_sea_voyages(
        &self,
        branch_id: &str,
        params: &PageParams,
    ) -> Result<Page<SeaVoyage>, ServiceError> {
        require("branchId", branch_id)?;
        self.list_page(
            &ListSpec {
                table: "sea_voyages",
                scope: &[("branch_id", branch_id)],
                status_col: Some("status"),
                // Voyages are searchable by name OR number.
                search_cols: &["sea_voyage_name", "sea_voyage_number"],
            },
            params,
        )
    }

    pub fn delete_sea_voyage(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("sea_voyages", id)
            .map_err(|e| not_found_as(e, "Sea voyage not found!"))?;
        tracing::info!(id, "sea voyage deleted");
        Ok(())
    }
}
