use shiperp_core::{Page, PageParams, Principal, ServiceError, new_id, now_rfc3339};
use shiperp_sql::Value;

use super::{FreightService, ListSpec, not_found_as, require};
use crate::model::{ContainerStatus, SeaContainer};

pub struct CreateSeaContainerInput {
    pub container_number: String,
    pub sea_voyage_id: String,
    pub branch_id: String,
    pub status: Option<ContainerStatus>,
}

impl FreightService {
    pub fn create_sea_container(
        &self,
        who: &Principal,
        input: CreateSeaContainerInput,
    ) -> Result<SeaContainer, ServiceError> {
        require("containerNumber", &input.container_number)?;
        require("seaVoyageId", &input.sea_voyage_id)?;
        require("branchId", &input.branch_id)?;

        let _voyage = self.get_sea_voyage(&input.sea_voyage_id)?;

        let now = now_rfc3339();
        let container = SeaContainer {
            id: new_id(),
            container_number: input.container_number,
            sea_voyage_id: input.sea_voyage_id,
            branch_id: input.branch_id,
            status: input.status.unwrap_or_default(),
            created_by: who.id.clone(),
            create_at: Some(now.clone()),
            update_at: Some(now.clone()),
        };

        self.insert_record("sea_containers", &container.id, &container, &[
            ("container_number", Value::Text(container.container_number.clone())),
            ("sea_voyage_id", Value::Text(container.sea_voyage_id.clone())),
            ("branch_id", Value::Text(container.branch_id.clone())),
            ("status", Value::Text(container.status.as_str().into())),
            ("create_at", Value::Text(now.clone())),
            ("update_at", Value::Text(now)),
        ])?;

        tracing::info!(
            id = %container.id,
            voyage = %container.sea_voyage_id,
            "sea container created"
        );
        Ok(container)
    }

    pub fn list_sea_containers(
        &self,
        branch_id: &str,
        sea_voyage_id: &str,
        params: &PageParams,
    ) -> Result<Page<SeaContainer>, ServiceError> {
        require("branchId", branch_id)?;
        require("seaVoyageId", sea_voyage_id)?;
        self.list_page(
            &ListSpec {
                table: "sea_containers",
                scope: &[("branch_id", branch_id), ("sea_voyage_id", sea_voyage_id)],
                status_col: Some("status"),
                search_cols: &["container_number"],
            },
            params,
        )
    }

    pub fn delete_sea_container(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("sea_containers", id)
            .map_err(|e| not_found_as(e, "Sea container not found!"))?;
        tracing::info!(id, "sea container deleted");
        Ok(())
    }
}
