use shiperp_core::{Page, PageParams, Principal, ServiceError, new_id, now_rfc3339};
use shiperp_sql::Value;

use super::{FreightService, ListSpec, conflict_as, not_found_as, require};
use crate::model::Line;

pub struct CreateLineInput {
    pub line_name: String,
    pub branch_id: String,
}

impl FreightService {
    pub fn create_line(
        &self,
        who: &Principal,
        input: CreateLineInput,
    ) -> Result<Line, ServiceError> {
        require("lineName", &input.line_name)?;
        require("branchId", &input.branch_id)?;

        let now = now_rfc3339();
        let line = Line {
            id: new_id(),
            line_name: input.line_name,
            branch_id: input.branch_id,
            created_by: who.id.clone(),
            create_at: Some(now.clone()),
            update_at: Some(now.clone()),
        };

        self.insert_record("lines", &line.id, &line, &[
            ("line_name", Value::Text(line.line_name.clone())),
            ("branch_id", Value::Text(line.branch_id.clone())),
            ("create_at", Value::Text(now.clone())),
            ("update_at", Value::Text(now)),
        ])
        .map_err(|e| conflict_as(e, "Line already exist!"))?;

        tracing::info!(id = %line.id, branch = %line.branch_id, "line created");
        Ok(line)
    }

    pub fn get_line(&self, id: &str) -> Result<Line, ServiceError> {
        self.get_record("lines", id)
            .map_err(|e| not_found_as(e, "Line not found!"))
    }

    pub fn list_lines(
        &self,
        branch_id: &str,
        params: &PageParams,
    ) -> Result<Page<Line>, ServiceError> {
        require("branchId", branch_id)?;
        self.list_page(
            &ListSpec {
                table: "lines",
                scope: &[("branch_id", branch_id)],
                status_col: None,
                search_cols: &["line_name"],
            },
            params,
        )
    }

    pub fn delete_line(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("lines", id)
            .map_err(|e| not_found_as(e, "Line not found!"))?;
        tracing::info!(id, "line deleted");
        Ok(())
    }
}
