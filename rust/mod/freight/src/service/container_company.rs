use shiperp_core::{Page, PageParams, Principal, ServiceError, new_id, now_rfc3339};
use shiperp_sql::Value;

use super::{FreightService, ListSpec, conflict_as, not_found_as, require};
use crate::model::ContainerCompany;

pub struct CreateContainerCompanyInput {
    pub company_name: String,
    pub line_id: String,
    pub branch_id: String,
}

impl FreightService {
    pub fn create_container_company(
        &self,
        who: &Principal,
        input: CreateContainerCompanyInput,
    ) -> Result<ContainerCompany, ServiceError> {
        require("companyName", &input.company_name)?;
        require("lineId", &input.line_id)?;
        require("branchId", &input.branch_id)?;

        // Parent must resolve; no cascade exists to repair a dangling ref.
        let _line = self.get_line(&input.line_id)?;

        let now = now_rfc3339();
        let company = ContainerCompany {
            id: new_id(),
            company_name: input.company_name,
            line_id: input.line_id,
            branch_id: input.branch_id,
            created_by: who.id.clone(),
            create_at: Some(now.clone()),
            update_at: Some(now.clone()),
        };

        self.insert_record("container_companies", &company.id, &company, &[
            ("company_name", Value::Text(company.company_name.clone())),
            ("line_id", Value::Text(company.line_id.clone())),
            ("branch_id", Value::Text(company.branch_id.clone())),
            ("create_at", Value::Text(now.clone())),
            ("update_at", Value::Text(now)),
        ])
        .map_err(|e| conflict_as(e, "Container company already exist!"))?;

        tracing::info!(id = %company.id, line = %company.line_id, "container company created");
        Ok(company)
    }

    pub fn get_container_company(&self, id: &str) -> Result<ContainerCompany, ServiceError> {
        self.get_record("container_companies", id)
            .map_err(|e| not_found_as(e, "Container company not found!"))
    }

    pub fn list_container_companies(
        &self,
        branch_id: &str,
        line_id: &str,
        params: &PageParams,
    ) -> Result<Page<ContainerCompany>, ServiceError> {
        require("branchId", branch_id)?;
        require("lineId", line_id)?;
        self.list_page(
            &ListSpec {
                table: "container_companies",
                scope: &[("branch_id", branch_id), ("line_id", line_id)],
                status_col: None,
                search_cols: &["company_name"],
            },
            params,
        )
    }

    pub fn delete_container_company(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("container_companies", id)
            .map_err(|e| not_found_as(e, "Container company not found!"))?;
        tracing::info!(id, "container company deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiperp_sql::SqliteStore;

    use crate::service::line::CreateLineInput;

    fn service() -> FreightService {
        FreightService::new(Box::new(SqliteStore::open_in_memory().unwrap())).unwrap()
    }

    fn who() -> Principal {
        Principal { id: "u1".into(), name: None }
    }

    fn seed_line(svc: &FreightService) -> String {
        svc.create_line(&who(), CreateLineInput {
            line_name: "Pacific".into(),
            branch_id: "b1".into(),
        })
        .unwrap()
        .id
    }

    #[test]
    fn create_requires_existing_line() {
        let svc = service();
        let err = svc
            .create_container_company(&who(), CreateContainerCompanyInput {
                company_name: "Medships".into(),
                line_id: "missing".into(),
                branch_id: "b1".into(),
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Line not found!");
    }

    #[test]
    fn create_and_list_scoped_by_branch_and_line() {
        let svc = service();
        let line_id = seed_line(&svc);
        let other_line = svc
            .create_line(&who(), CreateLineInput {
                line_name: "Atlantic".into(),
                branch_id: "b1".into(),
            })
            .unwrap()
            .id;

        svc.create_container_company(&who(), CreateContainerCompanyInput {
            company_name: "Medships".into(),
            line_id: line_id.clone(),
            branch_id: "b1".into(),
        })
        .unwrap();
        svc.create_container_company(&who(), CreateContainerCompanyInput {
            company_name: "Gulfbox".into(),
            line_id: other_line,
            branch_id: "b1".into(),
        })
        .unwrap();

        let page = svc
            .list_container_companies("b1", &line_id, &PageParams::default())
            .unwrap();
        assert_eq!(page.pagination.total_items, 1);
        assert_eq!(page.items[0].company_name, "Medships");
    }

    #[test]
    fn duplicate_company_name_is_a_conflict() {
        let svc = service();
        let line_id = seed_line(&svc);
        let input = || CreateContainerCompanyInput {
            company_name: "Medships".into(),
            line_id: line_id.clone(),
            branch_id: "b1".into(),
        };
        svc.create_container_company(&who(), input()).unwrap();
        let err = svc.create_container_company(&who(), input()).unwrap_err();
        assert_eq!(err.to_string(), "Container company already exist!");
    }

    #[test]
    fn deleting_parent_line_leaves_company_behind() {
        // No cascade: the company survives with a dangling line ref.
        let svc = service();
        let line_id = seed_line(&svc);
        let company = svc
            .create_container_company(&who(), CreateContainerCompanyInput {
                company_name: "Medships".into(),
                line_id: line_id.clone(),
                branch_id: "b1".into(),
            })
            .unwrap();

        svc.delete_line(&line_id).unwrap();
        let still_there = svc.get_container_company(&company.id).unwrap();
        assert_eq!(still_there.line_id, line_id);
    }

    #[test]
    fn delete_missing_is_not_found() {
        let svc = service();
        let err = svc.delete_container_company("nope").unwrap_err();
        assert_eq!(err.to_string(), "Container company not found!");
    }
}
