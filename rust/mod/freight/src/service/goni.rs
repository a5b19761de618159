use shiperp_core::{Page, PageParams, Principal, ServiceError, new_id, now_rfc3339};
use shiperp_sql::Value;

use super::{FreightService, ListSpec, conflict_as, not_found_as, require};
use crate::model::Goni;

pub struct CreateGoniInput {
    pub goni_name: String,
    pub company_id: String,
    pub branch_id: String,
}

impl FreightService {
    pub fn create_goni(
        &self,
        who: &Principal,
        input: CreateGoniInput,
    ) -> Result<Goni, ServiceError> {
        require("goniName", &input.goni_name)?;
        require("companyId", &input.company_id)?;
        require("branchId", &input.branch_id)?;

        let _company = self.get_container_company(&input.company_id)?;

        let now = now_rfc3339();
        let goni = Goni {
            id: new_id(),
            goni_name: input.goni_name,
            company_id: input.company_id,
            branch_id: input.branch_id,
            created_by: who.id.clone(),
            create_at: Some(now.clone()),
            update_at: Some(now.clone()),
        };

        self.insert_record("gonies", &goni.id, &goni, &[
            ("goni_name", Value::Text(goni.goni_name.clone())),
            ("company_id", Value::Text(goni.company_id.clone())),
            ("branch_id", Value::Text(goni.branch_id.clone())),
            ("create_at", Value::Text(now.clone())),
            ("update_at", Value::Text(now)),
        ])
        .map_err(|e| conflict_as(e, "Goni already exist!"))?;

        tracing::info!(id = %goni.id, company = %goni.company_id, "goni created");
        Ok(goni)
    }

    pub fn list_gonies(
        &self,
        branch_id: &str,
        company_id: &str,
        params: &PageParams,
    ) -> Result<Page<Goni>, ServiceError> {
        require("branchId", branch_id)?;
        require("companyId", company_id)?;
        self.list_page(
            &ListSpec {
                table: "gonies",
                scope: &[("branch_id", branch_id), ("company_id", company_id)],
                status_col: None,
                search_cols: &["goni_name"],
            },
            params,
        )
    }

    pub fn delete_goni(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("gonies", id)
            .map_err(|e| not_found_as(e, "Goni not found!"))?;
        tracing::info!(id, "goni deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiperp_sql::SqliteStore;

    use crate::service::container_company::CreateContainerCompanyInput;
    use crate::service::line::CreateLineInput;

    fn service() -> FreightService {
        FreightService::new(Box::new(SqliteStore::open_in_memory().unwrap())).unwrap()
    }

    fn who() -> Principal {
        Principal { id: "u1".into(), name: None }
    }

    fn seed_company(svc: &FreightService) -> String {
        let line_id = svc
            .create_line(&who(), CreateLineInput {
                line_name: "Pacific".into(),
                branch_id: "b1".into(),
            })
            .unwrap()
            .id;
        svc.create_container_company(&who(), CreateContainerCompanyInput {
            company_name: "Medships".into(),
            line_id,
            branch_id: "b1".into(),
        })
        .unwrap()
        .id
    }

    #[test]
    fn create_requires_existing_company() {
        let svc = service();
        let err = svc
            .create_goni(&who(), CreateGoniInput {
                goni_name: "Jute 50kg".into(),
                company_id: "missing".into(),
                branch_id: "b1".into(),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Container company not found!");
    }

    #[test]
    fn create_list_search_and_delete() {
        let svc = service();
        let company_id = seed_company(&svc);

        let goni = svc
            .create_goni(&who(), CreateGoniInput {
                goni_name: "Jute 50kg".into(),
                company_id: company_id.clone(),
                branch_id: "b1".into(),
            })
            .unwrap();
        svc.create_goni(&who(), CreateGoniInput {
            goni_name: "Hemp 25kg".into(),
            company_id: company_id.clone(),
            branch_id: "b1".into(),
        })
        .unwrap();

        let params = PageParams { page: 1, limit: 10, search: Some("JUTE".into()), status: None };
        let page = svc.list_gonies("b1", &company_id, &params).unwrap();
        assert_eq!(page.pagination.total_items, 1);
        assert_eq!(page.items[0].goni_name, "Jute 50kg");

        svc.delete_goni(&goni.id).unwrap();
        let page = svc
            .list_gonies("b1", &company_id, &PageParams::default())
            .unwrap();
        assert_eq!(page.pagination.total_items, 1);
    }

    #[test]
    fn duplicate_goni_name_is_a_conflict() {
        let svc = service();
        let company_id = seed_company(&svc);
        let input = || CreateGoniInput {
            goni_name: "Jute 50kg".into(),
            company_id: company_id.clone(),
            branch_id: "b1".into(),
        };
        svc.create_goni(&who(), input()).unwrap();
        let err = svc.create_goni(&who(), input()).unwrap_err();
        assert_eq!(err.to_string(), "Goni already exist!");
    }

    #[test]
    fn delete_missing_is_not_found() {
        let svc = service();
        let err = svc.delete_goni("nope").unwrap_err();
        assert_eq!(err.to_string(), "Goni not found!");
    }
}
