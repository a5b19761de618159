pub mod bill;
pub mod container_company;
pub mod goni;
pub mod line;
pub mod schema;
pub mod sea_container;
pub mod sea_voyage;

use serde::Serialize;
use serde::de::DeserializeOwned;

use shiperp_core::{Page, PageParams, Paging, ServiceError, merge_patch, now_rfc3339};
use shiperp_sql::{SQLStore, Value};

/// Freight service — owns the document store and implements every
/// resource operation. Each resource table stores the full JSON document
/// in a `data` column, with indexed columns extracted for filtering,
/// ordering, and uniqueness.
pub struct FreightService {
    pub(crate) sql: Box<dyn SQLStore>,
}

impl FreightService {
    pub fn new(sql: Box<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self { sql })
    }

    // ── Generic document helpers ──

    /// Insert a record as JSON into a table with indexed columns.
    /// A UNIQUE violation surfaces as `Conflict`; the constraint, not a
    /// prior read, is the authoritative duplicate signal.
    pub(crate) fn insert_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), ServiceError> {
        let json = serde_json::to_string(record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut cols = vec!["id", "data"];
        let mut placeholders = vec!["?1".to_string(), "?2".to_string()];
        let mut params = vec![Value::Text(id.to_string()), Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            let idx = i + 3;
            cols.push(col);
            placeholders.push(format!("?{}", idx));
            params.push(val.clone());
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            cols.join(", "),
            placeholders.join(", "),
        );

        self.sql.exec(&sql, &params).map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint") {
                ServiceError::Conflict(msg)
            } else {
                ServiceError::Storage(msg)
            }
        })?;

        Ok(())
    }

    /// Get a record by id, deserializing the JSON `data` column.
    pub(crate) fn get_record<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
    ) -> Result<T, ServiceError> {
        let sql = format!("SELECT data FROM {} WHERE id = ?1", table);
        let rows = self
            .sql
            .query(&sql, &[Value::Text(id.to_string())])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("{}/{}", table, id)))?;
        let data = row
            .get_str("data")
            .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
        serde_json::from_str(data).map_err(|e| ServiceError::Internal(e.to_string()))
    }

    /// Update a record's JSON data and indexed columns.
    pub(crate) fn update_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), ServiceError> {
        let json = serde_json::to_string(record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut sets = vec!["data = ?1".to_string()];
        let mut params: Vec<Value> = vec![Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            let idx = i + 2;
            sets.push(format!("{} = ?{}", col, idx));
            params.push(val.clone());
        }

        let id_idx = params.len() + 1;
        params.push(Value::Text(id.to_string()));

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            table,
            sets.join(", "),
            id_idx,
        );

        let affected = self
            .sql
            .exec(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!("{}/{}", table, id)));
        }

        Ok(())
    }

    /// Delete a record by id. Zero affected rows means the id never
    /// resolved — reported as `NotFound`, never a silent no-op.
    pub(crate) fn delete_record(&self, table: &str, id: &str) -> Result<(), ServiceError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", table);
        let affected = self
            .sql
            .exec(&sql, &[Value::Text(id.to_string())])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if affected == 0 {
            return Err(ServiceError::NotFound(format!("{}/{}", table, id)));
        }
        Ok(())
    }

    // ── Listing query builder ──

    /// Produce one page of documents for a scoped, searchable listing.
    ///
    /// Builds the filter from the required scope, the optional status
    /// equality, and the optional case-insensitive substring search over
    /// the resource's search columns; counts the total; then fetches the
    /// page ordered by creation time descending (id descending as
    /// tie-break, so a fixed filter over unchanged data always yields the
    /// same page).
    ///
    /// Case folding uses SQLite's LOWER/LIKE, which only folds ASCII:
    /// search is case-sensitive for non-ASCII names.
    pub(crate) fn list_page<T: DeserializeOwned + Serialize>(
        &self,
        spec: &ListSpec<'_>,
        params: &PageParams,
    ) -> Result<Page<T>, ServiceError> {
        // Required scope fields are rejected before any query runs.
        for (col, val) in spec.scope {
            if val.trim().is_empty() {
                return Err(ServiceError::Validation(format!("{} is required!", col)));
            }
        }

        let mut where_clauses = Vec::new();
        let mut sql_params: Vec<Value> = Vec::new();

        for (col, val) in spec.scope {
            where_clauses.push(format!("{} = ?{}", col, sql_params.len() + 1));
            sql_params.push(Value::Text((*val).to_string()));
        }

        if let Some(col) = spec.status_col {
            if let Some(status) = params.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                where_clauses.push(format!("{} = ?{}", col, sql_params.len() + 1));
                sql_params.push(Value::Text(status.to_string()));
            }
        }

        if let Some(needle) = params.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
            let mut ors = Vec::new();
            for col in spec.search_cols {
                ors.push(format!("LOWER({}) LIKE ?{} ESCAPE '\\'", col, sql_params.len() + 1));
                sql_params.push(Value::Text(pattern.clone()));
            }
            where_clauses.push(format!("({})", ors.join(" OR ")));
        }

        let where_sql = if where_clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", where_clauses.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) AS cnt FROM {}{}", spec.table, where_sql);
        let rows = self
            .sql
            .query(&count_sql, &sql_params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let total_items = rows.first().and_then(|r| r.get_i64("cnt")).unwrap_or(0) as u64;

        let page = params.page();
        let limit = params.limit();

        let limit_idx = sql_params.len() + 1;
        let offset_idx = sql_params.len() + 2;
        sql_params.push(Value::Integer(limit as i64));
        sql_params.push(Value::Integer(params.offset() as i64));

        let select_sql = format!(
            "SELECT data FROM {}{} ORDER BY create_at DESC, id DESC LIMIT ?{} OFFSET ?{}",
            spec.table, where_sql, limit_idx, offset_idx,
        );
        let rows = self
            .sql
            .query(&select_sql, &sql_params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            let data = row
                .get_str("data")
                .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
            let item: T = serde_json::from_str(data)
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
            items.push(item);
        }

        Ok(Page {
            items,
            pagination: Paging::compute(page, limit, total_items),
        })
    }

    /// Apply a JSON merge-patch to a record, protecting the immutable
    /// fields and forcing `updateAt`.
    ///
    /// A patch that nulls out a required field (merge-patch removal) or is
    /// not a JSON object leaves a document that no longer deserializes;
    /// that is the caller's input at fault, reported as `Validation`.
    pub(crate) fn apply_patch<T: Serialize + DeserializeOwned>(
        current: &T,
        patch: serde_json::Value,
    ) -> Result<T, ServiceError> {
        let mut json = serde_json::to_value(current)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let now = now_rfc3339();

        let mut patch_filtered = patch;
        if let Some(obj) = patch_filtered.as_object_mut() {
            obj.remove("id");
            obj.remove("createAt");
            obj.remove("createdBy");
            obj.insert("updateAt".into(), serde_json::json!(now));
        }

        merge_patch(&mut json, &patch_filtered);
        serde_json::from_value(json)
            .map_err(|e| ServiceError::Validation(format!("invalid patch: {}", e)))
    }
}

/// Declarative description of one resource's scoped listing: the table,
/// the required equality scope (branch and, where present, the parent
/// reference), the status column if the resource has one, and the
/// searchable name-like column(s).
pub(crate) struct ListSpec<'a> {
    pub table: &'a str,
    pub scope: &'a [(&'a str, &'a str)],
    pub status_col: Option<&'a str>,
    pub search_cols: &'a [&'a str],
}

/// Reject a missing or blank required field before touching the store.
pub(crate) fn require(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!("{} is required!", field)));
    }
    Ok(())
}

/// Replace a generic `NotFound` from the document helpers with the
/// resource's user-facing message.
pub(crate) fn not_found_as(err: ServiceError, message: &str) -> ServiceError {
    match err {
        ServiceError::NotFound(_) => ServiceError::NotFound(message.to_string()),
        other => other,
    }
}

/// Replace a raw UNIQUE-violation `Conflict` with the resource's
/// user-facing message.
pub(crate) fn conflict_as(err: ServiceError, message: &str) -> ServiceError {
    match err {
        ServiceError::Conflict(_) => ServiceError::Conflict(message.to_string()),
        other => other,
    }
}

/// Escape the characters LIKE treats specially (`\`, `%`, `_`).
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
