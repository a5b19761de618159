use serde::{Deserialize, Serialize};

/// Query parameters accepted by every listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u64,

    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u64,

    /// Case-insensitive substring search over the resource's name field(s).
    #[serde(default)]
    pub search: Option<String>,

    /// Status equality filter, for resources that carry a status.
    #[serde(default)]
    pub status: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
            status: None,
        }
    }
}

impl PageParams {
    /// Upper bound on page size.
    pub const MAX_LIMIT: u64 = 100;

    /// Page number, floored at 1.
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// Page size, clamped to 1..=[`Self::MAX_LIMIT`].
    pub fn limit(&self) -> u64 {
        self.limit.clamp(1, Self::MAX_LIMIT)
    }

    /// Number of rows to skip for the requested page. Saturates instead of
    /// overflowing for absurd caller-chosen page numbers.
    pub fn offset(&self) -> u64 {
        self.page().saturating_sub(1).saturating_mul(self.limit())
    }
}

/// Pagination metadata returned alongside every page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Paging {
    /// Derive paging metadata from the requested page/limit and the total
    /// match count. `limit` must be non-zero (callers clamp it).
    pub fn compute(page: u64, limit: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(limit);
        Self {
            current_page: page,
            total_pages,
            total_items,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

/// One page of documents plus its pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: Paging,
}

/// Generate a new random ID (UUIDv4, no dashes).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Merge a JSON patch into a base value.
///
/// For each key in `patch`:
/// - If the value is `null`, the key is removed from `base`.
/// - Otherwise, the key is set to the patch value.
///
/// This follows RFC 7386 (JSON Merge Patch) semantics.
pub fn merge_patch(base: &mut serde_json::Value, patch: &serde_json::Value) {
    if let (Some(base_obj), Some(patch_obj)) = (base.as_object_mut(), patch.as_object()) {
        for (key, value) in patch_obj {
            if value.is_null() {
                base_obj.remove(key);
            } else if value.is_object() {
                // Recursively merge nested objects.
                let entry = base_obj
                    .entry(key.clone())
                    .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
                merge_patch(entry, value);
            } else {
                base_obj.insert(key.clone(), value.clone());
            }
        }
    } else {
        *base = patch.clone();
    }
}
