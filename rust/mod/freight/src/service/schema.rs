use shiperp_core::ServiceError;
use shiperp_sql::SQLStore;

/// SQL DDL statements to initialize the freight database schema.
///
/// Each table stores the full JSON document in a `data` TEXT column, with
/// indexed columns extracted for filtering, ordering, and uniqueness. The
/// UNIQUE constraints on natural keys are the authoritative duplicate
/// check — there is no read-then-insert window.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS lines (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        line_name TEXT UNIQUE,
        branch_id TEXT,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS container_companies (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        company_name TEXT UNIQUE,
        line_id TEXT,
        branch_id TEXT,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS gonies (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        goni_name TEXT UNIQUE,
        company_id TEXT,
        branch_id TEXT,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS sea_voyages (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        sea_voyage_name TEXT,
        sea_voyage_number TEXT UNIQUE,
        branch_id TEXT,
        line_id TEXT,
        year INTEGER,
        status TEXT,
        tracking_status TEXT,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS sea_containers (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        container_number TEXT,
        sea_voyage_id TEXT,
        branch_id TEXT,
        status TEXT,
        create_at TEXT,
        update_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS bills (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        bill_number TEXT,
        shipper TEXT,
        consignee TEXT,
        voyage_number TEXT,
        is_draft INTEGER,
        create_at TEXT,
        update_at TEXT
    )",
    // Indexes
    "CREATE INDEX IF NOT EXISTS idx_lines_branch ON lines(branch_id)",
    "CREATE INDEX IF NOT EXISTS idx_cc_branch ON container_companies(branch_id)",
    "CREATE INDEX IF NOT EXISTS idx_cc_line ON container_companies(line_id)",
    "CREATE INDEX IF NOT EXISTS idx_goni_branch ON gonies(branch_id)",
    "CREATE INDEX IF NOT EXISTS idx_goni_company ON gonies(company_id)",
    "CREATE INDEX IF NOT EXISTS idx_sv_branch ON sea_voyages(branch_id)",
    "CREATE INDEX IF NOT EXISTS idx_sv_line ON sea_voyages(line_id)",
    "CREATE INDEX IF NOT EXISTS idx_sv_status ON sea_voyages(status)",
    "CREATE INDEX IF NOT EXISTS idx_sc_branch ON sea_containers(branch_id)",
    "CREATE INDEX IF NOT EXISTS idx_sc_voyage ON sea_containers(sea_voyage_id)",
    "CREATE INDEX IF NOT EXISTS idx_sc_status ON sea_containers(status)",
    "CREATE INDEX IF NOT EXISTS idx_bill_number ON bills(bill_number)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
    }
    Ok(())
}
