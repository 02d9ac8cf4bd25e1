//! SQL schema for the recap SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Summaries are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table. `seq` breaks ties
-- between writes that land on the same generated_at instant, so 'most
-- recent' is a total order.
CREATE TABLE IF NOT EXISTS summaries (
    seq          INTEGER PRIMARY KEY AUTOINCREMENT,
    summary_id   TEXT NOT NULL UNIQUE,
    summary_type TEXT NOT NULL,   -- discriminant of SummaryType variant
    summary      TEXT NOT NULL,   -- generated natural-language text
    covered_ids  TEXT NOT NULL,   -- JSON array of source record IDs
    metadata     TEXT NOT NULL,   -- JSON object of aggregate counts
    generated_at TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

-- A summary marked as no longer servable.
CREATE TABLE IF NOT EXISTS summary_invalidations (
    invalidation_id TEXT PRIMARY KEY,
    summary_id      TEXT NOT NULL REFERENCES summaries(summary_id),
    reason          TEXT,
    recorded_at     TEXT NOT NULL,
    UNIQUE (summary_id)
);

-- Mirrored source records. recap only reads these; ingestion happens out of
-- band (demo seeding or an external sync job).
CREATE TABLE IF NOT EXISTS tickets (
    id                 TEXT PRIMARY KEY,
    subject            TEXT NOT NULL,
    description        TEXT,
    status             TEXT,
    priority           TEXT,
    requester          TEXT,
    assignee           TEXT,
    customer_id        TEXT,
    linked_issue_count INTEGER NOT NULL DEFAULT 0,
    updated_at         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS jira_issues (
    id               TEXT PRIMARY KEY,
    summary          TEXT NOT NULL,
    description      TEXT,
    issue_type       TEXT,
    status           TEXT,
    priority         TEXT,
    assignee         TEXT,
    reporter         TEXT,
    linked_ticket_id TEXT,
    customer_id      TEXT,
    updated_at       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sf_accounts (
    id                  TEXT PRIMARY KEY,
    name                TEXT NOT NULL,
    industry            TEXT,
    annual_revenue      REAL,
    employee_count      INTEGER,
    is_target_account   INTEGER NOT NULL DEFAULT 0,
    target_upsell_value REAL,
    health_score        REAL,
    customer_id         TEXT,
    updated_at          TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS summaries_type_generated_idx
  ON summaries(summary_type, generated_at DESC);
CREATE INDEX IF NOT EXISTS tickets_customer_idx     ON tickets(customer_id);
CREATE INDEX IF NOT EXISTS jira_issues_customer_idx ON jira_issues(customer_id);
CREATE INDEX IF NOT EXISTS sf_accounts_customer_idx ON sf_accounts(customer_id);

PRAGMA user_version = 1;
";
