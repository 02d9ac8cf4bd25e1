//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Structured fields (covered
//! IDs, metadata) are stored as compact JSON. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::{DateTime, Utc};
use recap_core::{
  metadata::SummaryMetadata,
  record::{AccountRecord, IssueRecord, TicketRecord},
  subject::SummaryType,
  summary::SummaryRecord,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── SummaryType ─────────────────────────────────────────────────────────────

pub fn encode_summary_type(ty: SummaryType) -> &'static str {
  ty.discriminant()
}

pub fn decode_summary_type(s: &str) -> Result<SummaryType> {
  Ok(SummaryType::parse(s)?)
}

// ─── JSON columns ────────────────────────────────────────────────────────────

pub fn encode_covered_ids(ids: &[String]) -> Result<String> {
  Ok(serde_json::to_string(ids)?)
}

pub fn decode_covered_ids(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

pub fn encode_metadata(metadata: &SummaryMetadata) -> Result<String> {
  Ok(serde_json::to_string(metadata)?)
}

pub fn decode_metadata(s: &str) -> Result<SummaryMetadata> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `summaries` row.
pub struct RawSummary {
  pub summary_id:   String,
  pub summary_type: String,
  pub summary:      String,
  pub covered_ids:  String,
  pub metadata:     String,
  pub generated_at: String,
}

impl RawSummary {
  pub fn into_record(self) -> Result<SummaryRecord> {
    Ok(SummaryRecord {
      summary_id:   decode_uuid(&self.summary_id)?,
      summary_type: decode_summary_type(&self.summary_type)?,
      text:         self.summary,
      covered_ids:  decode_covered_ids(&self.covered_ids)?,
      metadata:     decode_metadata(&self.metadata)?,
      generated_at: decode_dt(&self.generated_at)?,
    })
  }
}

/// Raw values read directly from a `tickets` row.
pub struct RawTicket {
  pub id:                 String,
  pub subject:            String,
  pub description:        Option<String>,
  pub status:             Option<String>,
  pub priority:           Option<String>,
  pub requester:          Option<String>,
  pub assignee:           Option<String>,
  pub customer_id:        Option<String>,
  pub linked_issue_count: u32,
  pub updated_at:         String,
}

impl RawTicket {
  pub fn into_record(self) -> Result<TicketRecord> {
    Ok(TicketRecord {
      id:                 self.id,
      subject:            self.subject,
      description:        self.description,
      status:             self.status,
      priority:           self.priority,
      requester:          self.requester,
      assignee:           self.assignee,
      customer_id:        self.customer_id,
      linked_issue_count: self.linked_issue_count,
      updated_at:         decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw values read directly from a `jira_issues` row.
pub struct RawIssue {
  pub id:               String,
  pub summary:          String,
  pub description:      Option<String>,
  pub issue_type:       Option<String>,
  pub status:           Option<String>,
  pub priority:         Option<String>,
  pub assignee:         Option<String>,
  pub reporter:         Option<String>,
  pub linked_ticket_id: Option<String>,
  pub customer_id:      Option<String>,
  pub updated_at:       String,
}

impl RawIssue {
  pub fn into_record(self) -> Result<IssueRecord> {
    Ok(IssueRecord {
      id:               self.id,
      summary:          self.summary,
      description:      self.description,
      issue_type:       self.issue_type,
      status:           self.status,
      priority:         self.priority,
      assignee:         self.assignee,
      reporter:         self.reporter,
      linked_ticket_id: self.linked_ticket_id,
      customer_id:      self.customer_id,
      updated_at:       decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw values read directly from a `sf_accounts` row.
pub struct RawAccount {
  pub id:                  String,
  pub name:                String,
  pub industry:            Option<String>,
  pub annual_revenue:      Option<f64>,
  pub employee_count:      Option<u32>,
  pub is_target_account:   bool,
  pub target_upsell_value: Option<f64>,
  pub health_score:        Option<f64>,
  pub customer_id:         Option<String>,
  pub updated_at:          String,
}

impl RawAccount {
  pub fn into_record(self) -> Result<AccountRecord> {
    Ok(AccountRecord {
      id:                  self.id,
      name:                self.name,
      industry:            self.industry,
      annual_revenue:      self.annual_revenue,
      employee_count:      self.employee_count,
      is_target_account:   self.is_target_account,
      target_upsell_value: self.target_upsell_value,
      health_score:        self.health_score,
      customer_id:         self.customer_id,
      updated_at:          decode_dt(&self.updated_at)?,
    })
  }
}
