//! Source records, the upstream payloads summaries are computed from.
//!
//! Records are read-only mirrors of the systems of record (support desk,
//! issue tracker, CRM). The orchestrator never writes them; it fetches
//! batches by ID and aggregates over their fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Record kind ─────────────────────────────────────────────────────────────

/// The kind of upstream system a record mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
  Ticket,
  Issue,
  Account,
}

impl RecordKind {
  pub fn discriminant(&self) -> &'static str {
    match self {
      Self::Ticket => "ticket",
      Self::Issue => "issue",
      Self::Account => "account",
    }
  }
}

impl std::fmt::Display for RecordKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.discriminant())
  }
}

// ─── Tickets ─────────────────────────────────────────────────────────────────

/// A support ticket.
///
/// `status` and `priority` are free-form vendor strings; bucket matching
/// against them is case-insensitive and an absent value matches no bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
  pub id:                 String,
  pub subject:            String,
  pub description:        Option<String>,
  pub status:             Option<String>,
  pub priority:           Option<String>,
  pub requester:          Option<String>,
  pub assignee:           Option<String>,
  pub customer_id:        Option<String>,
  /// Number of issue-tracker items linked to this ticket.
  pub linked_issue_count: u32,
  /// Last activity in the source system; drives recency ordering.
  pub updated_at:         DateTime<Utc>,
}

// ─── Issues ──────────────────────────────────────────────────────────────────

/// An issue-tracker item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
  pub id:               String,
  pub summary:          String,
  pub description:      Option<String>,
  pub issue_type:       Option<String>,
  pub status:           Option<String>,
  pub priority:         Option<String>,
  pub assignee:         Option<String>,
  pub reporter:         Option<String>,
  /// Support ticket this issue was escalated from, if any.
  pub linked_ticket_id: Option<String>,
  pub customer_id:      Option<String>,
  pub updated_at:       DateTime<Utc>,
}

// ─── Accounts ────────────────────────────────────────────────────────────────

/// A CRM account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
  pub id:                  String,
  pub name:                String,
  pub industry:            Option<String>,
  pub annual_revenue:      Option<f64>,
  pub employee_count:      Option<u32>,
  pub is_target_account:   bool,
  pub target_upsell_value: Option<f64>,
  pub health_score:        Option<f64>,
  pub customer_id:         Option<String>,
  pub updated_at:          DateTime<Utc>,
}

// ─── SourceRecord ────────────────────────────────────────────────────────────

/// A record of any kind, as returned by a
/// [`RecordSource`](crate::source::RecordSource) fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum SourceRecord {
  Ticket(TicketRecord),
  Issue(IssueRecord),
  Account(AccountRecord),
}

impl SourceRecord {
  pub fn kind(&self) -> RecordKind {
    match self {
      Self::Ticket(_) => RecordKind::Ticket,
      Self::Issue(_) => RecordKind::Issue,
      Self::Account(_) => RecordKind::Account,
    }
  }

  /// The record's identifier in its source system.
  pub fn id(&self) -> &str {
    match self {
      Self::Ticket(t) => &t.id,
      Self::Issue(i) => &i.id,
      Self::Account(a) => &a.id,
    }
  }

  pub fn updated_at(&self) -> DateTime<Utc> {
    match self {
      Self::Ticket(t) => t.updated_at,
      Self::Issue(i) => i.updated_at,
      Self::Account(a) => a.updated_at,
    }
  }
}
