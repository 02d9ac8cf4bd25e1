//! Aggregate counts reported alongside a summary.
//!
//! Metadata is a pure function of the current record batch. It is computed
//! fresh on every request, cache hit or not, and is never trusted from a
//! stored record.

use serde::{Deserialize, Serialize};

use crate::record::{RecordKind, SourceRecord};

/// Ticket statuses that count as open.
pub const OPEN_TICKET_STATUSES: &[&str] = &["open", "pending", "new"];

/// Issue statuses that count as in progress.
pub const IN_PROGRESS_ISSUE_STATUSES: &[&str] =
  &["in progress", "in development"];

/// Priorities that count as high, for tickets and issues alike.
pub const HIGH_PRIORITIES: &[&str] = &["high", "urgent", "critical"];

/// Aggregates for one record kind, serialised as a flat JSON object.
///
/// The variants have disjoint field names, so the untagged representation
/// round-trips unambiguously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryMetadata {
  Tickets {
    total_count:           u64,
    open_tickets:          u64,
    high_priority_tickets: u64,
    tickets_with_jira:     u64,
  },
  Issues {
    total_issues:         u64,
    in_progress_issues:   u64,
    high_priority_issues: u64,
    issues_with_tickets:  u64,
  },
  Accounts {
    total_accounts:   u64,
    target_accounts:  u64,
    total_revenue:    f64,
    potential_upsell: f64,
  },
}

impl SummaryMetadata {
  /// Zeroed counts for `kind`; used for the canned empty-state result.
  pub fn empty(kind: RecordKind) -> Self {
    match kind {
      RecordKind::Ticket => Self::Tickets {
        total_count:           0,
        open_tickets:          0,
        high_priority_tickets: 0,
        tickets_with_jira:     0,
      },
      RecordKind::Issue => Self::Issues {
        total_issues:         0,
        in_progress_issues:   0,
        high_priority_issues: 0,
        issues_with_tickets:  0,
      },
      RecordKind::Account => Self::Accounts {
        total_accounts:   0,
        target_accounts:  0,
        total_revenue:    0.0,
        potential_upsell: 0.0,
      },
    }
  }

  /// Compute aggregates over a record batch. Records of a kind other than
  /// `kind` are ignored.
  pub fn from_records(kind: RecordKind, records: &[SourceRecord]) -> Self {
    match kind {
      RecordKind::Ticket => {
        let tickets = records.iter().filter_map(|r| match r {
          SourceRecord::Ticket(t) => Some(t),
          _ => None,
        });
        let mut total = 0;
        let mut open = 0;
        let mut high = 0;
        let mut with_jira = 0;
        for ticket in tickets {
          total += 1;
          if in_bucket(ticket.status.as_deref(), OPEN_TICKET_STATUSES) {
            open += 1;
          }
          if in_bucket(ticket.priority.as_deref(), HIGH_PRIORITIES) {
            high += 1;
          }
          if ticket.linked_issue_count > 0 {
            with_jira += 1;
          }
        }
        Self::Tickets {
          total_count:           total,
          open_tickets:          open,
          high_priority_tickets: high,
          tickets_with_jira:     with_jira,
        }
      }

      RecordKind::Issue => {
        let issues = records.iter().filter_map(|r| match r {
          SourceRecord::Issue(i) => Some(i),
          _ => None,
        });
        let mut total = 0;
        let mut in_progress = 0;
        let mut high = 0;
        let mut with_tickets = 0;
        for issue in issues {
          total += 1;
          if in_bucket(issue.status.as_deref(), IN_PROGRESS_ISSUE_STATUSES) {
            in_progress += 1;
          }
          if in_bucket(issue.priority.as_deref(), HIGH_PRIORITIES) {
            high += 1;
          }
          if issue.linked_ticket_id.is_some() {
            with_tickets += 1;
          }
        }
        Self::Issues {
          total_issues:         total,
          in_progress_issues:   in_progress,
          high_priority_issues: high,
          issues_with_tickets:  with_tickets,
        }
      }

      RecordKind::Account => {
        let accounts = records.iter().filter_map(|r| match r {
          SourceRecord::Account(a) => Some(a),
          _ => None,
        });
        let mut total = 0;
        let mut target = 0;
        let mut revenue = 0.0;
        let mut upsell = 0.0;
        for account in accounts {
          total += 1;
          if account.is_target_account {
            target += 1;
          }
          revenue += account.annual_revenue.unwrap_or(0.0);
          upsell += account.target_upsell_value.unwrap_or(0.0);
        }
        Self::Accounts {
          total_accounts:   total,
          target_accounts:  target,
          total_revenue:    revenue,
          potential_upsell: upsell,
        }
      }
    }
  }

  pub fn kind(&self) -> RecordKind {
    match self {
      Self::Tickets { .. } => RecordKind::Ticket,
      Self::Issues { .. } => RecordKind::Issue,
      Self::Accounts { .. } => RecordKind::Account,
    }
  }
}

/// Case-insensitive bucket membership. An absent value matches nothing.
pub fn in_bucket(value: Option<&str>, bucket: &[&str]) -> bool {
  match value {
    Some(value) => bucket.iter().any(|entry| value.eq_ignore_ascii_case(entry)),
    None => false,
  }
}
