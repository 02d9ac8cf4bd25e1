//! Deterministic summary composition for Recap.
//!
//! Turns a batch of source records into section-based summary text. Pure
//! synchronous; no HTTP or database dependencies. The [`Composer`] type
//! plugs the text builder in as the pipeline's
//! [`SummaryGenerator`](recap_core::generate::SummaryGenerator), so the full
//! stack runs without an external text service.
//!
//! # Quick start
//!
//! ```no_run
//! use recap_compose::compose;
//! use recap_core::record::SourceRecord;
//!
//! let records: Vec<SourceRecord> = fetch_somehow();
//! let text = compose(&records).unwrap();
//! println!("{text}");
//! # fn fetch_somehow() -> Vec<SourceRecord> { vec![] }
//! ```

pub mod error;
mod money;
mod text;

pub use error::{Error, Result};
use recap_core::{
  generate::SummaryGenerator,
  record::{RecordKind, SourceRecord},
};

// ─── Public API ──────────────────────────────────────────────────────────────

/// Compose summary text for `records`.
///
/// The batch's kind is taken from its first record; records of any other
/// kind are ignored. An empty batch is an error, matching the generator
/// contract that callers screen out empty subjects first.
pub fn compose(records: &[SourceRecord]) -> Result<String> {
  let Some(first) = records.first() else {
    return Err(Error::EmptyBatch);
  };

  let text = match first.kind() {
    RecordKind::Ticket => {
      let tickets: Vec<_> = records
        .iter()
        .filter_map(|r| match r {
          SourceRecord::Ticket(t) => Some(t),
          _ => None,
        })
        .collect();
      text::compose_tickets(&tickets)
    }
    RecordKind::Issue => {
      let issues: Vec<_> = records
        .iter()
        .filter_map(|r| match r {
          SourceRecord::Issue(i) => Some(i),
          _ => None,
        })
        .collect();
      text::compose_issues(&issues)
    }
    RecordKind::Account => {
      let accounts: Vec<_> = records
        .iter()
        .filter_map(|r| match r {
          SourceRecord::Account(a) => Some(a),
          _ => None,
        })
        .collect();
      text::compose_accounts(&accounts)
    }
  };

  Ok(text)
}

// ─── Generator adapter ───────────────────────────────────────────────────────

/// [`SummaryGenerator`] backed by [`compose`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Composer;

impl SummaryGenerator for Composer {
  type Error = Error;

  async fn generate(&self, records: &[SourceRecord]) -> Result<String> {
    compose(records)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use recap_core::record::TicketRecord;

  use super::*;

  fn ticket_record(id: &str) -> SourceRecord {
    SourceRecord::Ticket(TicketRecord {
      id:                 id.to_owned(),
      subject:            format!("Ticket {id}"),
      description:        None,
      status:             Some("open".to_owned()),
      priority:           Some("high".to_owned()),
      requester:          None,
      assignee:           None,
      customer_id:        None,
      linked_issue_count: 0,
      updated_at:         Utc::now(),
    })
  }

  #[test]
  fn empty_batch_is_rejected() {
    let err = compose(&[]).unwrap_err();
    assert!(matches!(err, Error::EmptyBatch));
  }

  #[test]
  fn batch_kind_follows_the_first_record() {
    let out = compose(&[ticket_record("101"), ticket_record("102")]).unwrap();
    assert!(out.starts_with("This summary covers 2 total tickets."));
  }

  #[tokio::test]
  async fn composer_implements_the_generator_contract() {
    let out = Composer
      .generate(&[ticket_record("101")])
      .await
      .expect("composition failed");
    assert!(out.contains("Recent Activity:"));
  }
}
