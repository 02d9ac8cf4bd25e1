//! [`SqliteStore`], the SQLite implementation of [`SummaryStore`] and
//! [`RecordSource`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use recap_core::{
  record::{
    AccountRecord, IssueRecord, RecordKind, SourceRecord, TicketRecord,
  },
  source::RecordSource,
  store::SummaryStore,
  subject::SummaryType,
  summary::{Invalidation, NewSummary, SummaryRecord},
};

use crate::{
  Error, Result,
  encode::{
    RawAccount, RawIssue, RawSummary, RawTicket, encode_covered_ids,
    encode_dt, encode_metadata, encode_summary_type, encode_uuid,
  },
  schema::SCHEMA,
};

/// `?1, ?2, …, ?n` for a dynamic IN clause.
fn placeholders(n: usize) -> String {
  (1..=n)
    .map(|i| format!("?{i}"))
    .collect::<Vec<_>>()
    .join(", ")
}

fn record_table(kind: RecordKind) -> &'static str {
  match kind {
    RecordKind::Ticket => "tickets",
    RecordKind::Issue => "jira_issues",
    RecordKind::Account => "sf_accounts",
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A recap summary store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Check that a summary exists and whether it is already invalidated.
  ///
  /// Returns `(exists, invalidation_id)`.
  async fn summary_lifecycle_check(
    &self,
    summary_id: Uuid,
  ) -> Result<(bool, Option<Uuid>)> {
    let id_str = encode_uuid(summary_id);

    let (exists, inv_str): (bool, Option<String>) = self
      .conn
      .call(move |conn| {
        let exists: bool = conn
          .query_row(
            "SELECT 1 FROM summaries WHERE summary_id = ?1",
            rusqlite::params![id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if !exists {
          return Ok((false, None));
        }

        let inv: Option<String> = conn
          .query_row(
            "SELECT invalidation_id FROM summary_invalidations
             WHERE summary_id = ?1",
            rusqlite::params![id_str],
            |r| r.get(0),
          )
          .optional()?;

        Ok((true, inv))
      })
      .await?;

    let invalidation_id = inv_str
      .map(|s| Uuid::parse_str(&s))
      .transpose()
      .map_err(Error::Uuid)?;

    Ok((exists, invalidation_id))
  }

  // ── Record ingestion ──────────────────────────────────────────────────

  /// Insert a mirrored support ticket. Used by seeding and sync jobs; the
  /// orchestrator itself never writes records.
  pub async fn insert_ticket(&self, ticket: &TicketRecord) -> Result<()> {
    let t = ticket.clone();
    let updated_at_str = encode_dt(t.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO tickets (
             id, subject, description, status, priority,
             requester, assignee, customer_id, linked_issue_count, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            t.id,
            t.subject,
            t.description,
            t.status,
            t.priority,
            t.requester,
            t.assignee,
            t.customer_id,
            t.linked_issue_count,
            updated_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a mirrored issue-tracker item.
  pub async fn insert_issue(&self, issue: &IssueRecord) -> Result<()> {
    let i = issue.clone();
    let updated_at_str = encode_dt(i.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO jira_issues (
             id, summary, description, issue_type, status, priority,
             assignee, reporter, linked_ticket_id, customer_id, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
          rusqlite::params![
            i.id,
            i.summary,
            i.description,
            i.issue_type,
            i.status,
            i.priority,
            i.assignee,
            i.reporter,
            i.linked_ticket_id,
            i.customer_id,
            updated_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a mirrored CRM account.
  pub async fn insert_account(&self, account: &AccountRecord) -> Result<()> {
    let a = account.clone();
    let updated_at_str = encode_dt(a.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO sf_accounts (
             id, name, industry, annual_revenue, employee_count,
             is_target_account, target_upsell_value, health_score,
             customer_id, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            a.id,
            a.name,
            a.industry,
            a.annual_revenue,
            a.employee_count,
            a.is_target_account,
            a.target_upsell_value,
            a.health_score,
            a.customer_id,
            updated_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SummaryStore impl ───────────────────────────────────────────────────────

impl SummaryStore for SqliteStore {
  type Error = Error;

  async fn append_summary(&self, input: NewSummary) -> Result<SummaryRecord> {
    let record = SummaryRecord {
      summary_id:   Uuid::new_v4(),
      summary_type: input.summary_type,
      text:         input.text,
      covered_ids:  input.covered_ids,
      metadata:     input.metadata,
      generated_at: Utc::now(),
    };

    let summary_id_str   = encode_uuid(record.summary_id);
    let summary_type_str = encode_summary_type(record.summary_type).to_owned();
    let summary          = record.text.clone();
    let covered_ids_str  = encode_covered_ids(&record.covered_ids)?;
    let metadata_str     = encode_metadata(&record.metadata)?;
    let generated_at_str = encode_dt(record.generated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO summaries (
             summary_id, summary_type, summary, covered_ids, metadata,
             generated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            summary_id_str,
            summary_type_str,
            summary,
            covered_ids_str,
            metadata_str,
            generated_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn latest_summary(
    &self,
    summary_type: SummaryType,
  ) -> Result<Option<SummaryRecord>> {
    let type_str = encode_summary_type(summary_type).to_owned();

    let raw: Option<RawSummary> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT s.summary_id, s.summary_type, s.summary,
                      s.covered_ids, s.metadata, s.generated_at
               FROM summaries s
               LEFT JOIN summary_invalidations i
                 ON i.summary_id = s.summary_id
               WHERE s.summary_type = ?1
                 AND i.invalidation_id IS NULL
               ORDER BY s.generated_at DESC, s.seq DESC
               LIMIT 1",
              rusqlite::params![type_str],
              |row| {
                Ok(RawSummary {
                  summary_id:   row.get(0)?,
                  summary_type: row.get(1)?,
                  summary:      row.get(2)?,
                  covered_ids:  row.get(3)?,
                  metadata:     row.get(4)?,
                  generated_at: row.get(5)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSummary::into_record).transpose()
  }

  async fn invalidate_summary(
    &self,
    summary_id: Uuid,
    reason: Option<String>,
  ) -> Result<Invalidation> {
    let (exists, invalidation_id) =
      self.summary_lifecycle_check(summary_id).await?;

    if !exists {
      return Err(Error::SummaryNotFound(summary_id));
    }
    if invalidation_id.is_some() {
      return Err(Error::AlreadyInvalidated(summary_id));
    }

    let invalidation = Invalidation {
      invalidation_id: Uuid::new_v4(),
      summary_id,
      reason:          reason.clone(),
      recorded_at:     Utc::now(),
    };

    let inv_id_str     = encode_uuid(invalidation.invalidation_id);
    let summary_id_str = encode_uuid(summary_id);
    let at_str         = encode_dt(invalidation.recorded_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO summary_invalidations
             (invalidation_id, summary_id, reason, recorded_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![inv_id_str, summary_id_str, reason, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(invalidation)
  }
}

// ─── RecordSource impl ───────────────────────────────────────────────────────

impl RecordSource for SqliteStore {
  type Error = Error;

  async fn fetch_records(
    &self,
    kind: RecordKind,
    ids: &[String],
  ) -> Result<Vec<SourceRecord>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }
    let ids = ids.to_vec();

    match kind {
      RecordKind::Ticket => {
        let raws: Vec<RawTicket> = self
          .conn
          .call(move |conn| {
            let sql = format!(
              "SELECT id, subject, description, status, priority,
                      requester, assignee, customer_id, linked_issue_count,
                      updated_at
               FROM tickets WHERE id IN ({})",
              placeholders(ids.len())
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
              .query_map(rusqlite::params_from_iter(ids.iter()), |row| {
                Ok(RawTicket {
                  id:                 row.get(0)?,
                  subject:            row.get(1)?,
                  description:        row.get(2)?,
                  status:             row.get(3)?,
                  priority:           row.get(4)?,
                  requester:          row.get(5)?,
                  assignee:           row.get(6)?,
                  customer_id:        row.get(7)?,
                  linked_issue_count: row.get(8)?,
                  updated_at:         row.get(9)?,
                })
              })?
              .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
          })
          .await?;

        raws
          .into_iter()
          .map(|raw| raw.into_record().map(SourceRecord::Ticket))
          .collect()
      }

      RecordKind::Issue => {
        let raws: Vec<RawIssue> = self
          .conn
          .call(move |conn| {
            let sql = format!(
              "SELECT id, summary, description, issue_type, status, priority,
                      assignee, reporter, linked_ticket_id, customer_id,
                      updated_at
               FROM jira_issues WHERE id IN ({})",
              placeholders(ids.len())
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
              .query_map(rusqlite::params_from_iter(ids.iter()), |row| {
                Ok(RawIssue {
                  id:               row.get(0)?,
                  summary:          row.get(1)?,
                  description:      row.get(2)?,
                  issue_type:       row.get(3)?,
                  status:           row.get(4)?,
                  priority:         row.get(5)?,
                  assignee:         row.get(6)?,
                  reporter:         row.get(7)?,
                  linked_ticket_id: row.get(8)?,
                  customer_id:      row.get(9)?,
                  updated_at:       row.get(10)?,
                })
              })?
              .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
          })
          .await?;

        raws
          .into_iter()
          .map(|raw| raw.into_record().map(SourceRecord::Issue))
          .collect()
      }

      RecordKind::Account => {
        let raws: Vec<RawAccount> = self
          .conn
          .call(move |conn| {
            let sql = format!(
              "SELECT id, name, industry, annual_revenue, employee_count,
                      is_target_account, target_upsell_value, health_score,
                      customer_id, updated_at
               FROM sf_accounts WHERE id IN ({})",
              placeholders(ids.len())
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
              .query_map(rusqlite::params_from_iter(ids.iter()), |row| {
                Ok(RawAccount {
                  id:                  row.get(0)?,
                  name:                row.get(1)?,
                  industry:            row.get(2)?,
                  annual_revenue:      row.get(3)?,
                  employee_count:      row.get(4)?,
                  is_target_account:   row.get(5)?,
                  target_upsell_value: row.get(6)?,
                  health_score:        row.get(7)?,
                  customer_id:         row.get(8)?,
                  updated_at:          row.get(9)?,
                })
              })?
              .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
          })
          .await?;

        raws
          .into_iter()
          .map(|raw| raw.into_record().map(SourceRecord::Account))
          .collect()
      }
    }
  }

  async fn customer_record_ids(
    &self,
    kind: RecordKind,
    customer_id: &str,
  ) -> Result<Vec<String>> {
    let customer_id = customer_id.to_owned();
    let table = record_table(kind);

    let ids: Vec<String> = self
      .conn
      .call(move |conn| {
        // rowid order is insertion order for these tables.
        let sql =
          format!("SELECT id FROM {table} WHERE customer_id = ?1 ORDER BY rowid");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![customer_id], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(ids)
  }
}
