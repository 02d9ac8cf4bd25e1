//! The summary cache orchestrator.
//!
//! [`SummaryService`] is the single entry point for summary requests: given a
//! resolved [`Subject`] and a force flag, it either serves a stored summary
//! that still covers the request or drives generation and persistence of a
//! new one. The store, the record source, and the generator are injected at
//! construction so tests can substitute fakes.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::{
  Error, Result,
  generate::SummaryGenerator,
  metadata::SummaryMetadata,
  record::RecordKind,
  source::RecordSource,
  store::SummaryStore,
  subject::{Subject, SummaryType},
  summary::{Invalidation, NewSummary},
  validate,
};

/// Canned text served when a subject has no backing records.
pub const NO_RECORDS_TEXT: &str =
  "No records found for the specified criteria.";

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// Where a [`SummaryOutcome`]'s text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
  /// A stored summary covered the request; no write occurred.
  Cached,
  /// Freshly generated and persisted.
  Generated,
  /// Freshly generated, but persisting it failed; the text is served anyway.
  GeneratedUnpersisted,
  /// The subject had no backing records; canned text, nothing generated.
  NoRecords,
}

/// The result of [`SummaryService::get_or_generate`].
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
  pub text:         String,
  /// Always computed from the live record batch, cache hit or not.
  pub metadata:     SummaryMetadata,
  pub generated_at: DateTime<Utc>,
  pub provenance:   Provenance,
}

/// The result of [`SummaryService::check`], a read-only validity probe.
#[derive(Debug, Clone)]
pub struct SummaryProbe {
  pub has_valid_summary: bool,
  pub text:              Option<String>,
  pub generated_at:      Option<DateTime<Utc>>,
}

impl SummaryProbe {
  fn negative() -> Self {
    Self {
      has_valid_summary: false,
      text:              None,
      generated_at:      None,
    }
  }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// The summary cache orchestrator.
pub struct SummaryService<St, Src, G> {
  store:     St,
  source:    Src,
  generator: G,
}

impl<St, Src, G> SummaryService<St, Src, G>
where
  St: SummaryStore,
  Src: RecordSource,
  G: SummaryGenerator,
{
  pub fn new(store: St, source: Src, generator: G) -> Self {
    Self {
      store,
      source,
      generator,
    }
  }

  /// Resolve a group subject to the current membership for a customer:
  /// every record of the type's kind belonging to `customer_id`.
  ///
  /// Fails with [`Error::EmptySubject`] when the customer has no records of
  /// that kind.
  pub async fn resolve_customer_group(
    &self,
    summary_type: SummaryType,
    customer_id: &str,
  ) -> Result<Subject> {
    let ids = self
      .source
      .customer_record_ids(summary_type.record_kind(), customer_id)
      .await
      .map_err(Error::upstream)?;
    Subject::group(summary_type, ids)
  }

  /// Serve a summary for `subject`, generating and persisting a new one when
  /// no stored summary covers the request (or when `force_regenerate` is
  /// set).
  ///
  /// Aggregate metadata is recomputed from the live record batch on every
  /// call, including cache hits. A store read failure degrades to
  /// regeneration; a store write failure degrades to returning the generated
  /// text unpersisted. Both are logged as warnings.
  pub async fn get_or_generate(
    &self,
    subject: &Subject,
    force_regenerate: bool,
  ) -> Result<SummaryOutcome> {
    let summary_type = subject.summary_type();
    let kind = subject.record_kind();

    let records = self
      .source
      .fetch_records(kind, subject.source_ids())
      .await
      .map_err(Error::upstream)?;

    if records.is_empty() {
      debug!(%summary_type, "no backing records; serving canned empty state");
      return Ok(SummaryOutcome {
        text:         NO_RECORDS_TEXT.to_owned(),
        metadata:     SummaryMetadata::empty(kind),
        generated_at: Utc::now(),
        provenance:   Provenance::NoRecords,
      });
    }

    let metadata = SummaryMetadata::from_records(kind, &records);

    if !force_regenerate {
      match self.store.latest_summary(summary_type).await {
        Ok(Some(candidate)) if validate::covers(&candidate, subject) => {
          debug!(
            %summary_type,
            summary_id = %candidate.summary_id,
            "serving stored summary"
          );
          return Ok(SummaryOutcome {
            text: candidate.text,
            metadata,
            generated_at: candidate.generated_at,
            provenance: Provenance::Cached,
          });
        }
        Ok(_) => {}
        Err(err) => {
          warn!(
            %summary_type,
            error = %err,
            "summary store read failed; regenerating"
          );
        }
      }
    }

    let text = self
      .generator
      .generate(&records)
      .await
      .map_err(Error::upstream)?;
    if text.trim().is_empty() {
      return Err(Error::MalformedGeneratorResponse);
    }

    let input = NewSummary {
      summary_type,
      text: text.clone(),
      covered_ids: subject.source_ids().to_vec(),
      metadata: metadata.clone(),
    };
    match self.store.append_summary(input).await {
      Ok(record) => Ok(SummaryOutcome {
        text: record.text,
        metadata,
        generated_at: record.generated_at,
        provenance: Provenance::Generated,
      }),
      Err(err) => {
        warn!(
          %summary_type,
          error = %err,
          "summary store write failed; returning unpersisted text"
        );
        Ok(SummaryOutcome {
          text,
          metadata,
          generated_at: Utc::now(),
          provenance: Provenance::GeneratedUnpersisted,
        })
      }
    }
  }

  /// Read-only probe: does a stored summary currently cover `subject`?
  ///
  /// Never generates. A store read failure reports "no valid summary"
  /// rather than failing the request.
  pub async fn check(&self, subject: &Subject) -> SummaryProbe {
    match self.store.latest_summary(subject.summary_type()).await {
      Ok(Some(candidate)) if validate::covers(&candidate, subject) => {
        SummaryProbe {
          has_valid_summary: true,
          text:              Some(candidate.text),
          generated_at:      Some(candidate.generated_at),
        }
      }
      Ok(_) => SummaryProbe::negative(),
      Err(err) => {
        warn!(
          summary_type = %subject.summary_type(),
          error = %err,
          "summary store read failed during check"
        );
        SummaryProbe::negative()
      }
    }
  }

  /// Invalidate the most recent live summary of a type so the next request
  /// regenerates. Returns `None` when no live summary exists.
  pub async fn invalidate_latest(
    &self,
    summary_type: SummaryType,
    reason: Option<String>,
  ) -> Result<Option<Invalidation>> {
    let candidate = self
      .store
      .latest_summary(summary_type)
      .await
      .map_err(Error::store_read)?;
    let Some(candidate) = candidate else {
      return Ok(None);
    };

    let invalidation = self
      .store
      .invalidate_summary(candidate.summary_id, reason)
      .await
      .map_err(Error::store_write)?;
    Ok(Some(invalidation))
  }

  /// Aggregate metadata over a customer's current records, without touching
  /// stored summaries.
  pub async fn live_metadata(
    &self,
    kind: RecordKind,
    customer_id: &str,
  ) -> Result<SummaryMetadata> {
    let ids = self
      .source
      .customer_record_ids(kind, customer_id)
      .await
      .map_err(Error::upstream)?;
    if ids.is_empty() {
      return Ok(SummaryMetadata::empty(kind));
    }

    let records = self
      .source
      .fetch_records(kind, &ids)
      .await
      .map_err(Error::upstream)?;
    Ok(SummaryMetadata::from_records(kind, &records))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
  };

  use uuid::Uuid;

  use super::*;
  use crate::{record::TicketRecord, summary::SummaryRecord};

  #[derive(Debug, thiserror::Error)]
  #[error("{0}")]
  struct FakeError(&'static str);

  // ── Fakes ─────────────────────────────────────────────────────────────

  /// In-memory store with scriptable failures and a write counter. Interior
  /// state is shared so tests keep a handle after moving a clone into the
  /// service.
  #[derive(Clone, Default)]
  struct MemStore {
    records:     Arc<Mutex<Vec<SummaryRecord>>>,
    appends:     Arc<AtomicUsize>,
    fail_reads:  bool,
    fail_writes: bool,
  }

  impl MemStore {
    fn append_count(&self) -> usize { self.appends.load(Ordering::SeqCst) }

    /// Pre-seed a stored summary without going through the service.
    fn seed(&self, summary_type: SummaryType, covered: &[&str], text: &str) {
      self.records.lock().unwrap().push(SummaryRecord {
        summary_id: Uuid::new_v4(),
        summary_type,
        text: text.to_owned(),
        covered_ids: covered.iter().map(|id| (*id).to_owned()).collect(),
        metadata: SummaryMetadata::empty(summary_type.record_kind()),
        generated_at: Utc::now(),
      });
    }
  }

  impl SummaryStore for MemStore {
    type Error = FakeError;

    async fn append_summary(
      &self,
      input: NewSummary,
    ) -> Result<SummaryRecord, FakeError> {
      if self.fail_writes {
        return Err(FakeError("disk full"));
      }
      self.appends.fetch_add(1, Ordering::SeqCst);
      let record = SummaryRecord {
        summary_id:   Uuid::new_v4(),
        summary_type: input.summary_type,
        text:         input.text,
        covered_ids:  input.covered_ids,
        metadata:     input.metadata,
        generated_at: Utc::now(),
      };
      self.records.lock().unwrap().push(record.clone());
      Ok(record)
    }

    async fn latest_summary(
      &self,
      summary_type: SummaryType,
    ) -> Result<Option<SummaryRecord>, FakeError> {
      if self.fail_reads {
        return Err(FakeError("connection reset"));
      }
      let records = self.records.lock().unwrap();
      Ok(
        records
          .iter()
          .rev()
          .find(|r| r.summary_type == summary_type)
          .cloned(),
      )
    }

    async fn invalidate_summary(
      &self,
      summary_id: Uuid,
      reason: Option<String>,
    ) -> Result<Invalidation, FakeError> {
      let mut records = self.records.lock().unwrap();
      let position = records
        .iter()
        .position(|r| r.summary_id == summary_id)
        .ok_or(FakeError("no such summary"))?;
      records.remove(position);
      Ok(Invalidation {
        invalidation_id: Uuid::new_v4(),
        summary_id,
        reason,
        recorded_at: Utc::now(),
      })
    }
  }

  /// Record source backed by a fixed set of tickets.
  #[derive(Clone, Default)]
  struct MemSource {
    tickets: Vec<TicketRecord>,
    fail:    bool,
  }

  impl RecordSource for MemSource {
    type Error = FakeError;

    async fn fetch_records(
      &self,
      kind: RecordKind,
      ids: &[String],
    ) -> Result<Vec<crate::record::SourceRecord>, FakeError> {
      if self.fail {
        return Err(FakeError("record backend offline"));
      }
      assert_eq!(kind, RecordKind::Ticket);
      Ok(
        self
          .tickets
          .iter()
          .filter(|t| ids.contains(&t.id))
          .cloned()
          .map(crate::record::SourceRecord::Ticket)
          .collect(),
      )
    }

    async fn customer_record_ids(
      &self,
      _kind: RecordKind,
      customer_id: &str,
    ) -> Result<Vec<String>, FakeError> {
      Ok(
        self
          .tickets
          .iter()
          .filter(|t| t.customer_id.as_deref() == Some(customer_id))
          .map(|t| t.id.clone())
          .collect(),
      )
    }
  }

  /// Generator returning a fixed line, with a call counter.
  #[derive(Clone)]
  struct CountingGenerator {
    calls:  Arc<AtomicUsize>,
    output: &'static str,
  }

  impl CountingGenerator {
    fn with_output(output: &'static str) -> Self {
      Self {
        calls: Arc::new(AtomicUsize::new(0)),
        output,
      }
    }

    fn call_count(&self) -> usize { self.calls.load(Ordering::SeqCst) }
  }

  impl SummaryGenerator for CountingGenerator {
    type Error = FakeError;

    async fn generate(
      &self,
      records: &[crate::record::SourceRecord],
    ) -> Result<String, FakeError> {
      assert!(!records.is_empty(), "generator called with an empty batch");
      self.calls.fetch_add(1, Ordering::SeqCst);
      Ok(self.output.to_owned())
    }
  }

  struct FailingGenerator;

  impl SummaryGenerator for FailingGenerator {
    type Error = FakeError;

    async fn generate(
      &self,
      _records: &[crate::record::SourceRecord],
    ) -> Result<String, FakeError> {
      Err(FakeError("model endpoint returned 503"))
    }
  }

  // ── Helpers ───────────────────────────────────────────────────────────

  fn ticket(id: &str, status: &str, priority: &str) -> TicketRecord {
    TicketRecord {
      id:                 id.to_owned(),
      subject:            format!("Ticket {id}"),
      description:        None,
      status:             Some(status.to_owned()),
      priority:           Some(priority.to_owned()),
      requester:          None,
      assignee:           None,
      customer_id:        Some("cust-1".to_owned()),
      linked_issue_count: 0,
      updated_at:         Utc::now(),
    }
  }

  fn three_ticket_source() -> MemSource {
    MemSource {
      tickets: vec![
        ticket("101", "open", "high"),
        ticket("102", "open", "medium"),
        ticket("103", "closed", "high"),
      ],
      fail:    false,
    }
  }

  fn group(ids: &[&str]) -> Subject {
    Subject::group(
      SummaryType::AllTickets,
      ids.iter().map(|id| (*id).to_owned()),
    )
    .unwrap()
  }

  // ── get_or_generate ───────────────────────────────────────────────────

  #[tokio::test]
  async fn second_call_is_a_cache_hit_with_one_write_total() {
    let store = MemStore::default();
    let generator = CountingGenerator::with_output("Summary of the batch.");
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      generator.clone(),
    );
    let subject = group(&["101", "102"]);

    let first = service.get_or_generate(&subject, false).await.unwrap();
    assert_eq!(first.provenance, Provenance::Generated);

    let second = service.get_or_generate(&subject, false).await.unwrap();
    assert_eq!(second.provenance, Provenance::Cached);
    assert_eq!(second.text, first.text);
    assert_eq!(second.generated_at, first.generated_at);
    assert_eq!(store.append_count(), 1);
    assert_eq!(generator.call_count(), 1);
  }

  #[tokio::test]
  async fn force_regenerate_appends_a_strictly_newer_record() {
    let store = MemStore::default();
    let generator = CountingGenerator::with_output("Summary of the batch.");
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      generator.clone(),
    );
    let subject = group(&["101", "102"]);

    let first = service.get_or_generate(&subject, false).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let forced = service.get_or_generate(&subject, true).await.unwrap();

    assert_eq!(forced.provenance, Provenance::Generated);
    assert!(forced.generated_at > first.generated_at);
    assert_eq!(store.append_count(), 2);
    assert_eq!(generator.call_count(), 2);
  }

  #[tokio::test]
  async fn superset_coverage_serves_the_stored_summary() {
    let store = MemStore::default();
    store.seed(
      SummaryType::AllTickets,
      &["101", "102", "103"],
      "Covers all three tickets.",
    );
    let generator = CountingGenerator::with_output("fresh");
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      generator.clone(),
    );

    let outcome = service
      .get_or_generate(&group(&["101", "102"]), false)
      .await
      .unwrap();

    assert_eq!(outcome.provenance, Provenance::Cached);
    assert_eq!(outcome.text, "Covers all three tickets.");
    assert_eq!(generator.call_count(), 0);
  }

  #[tokio::test]
  async fn uncovered_id_is_a_cache_miss() {
    let store = MemStore::default();
    store.seed(
      SummaryType::AllTickets,
      &["101", "102"],
      "Covers two tickets.",
    );
    let generator = CountingGenerator::with_output("Covers three now.");
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      generator.clone(),
    );

    let outcome = service
      .get_or_generate(&group(&["101", "102", "103"]), false)
      .await
      .unwrap();

    assert_eq!(outcome.provenance, Provenance::Generated);
    assert_eq!(outcome.text, "Covers three now.");
    assert_eq!(store.append_count(), 1);
  }

  #[tokio::test]
  async fn metadata_reflects_the_request_even_on_cache_hits() {
    let store = MemStore::default();
    store.seed(
      SummaryType::AllTickets,
      &["101", "102", "103"],
      "Covers all three tickets.",
    );
    let service = SummaryService::new(
      store,
      three_ticket_source(),
      CountingGenerator::with_output("unused"),
    );

    let outcome = service
      .get_or_generate(&group(&["101", "102"]), false)
      .await
      .unwrap();

    assert_eq!(outcome.provenance, Provenance::Cached);
    assert_eq!(outcome.metadata, SummaryMetadata::Tickets {
      total_count:           2,
      open_tickets:          2,
      high_priority_tickets: 1,
      tickets_with_jira:     0,
    });
  }

  #[tokio::test]
  async fn all_missing_records_short_circuit_to_canned_text() {
    let store = MemStore::default();
    let generator = CountingGenerator::with_output("never");
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      generator.clone(),
    );

    let outcome = service
      .get_or_generate(&group(&["901", "902"]), false)
      .await
      .unwrap();

    assert_eq!(outcome.provenance, Provenance::NoRecords);
    assert_eq!(outcome.text, NO_RECORDS_TEXT);
    assert_eq!(outcome.metadata, SummaryMetadata::empty(RecordKind::Ticket));
    assert_eq!(generator.call_count(), 0);
    assert_eq!(store.append_count(), 0);
  }

  #[tokio::test]
  async fn missing_records_are_absent_not_errors() {
    let store = MemStore::default();
    let service = SummaryService::new(
      store,
      three_ticket_source(),
      CountingGenerator::with_output("Summary."),
    );

    let outcome = service
      .get_or_generate(&group(&["101", "901"]), false)
      .await
      .unwrap();

    assert_eq!(outcome.provenance, Provenance::Generated);
    let SummaryMetadata::Tickets { total_count, .. } = outcome.metadata else {
      panic!("expected ticket metadata");
    };
    assert_eq!(total_count, 1);
  }

  #[tokio::test]
  async fn store_read_failure_falls_open_to_regeneration() {
    let store = MemStore {
      fail_reads: true,
      ..MemStore::default()
    };
    let generator = CountingGenerator::with_output("Regenerated.");
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      generator.clone(),
    );

    let outcome = service
      .get_or_generate(&group(&["101"]), false)
      .await
      .unwrap();

    assert_eq!(outcome.provenance, Provenance::Generated);
    assert_eq!(generator.call_count(), 1);
    assert_eq!(store.append_count(), 1);
  }

  #[tokio::test]
  async fn store_write_failure_still_returns_the_text() {
    let store = MemStore {
      fail_writes: true,
      ..MemStore::default()
    };
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      CountingGenerator::with_output("Generated but unpersisted."),
    );

    let outcome = service
      .get_or_generate(&group(&["101"]), false)
      .await
      .unwrap();

    assert_eq!(outcome.provenance, Provenance::GeneratedUnpersisted);
    assert_eq!(outcome.text, "Generated but unpersisted.");
    assert_eq!(store.append_count(), 0);
  }

  #[tokio::test]
  async fn record_fetch_failure_surfaces_upstream_unavailable() {
    let source = MemSource {
      fail: true,
      ..MemSource::default()
    };
    let service = SummaryService::new(
      MemStore::default(),
      source,
      CountingGenerator::with_output("never"),
    );

    let err = service
      .get_or_generate(&group(&["101"]), false)
      .await
      .unwrap_err();
    let Error::UpstreamUnavailable { message, .. } = err else {
      panic!("expected UpstreamUnavailable, got {err:?}");
    };
    assert_eq!(message, "record backend offline");
  }

  #[tokio::test]
  async fn generator_failure_surfaces_upstream_unavailable() {
    let service = SummaryService::new(
      MemStore::default(),
      three_ticket_source(),
      FailingGenerator,
    );

    let err = service
      .get_or_generate(&group(&["101"]), false)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::UpstreamUnavailable { .. }));
  }

  #[tokio::test]
  async fn blank_generator_output_is_malformed_and_not_persisted() {
    let store = MemStore::default();
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      CountingGenerator::with_output("   \n  "),
    );

    let err = service
      .get_or_generate(&group(&["101"]), false)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::MalformedGeneratorResponse));
    assert_eq!(store.append_count(), 0);
  }

  // ── check / invalidate ────────────────────────────────────────────────

  #[tokio::test]
  async fn check_reports_validity_without_generating() {
    let store = MemStore::default();
    let generator = CountingGenerator::with_output("Stored.");
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      generator.clone(),
    );
    let subject = group(&["101", "102"]);

    let before = service.check(&subject).await;
    assert!(!before.has_valid_summary);
    assert_eq!(generator.call_count(), 0);

    service.get_or_generate(&subject, false).await.unwrap();

    let after = service.check(&subject).await;
    assert!(after.has_valid_summary);
    assert_eq!(after.text.as_deref(), Some("Stored."));
    assert!(after.generated_at.is_some());
  }

  #[tokio::test]
  async fn check_treats_read_failure_as_no_summary() {
    let store = MemStore {
      fail_reads: true,
      ..MemStore::default()
    };
    let service = SummaryService::new(
      store,
      three_ticket_source(),
      CountingGenerator::with_output("unused"),
    );

    let probe = service.check(&group(&["101"])).await;
    assert!(!probe.has_valid_summary);
  }

  #[tokio::test]
  async fn invalidate_latest_forces_the_next_request_to_regenerate() {
    let store = MemStore::default();
    let generator = CountingGenerator::with_output("Summary.");
    let service = SummaryService::new(
      store.clone(),
      three_ticket_source(),
      generator.clone(),
    );
    let subject = group(&["101", "102"]);

    service.get_or_generate(&subject, false).await.unwrap();
    let invalidation = service
      .invalidate_latest(SummaryType::AllTickets, Some("stale".to_owned()))
      .await
      .unwrap();
    assert!(invalidation.is_some());

    let outcome = service.get_or_generate(&subject, false).await.unwrap();
    assert_eq!(outcome.provenance, Provenance::Generated);
    assert_eq!(store.append_count(), 2);
  }

  #[tokio::test]
  async fn invalidate_latest_is_none_when_nothing_is_stored() {
    let service = SummaryService::new(
      MemStore::default(),
      three_ticket_source(),
      CountingGenerator::with_output("unused"),
    );

    let invalidation = service
      .invalidate_latest(SummaryType::AllTickets, None)
      .await
      .unwrap();
    assert!(invalidation.is_none());
  }

  // ── resolution / live metadata ────────────────────────────────────────

  #[tokio::test]
  async fn resolve_customer_group_collects_member_ids() {
    let service = SummaryService::new(
      MemStore::default(),
      three_ticket_source(),
      CountingGenerator::with_output("unused"),
    );

    let subject = service
      .resolve_customer_group(SummaryType::AllTickets, "cust-1")
      .await
      .unwrap();
    assert_eq!(subject.source_ids(), ["101", "102", "103"]);
  }

  #[tokio::test]
  async fn resolve_customer_group_with_no_members_is_empty_subject() {
    let service = SummaryService::new(
      MemStore::default(),
      three_ticket_source(),
      CountingGenerator::with_output("unused"),
    );

    let err = service
      .resolve_customer_group(SummaryType::AllTickets, "cust-9")
      .await
      .unwrap_err();
    assert!(matches!(err, Error::EmptySubject));
  }

  #[tokio::test]
  async fn live_metadata_counts_a_customer_portfolio() {
    let service = SummaryService::new(
      MemStore::default(),
      three_ticket_source(),
      CountingGenerator::with_output("unused"),
    );

    let metadata = service
      .live_metadata(RecordKind::Ticket, "cust-1")
      .await
      .unwrap();
    assert_eq!(metadata, SummaryMetadata::Tickets {
      total_count:           3,
      open_tickets:          2,
      high_priority_tickets: 2,
      tickets_with_jira:     0,
    });

    let empty = service
      .live_metadata(RecordKind::Ticket, "cust-9")
      .await
      .unwrap();
    assert_eq!(empty, SummaryMetadata::empty(RecordKind::Ticket));
  }
}
