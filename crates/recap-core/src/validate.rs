//! Coverage validation: whether a stored summary satisfies a request.

use crate::{subject::Subject, summary::SummaryRecord};

/// True iff `candidate` may be served for `subject`: the summary type matches
/// and every requested source ID is present in the candidate's coverage.
///
/// Coverage may be a strict superset of the request; a summary computed for a
/// larger historical membership still serves a shrunken group.
pub fn covers(candidate: &SummaryRecord, subject: &Subject) -> bool {
  if candidate.summary_type != subject.summary_type() {
    return false;
  }
  if subject.source_ids().is_empty() {
    return false;
  }
  subject
    .source_ids()
    .iter()
    .all(|id| candidate.covered_ids.contains(id))
}
