//! Subjects: what a summary request targets.
//!
//! A subject pairs a summary type with the concrete set of source record IDs
//! the summary must cover. Group subjects are resolved to their full member
//! set before they reach the orchestrator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, record::RecordKind};

/// Whether a summary type targets one record or a named aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
  Individual,
  Group,
}

/// Discriminator for a summary's subject, as persisted in the store and used
/// in API paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryType {
  ZendeskTicket,
  JiraIssue,
  SalesforceAccount,
  AllTickets,
  AllIssues,
  AllAccounts,
}

impl SummaryType {
  /// The discriminant string stored in the `summary_type` column.
  /// Must match the `rename_all = "snake_case"` serde tags above.
  pub fn discriminant(&self) -> &'static str {
    match self {
      Self::ZendeskTicket => "zendesk_ticket",
      Self::JiraIssue => "jira_issue",
      Self::SalesforceAccount => "salesforce_account",
      Self::AllTickets => "all_tickets",
      Self::AllIssues => "all_issues",
      Self::AllAccounts => "all_accounts",
    }
  }

  pub fn kind(&self) -> SubjectKind {
    match self {
      Self::ZendeskTicket | Self::JiraIssue | Self::SalesforceAccount => {
        SubjectKind::Individual
      }
      Self::AllTickets | Self::AllIssues | Self::AllAccounts => {
        SubjectKind::Group
      }
    }
  }

  /// The kind of source record this summary type covers.
  pub fn record_kind(&self) -> RecordKind {
    match self {
      Self::ZendeskTicket | Self::AllTickets => RecordKind::Ticket,
      Self::JiraIssue | Self::AllIssues => RecordKind::Issue,
      Self::SalesforceAccount | Self::AllAccounts => RecordKind::Account,
    }
  }

  /// Parse a discriminant string of either kind.
  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "zendesk_ticket" => Ok(Self::ZendeskTicket),
      "jira_issue" => Ok(Self::JiraIssue),
      "salesforce_account" => Ok(Self::SalesforceAccount),
      "all_tickets" => Ok(Self::AllTickets),
      "all_issues" => Ok(Self::AllIssues),
      "all_accounts" => Ok(Self::AllAccounts),
      other => Err(Error::UnknownSummaryType(other.to_owned())),
    }
  }

  /// Parse a discriminant string, accepting only individual types.
  pub fn parse_individual(s: &str) -> Result<Self> {
    let ty = Self::parse(s)?;
    match ty.kind() {
      SubjectKind::Individual => Ok(ty),
      SubjectKind::Group => Err(Error::UnknownSummaryType(s.to_owned())),
    }
  }

  /// Parse a discriminant string, accepting only group types.
  pub fn parse_group(s: &str) -> Result<Self> {
    let ty = Self::parse(s)?;
    match ty.kind() {
      SubjectKind::Group => Ok(ty),
      SubjectKind::Individual => Err(Error::UnknownSummaryType(s.to_owned())),
    }
  }
}

impl std::fmt::Display for SummaryType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.discriminant())
  }
}

/// A fully resolved summary request target.
///
/// `source_ids` is never empty and never contains duplicates; first
/// occurrence order is preserved so reporting stays deterministic. The fields
/// are private to keep those invariants with the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
  summary_type: SummaryType,
  source_ids:   Vec<String>,
}

impl Subject {
  /// A subject covering a single record.
  pub fn individual(
    summary_type: SummaryType,
    source_id: impl Into<String>,
  ) -> Self {
    Self {
      summary_type,
      source_ids: vec![source_id.into()],
    }
  }

  /// A group subject covering the given member records, de-duplicated with
  /// first-occurrence order preserved.
  ///
  /// Fails with [`Error::EmptySubject`] when the member set is empty.
  pub fn group(
    summary_type: SummaryType,
    source_ids: impl IntoIterator<Item = String>,
  ) -> Result<Self> {
    let mut seen = HashSet::new();
    let source_ids: Vec<String> = source_ids
      .into_iter()
      .filter(|id| seen.insert(id.clone()))
      .collect();

    if source_ids.is_empty() {
      return Err(Error::EmptySubject);
    }

    Ok(Self {
      summary_type,
      source_ids,
    })
  }

  pub fn summary_type(&self) -> SummaryType { self.summary_type }

  pub fn record_kind(&self) -> RecordKind { self.summary_type.record_kind() }

  pub fn source_ids(&self) -> &[String] { &self.source_ids }
}
