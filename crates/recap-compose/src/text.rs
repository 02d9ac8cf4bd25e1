//! Section-based summary text for each record kind.
//!
//! The output is plain text: a lead sentence, blank-line-separated sections,
//! and `- ` bullet lines. Counts here use the same status and priority
//! buckets as the metadata aggregation, so the prose and the numbers a
//! caller receives alongside it never disagree.

use chrono::{DateTime, Utc};
use recap_core::{
  metadata::{
    HIGH_PRIORITIES, IN_PROGRESS_ISSUE_STATUSES, OPEN_TICKET_STATUSES,
    in_bucket,
  },
  record::{AccountRecord, IssueRecord, TicketRecord},
};

use crate::money::format_usd;

/// How many records the recent-activity section lists.
const RECENT_LIMIT: usize = 5;

/// Label used in distributions for records missing the grouped field.
const UNSPECIFIED: &str = "unspecified";

// ─── Shared helpers ──────────────────────────────────────────────────────────

/// Count values in first-seen order. Distinct spellings stay distinct; this
/// section reports what the source systems actually contain.
fn distribution<'a>(
  values: impl Iterator<Item = Option<&'a str>>,
) -> Vec<(String, u64)> {
  let mut counts: Vec<(String, u64)> = Vec::new();
  for value in values {
    let label = value.unwrap_or(UNSPECIFIED);
    match counts.iter_mut().find(|(seen, _)| seen.as_str() == label) {
      Some((_, count)) => *count += 1,
      None => counts.push((label.to_owned(), 1)),
    }
  }
  counts
}

fn most_recent<'a, T>(
  items: &[&'a T],
  updated_at: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<&'a T> {
  let mut sorted = items.to_vec();
  sorted.sort_by(|a, b| updated_at(b).cmp(&updated_at(a)));
  sorted.truncate(RECENT_LIMIT);
  sorted
}

fn push_distribution(
  lines: &mut Vec<String>,
  heading: &str,
  counts: &[(String, u64)],
  noun: &str,
) {
  lines.push(heading.to_owned());
  for (label, count) in counts {
    lines.push(format!("- {label}: {count} {noun}"));
  }
}

// ─── Tickets ─────────────────────────────────────────────────────────────────

pub(crate) fn compose_tickets(tickets: &[&TicketRecord]) -> String {
  let statuses = distribution(tickets.iter().map(|t| t.status.as_deref()));
  let priorities = distribution(tickets.iter().map(|t| t.priority.as_deref()));

  let open = tickets
    .iter()
    .filter(|t| in_bucket(t.status.as_deref(), OPEN_TICKET_STATUSES))
    .count();
  let high = tickets
    .iter()
    .filter(|t| in_bucket(t.priority.as_deref(), HIGH_PRIORITIES))
    .count();
  let with_jira = tickets.iter().filter(|t| t.linked_issue_count > 0).count();

  let mut lines = Vec::new();
  lines.push(format!(
    "This summary covers {} total tickets.",
    tickets.len()
  ));
  lines.push(String::new());
  push_distribution(&mut lines, "Status Distribution:", &statuses, "tickets");
  lines.push(String::new());
  push_distribution(
    &mut lines,
    "Priority Distribution:",
    &priorities,
    "tickets",
  );
  lines.push(String::new());
  lines.push("Key Metrics:".to_owned());
  lines.push(format!("- {open} open tickets"));
  lines.push(format!("- {high} high priority tickets"));
  lines.push(format!("- {with_jira} tickets with Jira issues"));
  lines.push(String::new());
  lines.push("Recent Activity:".to_owned());
  for ticket in most_recent(tickets, |t| t.updated_at) {
    lines.push(format!(
      "- Ticket #{} ({}): {}",
      ticket.id,
      ticket.status.as_deref().unwrap_or(UNSPECIFIED),
      ticket.subject
    ));
  }

  lines.join("\n")
}

// ─── Issues ──────────────────────────────────────────────────────────────────

pub(crate) fn compose_issues(issues: &[&IssueRecord]) -> String {
  let statuses = distribution(issues.iter().map(|i| i.status.as_deref()));
  let priorities = distribution(issues.iter().map(|i| i.priority.as_deref()));

  let in_progress = issues
    .iter()
    .filter(|i| in_bucket(i.status.as_deref(), IN_PROGRESS_ISSUE_STATUSES))
    .count();
  let high = issues
    .iter()
    .filter(|i| in_bucket(i.priority.as_deref(), HIGH_PRIORITIES))
    .count();
  let with_tickets =
    issues.iter().filter(|i| i.linked_ticket_id.is_some()).count();

  let mut lines = Vec::new();
  lines.push(format!("This summary covers {} total issues.", issues.len()));
  lines.push(String::new());
  push_distribution(&mut lines, "Status Distribution:", &statuses, "issues");
  lines.push(String::new());
  push_distribution(
    &mut lines,
    "Priority Distribution:",
    &priorities,
    "issues",
  );
  lines.push(String::new());
  lines.push("Key Metrics:".to_owned());
  lines.push(format!("- {in_progress} in progress issues"));
  lines.push(format!("- {high} high priority issues"));
  lines.push(format!("- {with_tickets} issues with linked tickets"));
  lines.push(String::new());
  lines.push("Recent Activity:".to_owned());
  for issue in most_recent(issues, |i| i.updated_at) {
    lines.push(format!(
      "- Issue {} ({}): {}",
      issue.id,
      issue.status.as_deref().unwrap_or(UNSPECIFIED),
      issue.summary
    ));
  }

  lines.join("\n")
}

// ─── Accounts ────────────────────────────────────────────────────────────────

pub(crate) fn compose_accounts(accounts: &[&AccountRecord]) -> String {
  let target = accounts.iter().filter(|a| a.is_target_account).count();
  let revenue: f64 =
    accounts.iter().filter_map(|a| a.annual_revenue).sum();
  let upsell: f64 =
    accounts.iter().filter_map(|a| a.target_upsell_value).sum();

  let mut lines = Vec::new();
  lines.push(format!(
    "This customer has {} Salesforce accounts, including {} target \
     accounts. The total potential upsell value is {}.",
    accounts.len(),
    target,
    format_usd(upsell)
  ));
  lines.push(String::new());
  lines.push("Key Metrics:".to_owned());
  lines.push(format!("- {target} target accounts"));
  lines.push(format!("- Total annual revenue: {}", format_usd(revenue)));
  lines.push(format!("- Potential upsell value: {}", format_usd(upsell)));

  lines.join("\n")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::{Duration, TimeZone, Utc};

  use super::*;

  fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
  }

  fn ticket(id: &str, status: Option<&str>, priority: &str) -> TicketRecord {
    TicketRecord {
      id:                 id.to_owned(),
      subject:            format!("Ticket {id}"),
      description:        None,
      status:             status.map(str::to_owned),
      priority:           Some(priority.to_owned()),
      requester:          None,
      assignee:           None,
      customer_id:        None,
      linked_issue_count: 0,
      updated_at:         base_time(),
    }
  }

  fn issue(id: &str, status: &str, linked: Option<&str>) -> IssueRecord {
    IssueRecord {
      id:               id.to_owned(),
      summary:          format!("Issue {id}"),
      description:      None,
      issue_type:       Some("Bug".to_owned()),
      status:           Some(status.to_owned()),
      priority:         Some("High".to_owned()),
      assignee:         None,
      reporter:         None,
      linked_ticket_id: linked.map(str::to_owned),
      customer_id:      None,
      updated_at:       base_time(),
    }
  }

  fn account(
    id: &str,
    revenue: Option<f64>,
    upsell: Option<f64>,
    target: bool,
  ) -> AccountRecord {
    AccountRecord {
      id:                  id.to_owned(),
      name:                format!("Account {id}"),
      industry:            None,
      annual_revenue:      revenue,
      employee_count:      None,
      is_target_account:   target,
      target_upsell_value: upsell,
      health_score:        None,
      customer_id:         None,
      updated_at:          base_time(),
    }
  }

  // ── Tickets ─────────────────────────────────────────────────────────────────

  #[test]
  fn ticket_summary_has_every_section() {
    let a = ticket("101", Some("open"), "high");
    let b = ticket("102", Some("open"), "medium");
    let c = ticket("103", Some("closed"), "high");
    let out = compose_tickets(&[&a, &b, &c]);

    assert!(out.starts_with("This summary covers 3 total tickets."), "got:\n{out}");
    assert!(out.contains("Status Distribution:\n- open: 2 tickets\n- closed: 1 tickets"), "got:\n{out}");
    assert!(out.contains("Priority Distribution:\n- high: 2 tickets\n- medium: 1 tickets"), "got:\n{out}");
    assert!(out.contains("- 2 open tickets"), "got:\n{out}");
    assert!(out.contains("- 2 high priority tickets"), "got:\n{out}");
    assert!(out.contains("- 0 tickets with Jira issues"), "got:\n{out}");
    assert!(out.contains("- Ticket #101 (open): Ticket 101"), "got:\n{out}");
  }

  #[test]
  fn key_metrics_use_case_insensitive_buckets() {
    let a = ticket("1", Some("Pending"), "URGENT");
    let out = compose_tickets(&[&a]);
    assert!(out.contains("- 1 open tickets"), "got:\n{out}");
    assert!(out.contains("- 1 high priority tickets"), "got:\n{out}");
  }

  #[test]
  fn missing_status_is_labelled_unspecified() {
    let a = ticket("1", None, "low");
    let out = compose_tickets(&[&a]);
    assert!(out.contains("- unspecified: 1 tickets"), "got:\n{out}");
    assert!(out.contains("- Ticket #1 (unspecified): Ticket 1"), "got:\n{out}");
  }

  #[test]
  fn recent_activity_lists_newest_first_capped_at_five() {
    let tickets: Vec<TicketRecord> = (1..=7)
      .map(|n| {
        let mut t = ticket(&n.to_string(), Some("open"), "low");
        t.updated_at = base_time() + Duration::minutes(n);
        t
      })
      .collect();
    let refs: Vec<&TicketRecord> = tickets.iter().collect();
    let out = compose_tickets(&refs);

    let activity: Vec<&str> = out
      .lines()
      .filter(|line| line.starts_with("- Ticket #"))
      .collect();
    assert_eq!(activity.len(), RECENT_LIMIT);
    assert!(activity[0].starts_with("- Ticket #7"), "got:\n{out}");
    assert!(activity[4].starts_with("- Ticket #3"), "got:\n{out}");
  }

  // ── Issues ──────────────────────────────────────────────────────────────────

  #[test]
  fn issue_summary_counts_progress_and_links() {
    let a = issue("PROJ-1", "In Progress", Some("101"));
    let b = issue("PROJ-2", "Done", None);
    let out = compose_issues(&[&a, &b]);

    assert!(out.starts_with("This summary covers 2 total issues."), "got:\n{out}");
    assert!(out.contains("- In Progress: 1 issues"), "got:\n{out}");
    assert!(out.contains("- 1 in progress issues"), "got:\n{out}");
    assert!(out.contains("- 2 high priority issues"), "got:\n{out}");
    assert!(out.contains("- 1 issues with linked tickets"), "got:\n{out}");
    assert!(out.contains("- Issue PROJ-1 (In Progress): Issue PROJ-1"), "got:\n{out}");
  }

  // ── Accounts ────────────────────────────────────────────────────────────────

  #[test]
  fn account_summary_matches_the_lead_template() {
    let a = account("A1", Some(1_000_000.0), Some(50_000.0), true);
    let b = account("A2", None, Some(25_000.0), false);
    let c = account("A3", Some(250_000.0), None, true);
    let out = compose_accounts(&[&a, &b, &c]);

    assert!(
      out.starts_with(
        "This customer has 3 Salesforce accounts, including 2 target \
         accounts. The total potential upsell value is $75,000.00."
      ),
      "got:\n{out}"
    );
    assert!(out.contains("- Total annual revenue: $1,250,000.00"), "got:\n{out}");
    assert!(out.contains("- Potential upsell value: $75,000.00"), "got:\n{out}");
  }
}
