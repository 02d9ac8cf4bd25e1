//! Demo dataset for local development.
//!
//! Loaded by `server --seed`. Two customers with enough spread across
//! statuses, priorities, and cross-system links to exercise every summary
//! type and the stats endpoint.

use chrono::{DateTime, TimeZone, Utc};
use recap_core::record::{AccountRecord, IssueRecord, TicketRecord};
use recap_store_sqlite::SqliteStore;

/// Insert the demo records. Re-running against an already seeded store fails
/// on the primary keys, so seed a fresh database.
pub async fn load(store: &SqliteStore) -> recap_store_sqlite::Result<()> {
  for ticket in demo_tickets() {
    store.insert_ticket(&ticket).await?;
  }
  for issue in demo_issues() {
    store.insert_issue(&issue).await?;
  }
  for account in demo_accounts() {
    store.insert_account(&account).await?;
  }
  Ok(())
}

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2025, 2, day, hour, min, 0).unwrap()
}

fn demo_tickets() -> Vec<TicketRecord> {
  vec![
    TicketRecord {
      id:                 "1001".to_owned(),
      subject:            "Analytics dashboard access error".to_owned(),
      description:        Some(
        "Users in the EU org see a 403 when opening the analytics dashboard."
          .to_owned(),
      ),
      status:             Some("open".to_owned()),
      priority:           Some("high".to_owned()),
      requester:          Some("mara.voss@example.com".to_owned()),
      assignee:           Some("support.tier2@example.com".to_owned()),
      customer_id:        Some("1".to_owned()),
      linked_issue_count: 1,
      updated_at:         at(12, 14, 5),
    },
    TicketRecord {
      id:                 "1002".to_owned(),
      subject:            "Exported CSV has wrong delimiter".to_owned(),
      description:        None,
      status:             Some("solved".to_owned()),
      priority:           Some("low".to_owned()),
      requester:          Some("mara.voss@example.com".to_owned()),
      assignee:           Some("support.tier1@example.com".to_owned()),
      customer_id:        Some("1".to_owned()),
      linked_issue_count: 0,
      updated_at:         at(9, 10, 40),
    },
    TicketRecord {
      id:                 "1003".to_owned(),
      subject:            "DB writer timeout in staging".to_owned(),
      description:        Some(
        "Bulk imports stall after ~2 minutes and roll back.".to_owned(),
      ),
      status:             Some("pending".to_owned()),
      priority:           Some("urgent".to_owned()),
      requester:          Some("ops@meridian.example.com".to_owned()),
      assignee:           Some("support.tier2@example.com".to_owned()),
      customer_id:        Some("2".to_owned()),
      linked_issue_count: 1,
      updated_at:         at(14, 8, 55),
    },
    TicketRecord {
      id:                 "1004".to_owned(),
      subject:            "Request: SSO group mapping".to_owned(),
      description:        None,
      status:             Some("new".to_owned()),
      priority:           Some("medium".to_owned()),
      requester:          Some("it@meridian.example.com".to_owned()),
      assignee:           None,
      customer_id:        Some("2".to_owned()),
      linked_issue_count: 0,
      updated_at:         at(15, 16, 20),
    },
    TicketRecord {
      id:                 "1005".to_owned(),
      subject:            "Billing module calculation error".to_owned(),
      description:        Some(
        "Invoice totals off by the prorated seat amount.".to_owned(),
      ),
      status:             Some("closed".to_owned()),
      priority:           Some("high".to_owned()),
      requester:          Some("finance@meridian.example.com".to_owned()),
      assignee:           Some("support.tier1@example.com".to_owned()),
      customer_id:        Some("2".to_owned()),
      linked_issue_count: 0,
      updated_at:         at(6, 11, 0),
    },
  ]
}

fn demo_issues() -> Vec<IssueRecord> {
  vec![
    IssueRecord {
      id:               "DEV-101".to_owned(),
      summary:          "Analytics dashboard access error".to_owned(),
      description:      Some(
        "Role check rejects EU org members after the permissions migration."
          .to_owned(),
      ),
      issue_type:       Some("Bug".to_owned()),
      status:           Some("In Progress".to_owned()),
      priority:         Some("High".to_owned()),
      assignee:         Some("dana".to_owned()),
      reporter:         Some("support-bridge".to_owned()),
      linked_ticket_id: Some("1001".to_owned()),
      customer_id:      Some("1".to_owned()),
      updated_at:       at(12, 15, 30),
    },
    IssueRecord {
      id:               "DEV-102".to_owned(),
      summary:          "DB writer timeout in staging".to_owned(),
      description:      Some(
        "Writer pool exhausts connections under bulk import load.".to_owned(),
      ),
      issue_type:       Some("Bug".to_owned()),
      status:           Some("Open".to_owned()),
      priority:         Some("High".to_owned()),
      assignee:         Some("priya".to_owned()),
      reporter:         Some("support-bridge".to_owned()),
      linked_ticket_id: Some("1003".to_owned()),
      customer_id:      Some("2".to_owned()),
      updated_at:       at(14, 9, 45),
    },
    IssueRecord {
      id:               "DEV-104".to_owned(),
      summary:          "Investigation: DB performance bottleneck".to_owned(),
      description:      None,
      issue_type:       Some("Task".to_owned()),
      status:           Some("Open".to_owned()),
      priority:         Some("Medium".to_owned()),
      assignee:         None,
      reporter:         Some("priya".to_owned()),
      linked_ticket_id: Some("1003".to_owned()),
      customer_id:      Some("2".to_owned()),
      updated_at:       at(14, 13, 10),
    },
    IssueRecord {
      id:               "DEV-106".to_owned(),
      summary:          "Billing module calculation error".to_owned(),
      description:      Some(
        "Proration rounds per line item instead of per invoice.".to_owned(),
      ),
      issue_type:       Some("Bug".to_owned()),
      status:           Some("In Development".to_owned()),
      priority:         Some("Medium".to_owned()),
      assignee:         Some("theo".to_owned()),
      reporter:         Some("finance-liaison".to_owned()),
      linked_ticket_id: None,
      customer_id:      Some("2".to_owned()),
      updated_at:       at(7, 10, 25),
    },
  ]
}

fn demo_accounts() -> Vec<AccountRecord> {
  vec![
    AccountRecord {
      id:                  "001A000001L0F45".to_owned(),
      name:                "Voss Analytics GmbH".to_owned(),
      industry:            Some("Software".to_owned()),
      annual_revenue:      Some(5_200_000.0),
      employee_count:      Some(240),
      is_target_account:   true,
      target_upsell_value: Some(150_000.0),
      health_score:        Some(82.0),
      customer_id:         Some("1".to_owned()),
      updated_at:          at(11, 12, 0),
    },
    AccountRecord {
      id:                  "001A000001L0F46".to_owned(),
      name:                "Meridian Logistics".to_owned(),
      industry:            Some("Transportation".to_owned()),
      annual_revenue:      Some(1_800_000.0),
      employee_count:      Some(95),
      is_target_account:   false,
      target_upsell_value: None,
      health_score:        Some(67.5),
      customer_id:         Some("2".to_owned()),
      updated_at:          at(13, 9, 15),
    },
    AccountRecord {
      id:                  "001A000001L0F47".to_owned(),
      name:                "Meridian Freight Services".to_owned(),
      industry:            Some("Transportation".to_owned()),
      annual_revenue:      Some(750_000.0),
      employee_count:      Some(38),
      is_target_account:   true,
      target_upsell_value: Some(40_000.0),
      health_score:        Some(74.0),
      customer_id:         Some("2".to_owned()),
      updated_at:          at(13, 9, 20),
    },
  ]
}
