//! Attendee list report.

use rust_decimal::Decimal;
use serde::Serialize;

use super::export::Tabulation;
use super::NO_RECORDS;
use crate::domain::guest::GuestRecord;
use crate::domain::member::MemberType;
use crate::domain::money::{format_currency, Amount};
use crate::error::{Error, Result};

const RULE_WIDTH: usize = 76;

/// Column labels of the exported attendee table.
pub const ATTENDEE_HEADERS: [&str; 6] = [
    "Guest ID",
    "First Name",
    "Last Name",
    "Member Type",
    "Amount Paid",
    "Menu Item",
];

/// Count of attendees sharing one member type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberTypeCount {
    pub member_type: String,
    pub count: usize,
}

/// Summary figures printed under the attendee table.
///
/// `total_staff` counts Master of Ceremonies, Keynote Speaker, Usher and
/// Kitchen Staff. Waiters and unrecognised types fall in no bucket but
/// still appear in `by_member_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendeeSummary {
    pub total_members: usize,
    pub total_guests: usize,
    pub total_staff: usize,
    pub total_fees: Amount,
    /// Per-label counts in order of first appearance.
    pub by_member_type: Vec<MemberTypeCount>,
}

impl AttendeeSummary {
    /// # Errors
    /// Returns [`Error::FeeOverflow`] when the fees cannot be summed.
    pub fn from_records(records: &[GuestRecord]) -> Result<Self> {
        let mut summary = Self {
            total_members: 0,
            total_guests: 0,
            total_staff: 0,
            total_fees: Decimal::ZERO,
            by_member_type: Vec::new(),
        };

        for record in records {
            match record.member_type.known() {
                Some(MemberType::Guest) => summary.total_guests += 1,
                Some(MemberType::Member) => summary.total_members += 1,
                Some(kind) if kind.is_staff() => summary.total_staff += 1,
                _ => {}
            }
            summary.total_fees = summary
                .total_fees
                .checked_add(record.amount_paid)
                .ok_or(Error::FeeOverflow)?;

            let label = record.member_type.to_string();
            match summary
                .by_member_type
                .iter_mut()
                .find(|entry| entry.member_type == label)
            {
                Some(entry) => entry.count += 1,
                None => summary.by_member_type.push(MemberTypeCount {
                    member_type: label,
                    count: 1,
                }),
            }
        }

        Ok(summary)
    }
}

/// Render the attendee list with its summary lines.
///
/// # Errors
/// Returns [`Error::FeeOverflow`] when the fees cannot be summed.
pub fn attendee_report(records: &[GuestRecord]) -> Result<String> {
    if records.is_empty() {
        return Ok(NO_RECORDS.to_string());
    }

    let rule = "-".repeat(RULE_WIDTH);
    let mut report = vec![
        "** Attendee List **".to_string(),
        rule.clone(),
        row("Name", "Type", "Menu Choice", "Fee Paid"),
        rule.clone(),
    ];

    for record in records {
        report.push(row(
            &record.full_name(),
            &record.member_type.to_string(),
            &record.menu_item.to_string(),
            &format_currency(record.amount_paid),
        ));
    }

    let summary = AttendeeSummary::from_records(records)?;
    report.push(rule);
    report.push(format!("Total Members: {}", summary.total_members));
    report.push(format!("Total Guests: {}", summary.total_guests));
    report.push(format!("Total Staff: {}", summary.total_staff));
    report.push(format!(
        "Total Fees Paid: {}",
        format_currency(summary.total_fees)
    ));

    Ok(report.join("\n"))
}

fn row(name: &str, kind: &str, menu: &str, fee: &str) -> String {
    format!("| {name:<24} | {kind:<21} | {menu:<11} | {fee:<8} |")
}

/// Every record as an export row.
#[must_use]
pub fn attendee_tabulation(records: &[GuestRecord]) -> Tabulation {
    let rows = records
        .iter()
        .map(|record| {
            vec![
                record.id.to_string(),
                record.first_name.clone(),
                record.last_name.clone(),
                record.member_type.to_string(),
                format!("{:.2}", record.amount_paid),
                record.menu_item.to_string(),
            ]
        })
        .collect();
    Tabulation::new(&ATTENDEE_HEADERS, rows)
}
