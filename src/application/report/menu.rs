//! Menu item count report.

use serde::Serialize;

use super::export::Tabulation;
use super::NO_RECORDS;
use crate::domain::guest::GuestRecord;
use crate::domain::menu::MenuItem;

const RULE_WIDTH: usize = 14;

/// Column labels of the exported menu table.
pub const MENU_HEADERS: [&str; 2] = ["Menu Item", "Count"];

/// How many attendees chose each known meal.
///
/// Records whose meal is not on the menu are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuTally {
    counts: Vec<(MenuItem, usize)>,
}

impl MenuTally {
    #[must_use]
    pub fn from_records(records: &[GuestRecord]) -> Self {
        let mut counts: Vec<(MenuItem, usize)> =
            MenuItem::ALL.iter().map(|item| (*item, 0)).collect();
        for item in records.iter().filter_map(|record| record.menu_item.known()) {
            if let Some(entry) = counts.iter_mut().find(|(known, _)| *known == item) {
                entry.1 += 1;
            }
        }
        Self { counts }
    }

    #[must_use]
    pub fn count(&self, item: MenuItem) -> usize {
        self.counts
            .iter()
            .find(|(known, _)| *known == item)
            .map_or(0, |(_, count)| *count)
    }

    /// Counts for every known meal, in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (MenuItem, usize)> + '_ {
        self.counts.iter().copied()
    }
}

/// Render the per-meal counts.
#[must_use]
pub fn menu_report(records: &[GuestRecord]) -> String {
    if records.is_empty() {
        return NO_RECORDS.to_string();
    }

    let rule = "-".repeat(RULE_WIDTH);
    let mut report = vec!["** Menu Report **".to_string(), rule.clone()];
    for (item, count) in MenuTally::from_records(records).iter() {
        report.push(format!("| {:<10} | {:<5} |", item.label(), count));
    }
    report.push(rule);

    report.join("\n")
}

/// One export row per known meal.
#[must_use]
pub fn menu_tabulation(records: &[GuestRecord]) -> Tabulation {
    let rows = MenuTally::from_records(records)
        .iter()
        .map(|(item, count)| vec![item.label().to_string(), count.to_string()])
        .collect();
    Tabulation::new(&MENU_HEADERS, rows)
}
