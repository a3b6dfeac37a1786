//! Read-only reports over the full guest list.
//!
//! Reports are pure functions of the record set; [`ReportGenerator`] loads
//! the records through the guest service and picks the renderer.

pub mod attendee;
pub mod export;
pub mod menu;

use std::fmt;
use std::str::FromStr;

use crate::application::guest::GuestService;
use crate::domain::guest::GuestRecord;
use crate::error::{Error, Result};
use crate::port::outbound::store::GuestStore;

pub use attendee::{attendee_report, attendee_tabulation, AttendeeSummary};
pub use export::Tabulation;
pub use menu::{menu_report, menu_tabulation, MenuTally};

/// Text both reports return for an empty guest list.
pub const NO_RECORDS: &str = "No guests found.";

/// The reports the registry can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Attendee,
    Menu,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Attendee, ReportKind::Menu];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attendee => "attendee",
            Self::Menu => "menu",
        }
    }

    /// Fixed-width text for the records.
    ///
    /// # Errors
    /// Returns [`Error::FeeOverflow`] when attendee fees cannot be summed.
    pub fn render(self, records: &[GuestRecord]) -> Result<String> {
        match self {
            Self::Attendee => attendee_report(records),
            Self::Menu => Ok(menu_report(records)),
        }
    }

    /// Header and rows for interchange export.
    #[must_use]
    pub fn tabulate(self, records: &[GuestRecord]) -> Tabulation {
        match self {
            Self::Attendee => attendee_tabulation(records),
            Self::Menu => menu_tabulation(records),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "attendee" | "attendees" | "attendees_list" => Ok(Self::Attendee),
            "menu" | "menu_choice" => Ok(Self::Menu),
            _ => Err(Error::InvalidReportKind(s.to_string())),
        }
    }
}

/// Renders reports from the current guest list.
pub struct ReportGenerator<'a, S> {
    guests: &'a GuestService<S>,
}

impl<'a, S: GuestStore> ReportGenerator<'a, S> {
    #[must_use]
    pub fn new(guests: &'a GuestService<S>) -> Self {
        Self { guests }
    }

    /// Load every guest and render the report text.
    ///
    /// # Errors
    /// Returns a connection or read error from the store, or
    /// [`Error::FeeOverflow`] when attendee fees cannot be summed.
    pub fn generate(&self, kind: ReportKind) -> Result<String> {
        let records = self.guests.list()?;
        kind.render(&records)
    }

    /// Like [`ReportGenerator::generate`] with the kind given by name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReportKind`] for an unknown name.
    pub fn generate_named(&self, kind: &str) -> Result<String> {
        self.generate(kind.parse()?)
    }

    /// Load every guest and tabulate them for export.
    ///
    /// # Errors
    /// Returns a connection or read error from the store.
    pub fn tabulate(&self, kind: ReportKind) -> Result<Tabulation> {
        let records = self.guests.list()?;
        Ok(kind.tabulate(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::guest::tests::MemoryStore;
    use crate::domain::guest::GuestForm;

    fn service() -> GuestService<MemoryStore> {
        let service = GuestService::new(MemoryStore::default());
        for (first, kind, menu) in [("A", "Guest", "BEEF"), ("B", "Member", "FISH")] {
            service
                .add(&GuestForm {
                    first_name: first.into(),
                    last_name: "Z".into(),
                    member_type: kind.into(),
                    amount_paid: "5".into(),
                    menu_item: menu.into(),
                })
                .unwrap();
        }
        service
    }

    #[test]
    fn kind_parses_known_names() {
        assert_eq!("attendee".parse::<ReportKind>().unwrap(), ReportKind::Attendee);
        assert_eq!("MENU".parse::<ReportKind>().unwrap(), ReportKind::Menu);
    }

    #[test]
    fn unknown_kind_has_literal_message() {
        let err = "seating".parse::<ReportKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidReportKind(ref kind) if kind == "seating"));
        assert_eq!(err.to_string(), "Invalid report type specified.");
    }

    #[test]
    fn generator_renders_chosen_report() {
        let service = service();
        let reports = ReportGenerator::new(&service);

        let menu = reports.generate(ReportKind::Menu).unwrap();
        assert!(menu.starts_with("** Menu Report **"));

        let attendees = reports.generate_named("attendee").unwrap();
        assert!(attendees.contains("Total Members: 1"));
        assert!(attendees.contains("Total Guests: 1"));
    }

    #[test]
    fn generator_rejects_unknown_name() {
        let service = service();
        let reports = ReportGenerator::new(&service);
        assert!(matches!(
            reports.generate_named("bogus"),
            Err(Error::InvalidReportKind(_))
        ));
    }

    #[test]
    fn empty_registry_reports_no_records() {
        let service = GuestService::new(MemoryStore::default());
        let reports = ReportGenerator::new(&service);
        for kind in ReportKind::ALL {
            assert_eq!(reports.generate(kind).unwrap(), NO_RECORDS);
        }
    }
}
