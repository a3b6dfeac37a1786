//! Handler for the `report` command.

use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::adapter::inbound::cli::command::ReportArgs;
use crate::adapter::inbound::cli::output;
use crate::application::guest::GuestService;
use crate::application::report::{
    AttendeeSummary, MenuTally, ReportGenerator, ReportKind, Tabulation,
};
use crate::error::Result;
use crate::port::outbound::store::GuestStore;

/// Render the named report, optionally writing its data to CSV.
///
/// # Errors
/// Returns [`crate::error::Error::InvalidReportKind`] for an unknown name.
pub fn execute<S: GuestStore>(service: &GuestService<S>, args: ReportArgs) -> Result<()> {
    let kind: ReportKind = args.kind.parse()?;

    if output::is_json() {
        return execute_json(service, kind, args.csv.as_deref());
    }

    let generator = ReportGenerator::new(service);
    output::raw(&generator.generate(kind)?);

    if let Some(path) = &args.csv {
        write_csv(path, &generator.tabulate(kind)?)?;
        output::success("Data exported to CSV successfully.");
        output::field("Path", path.display());
    }
    Ok(())
}

fn execute_json<S: GuestStore>(
    service: &GuestService<S>,
    kind: ReportKind,
    csv_path: Option<&Path>,
) -> Result<()> {
    let records = service.list()?;
    let table = kind.tabulate(&records);
    if let Some(path) = csv_path {
        write_csv(path, &table)?;
    }

    let summary = match kind {
        ReportKind::Attendee => {
            serde_json::to_value(AttendeeSummary::from_records(&records)?)?
        }
        ReportKind::Menu => serde_json::to_value(MenuTally::from_records(&records))?,
    };

    let report = kind.render(&records)?;

    output::json_output(json!({
        "command": "report",
        "kind": kind.name(),
        "report": report,
        "summary": summary,
        "table": table,
        "csv_path": csv_path.map(|path| path.display().to_string()),
    }));
    Ok(())
}

fn write_csv(path: &Path, table: &Tabulation) -> Result<()> {
    std::fs::write(path, table.to_csv())?;
    info!(path = %path.display(), rows = table.rows.len(), "report exported");
    Ok(())
}
