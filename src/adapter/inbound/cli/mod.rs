//! CLI module graph and command dispatch.

pub mod command;
pub mod guest;
pub mod init;
pub mod output;
pub mod report;

use tracing::debug;

use crate::error::Result;
use crate::infrastructure::bootstrap;

use command::{Cli, Commands, GuestCommand};

/// Log level implied by `-q` and `-v` flags, if any.
fn level_override(quiet: bool, verbose: u8) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Load configuration, start logging, and run the selected command.
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = bootstrap::load_config(cli.config.as_deref())?;
    if let Some(level) = level_override(cli.quiet, cli.verbose) {
        config.logging.level = level.to_string();
    }
    config.init_logging();

    let service = bootstrap::build_guest_service(&config)?;
    debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Commands::Init => init::execute(&service, &config),
        Commands::Guest(command) => match command {
            GuestCommand::Add(args) => guest::add(&service, args),
            GuestCommand::Modify(args) => guest::modify(&service, args),
            GuestCommand::Delete { id } => guest::delete(&service, id),
            GuestCommand::List => guest::list(&service),
            GuestCommand::Show { id } => guest::show(&service, id),
        },
        Commands::Report(args) => report::execute(&service, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_override(true, 3), Some("error"));
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_override(false, 0), None);
        assert_eq!(level_override(false, 1), Some("info"));
        assert_eq!(level_override(false, 2), Some("debug"));
        assert_eq!(level_override(false, 5), Some("trace"));
    }
}
