use std::process::ExitCode;

use clap::Parser;
use partyplanner::adapter::inbound::cli::command::Cli;
use partyplanner::adapter::inbound::cli::output::{self, OutputConfig};
use partyplanner::adapter::inbound::cli::execute;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose), cli.color);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
