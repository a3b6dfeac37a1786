//! Command-line interface definitions.
//!
//! Defines the CLI structure for the partyplanner registry using `clap`.
//! Subcommands cover table setup, guest maintenance, and reports.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Event guest registry with attendee and menu reports
#[derive(Parser, Debug)]
#[command(name = "partyplanner")]
#[command(version, about)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.partyplanner/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the partyplanner CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the guest table if it does not exist
    Init,

    /// Manage guests
    #[command(subcommand)]
    Guest(GuestCommand),

    /// Render a report over every guest
    Report(ReportArgs),
}

/// Subcommands for `partyplanner guest`.
#[derive(Subcommand, Debug)]
pub enum GuestCommand {
    /// Register a new guest
    Add(AddArgs),
    /// Change fields of an existing guest
    Modify(ModifyArgs),
    /// Remove a guest
    Delete {
        /// Guest ID to remove
        id: i64,
    },
    /// List every guest
    List,
    /// Show one guest
    Show {
        /// Guest ID to show
        id: i64,
    },
}

/// Arguments for `partyplanner guest add`.
///
/// Values are taken as typed and validated together before anything is
/// stored. With `--interactive`, missing values are prompted for.
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Member type, e.g. "Member" or "Keynote Speaker"
    #[arg(long)]
    pub member_type: Option<String>,

    /// Amount paid; empty means nothing paid
    #[arg(long)]
    pub amount_paid: Option<String>,

    /// Menu item, e.g. "CHICKEN"
    #[arg(long)]
    pub menu_item: Option<String>,

    /// Prompt for values that were not given
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for `partyplanner guest modify`.
#[derive(Args, Debug)]
pub struct ModifyArgs {
    /// Guest ID to change
    pub id: i64,

    /// Field to change: first-name, last-name, member-type, amount-paid, menu-item
    #[arg(short, long, requires = "value")]
    pub field: Option<String>,

    /// New value for the field
    #[arg(long, requires = "field")]
    pub value: Option<String>,

    /// Pick the field and value from prompts
    #[arg(short, long, conflicts_with_all = ["field", "value"])]
    pub interactive: bool,
}

/// Arguments for `partyplanner report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report to render: attendee or menu
    pub kind: String,

    /// Also write the report data to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_command_factory_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "partyplanner");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn test_color_choice_default_is_auto() {
        assert!(matches!(ColorChoice::default(), ColorChoice::Auto));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["partyplanner", "guest", "list", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Guest(GuestCommand::List)));
    }

    #[test]
    fn test_guest_add_parses_fields() {
        let cli = Cli::try_parse_from([
            "partyplanner",
            "guest",
            "add",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--member-type",
            "Keynote Speaker",
            "--menu-item",
            "FISH",
        ])
        .unwrap();
        let Commands::Guest(GuestCommand::Add(args)) = cli.command else {
            panic!("expected guest add");
        };
        assert_eq!(args.first_name.as_deref(), Some("Ada"));
        assert_eq!(args.member_type.as_deref(), Some("Keynote Speaker"));
        assert_eq!(args.amount_paid, None);
        assert!(!args.interactive);
    }

    #[test]
    fn test_modify_requires_value_with_field() {
        let result =
            Cli::try_parse_from(["partyplanner", "guest", "modify", "3", "--field", "menu-item"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_modify_interactive_conflicts_with_field() {
        let result = Cli::try_parse_from([
            "partyplanner",
            "guest",
            "modify",
            "3",
            "-i",
            "--field",
            "menu-item",
            "--value",
            "BEEF",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_with_csv_path() {
        let cli =
            Cli::try_parse_from(["partyplanner", "report", "menu", "--csv", "menu.csv"]).unwrap();
        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.kind, "menu");
        assert_eq!(args.csv, Some(PathBuf::from("menu.csv")));
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::try_parse_from(["partyplanner", "init", "--config", "/tmp/pp.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pp.toml")));
    }
}
