use crate::export::ExportFormat;
use crate::utils::time::DisplayZone;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for roadguard
#[derive(Parser, Debug)]
#[command(
    name = "roadguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "RoadGuard terminal client: latest trip summary and trip history with drowsiness events",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (e.g. http://192.168.1.20:8000)
    #[arg(global = true, long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Zone used to display times (overrides the config file)
    #[arg(global = true, long = "zone", value_enum)]
    pub zone: Option<DisplayZone>,

    /// Shortcut for --zone utc
    #[arg(global = true, long = "utc", conflicts_with = "zone")]
    pub utc: bool,

    /// Disable ANSI colours
    #[arg(global = true, long = "plain")]
    pub plain: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file read or write)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the latest trip summary
    Latest,

    /// Show the trip history
    History {
        /// Open the detail view of the trip with this id
        #[arg(long = "trip", value_name = "ID", conflicts_with = "interactive")]
        trip: Option<i64>,

        /// Browse the list: type a number to open a trip, `b` to go back, `q` to quit
        #[arg(long = "interactive", short = 'i')]
        interactive: bool,
    },

    /// Export the trip history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// CSV only: one row per event instead of one per trip
        #[arg(long, short = 'e')]
        events: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl Commands {
    /// Commands that must still run when the config file is unusable.
    pub fn repairs_config(&self) -> bool {
        matches!(self, Commands::Init | Commands::Config { .. })
    }
}

impl Cli {
    pub fn display_zone(&self) -> Option<DisplayZone> {
        if self.utc {
            Some(DisplayZone::Utc)
        } else {
            self.zone
        }
    }
}
