use crate::core::import::ImportKind;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for presencia
#[derive(Parser)]
#[command(
    name = "presencia",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audit employee presence against ERP work orders: covered time, gaps, improductive time and overlaps",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostic logs (skipped rows, pairing decisions) to stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Inspect the local database
    Db {
        #[arg(long = "info", help = "Show row counts and imported date range")]
        info: bool,

        #[arg(long = "check", help = "Run the SQLite integrity check")]
        check: bool,
    },

    /// Import an ERP CSV extract
    Import {
        #[arg(long, value_enum, help = "Kind of extract")]
        kind: ImportKind,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Reconcile work orders against presence and print the audit
    Audit {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "YYYY, YYYY-MM, YYYY-MM-DD, ranges like YYYY-MM:YYYY-MM, or 'all' (default: current month)"
        )]
        range: Option<String>,

        #[arg(long, short, help = "Only audit this employee")]
        employee: Option<String>,

        #[arg(long = "details", help = "Print per-employee details below the table")]
        details: bool,
    },

    /// Export the audit of a period
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "YYYY, YYYY-MM, YYYY-MM-DD, ranges like YYYY-MM:YYYY-MM, or 'all' (default)"
        )]
        range: Option<String>,

        #[arg(long, short, help = "Only export this employee")]
        employee: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
