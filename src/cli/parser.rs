use clap::{Parser, Subcommand};

/// Command-line interface definition for PontoCerto
/// Punch-clock CLI: track working hours, breaks and overtime with SQLite
#[derive(Parser)]
#[command(
    name = "pontocerto",
    version = env!("CARGO_PKG_VERSION"),
    about = "A punch-clock CLI: record IN/OUT punches, compute worked hours, overtime and monthly balance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, info, recalculation)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "recalc", help = "Recompute stored daily metrics with the current settings")]
        recalc: bool,

        #[arg(long = "period", requires = "recalc", help = "Limit --recalc to one month (YYYY-MM)")]
        period: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Punch now: IN if the day is closed or on break, OUT otherwise
    Punch {
        #[arg(long = "end", help = "Force an OUT punch to close the workday")]
        end: bool,
    },

    /// Show today's (or a given day's) clock status and punches
    Status {
        #[arg(long = "date", help = "Day to show (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Add a punch at a given time
    Add {
        /// Day of the punch (YYYY-MM-DD)
        date: String,

        /// Punch time (HH:MM)
        time: String,
    },

    /// Change the time of an existing punch
    Edit {
        /// Day of the punch (YYYY-MM-DD)
        date: String,

        /// Position of the punch in the day's list (1-based, see `status`)
        position: usize,

        /// New time (HH:MM)
        time: String,
    },

    /// Delete a punch
    Del {
        /// Day of the punch (YYYY-MM-DD)
        date: String,

        /// Position of the punch in the day's list (1-based, see `status`)
        position: usize,
    },

    /// Monthly report: totals, balance, daily chart
    Report {
        /// Month to report (YYYY-MM, default current month)
        month: Option<String>,

        #[arg(
            long = "shift",
            allow_hyphen_values = true,
            help = "Move the month by N (e.g. -1 for the previous month)"
        )]
        shift: Option<i32>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Show or adjust the time bank
    Bank {
        #[arg(
            long = "add",
            allow_hyphen_values = true,
            requires = "reason",
            help = "Hours to add, signed (e.g. 1.5, -01:30)"
        )]
        add: Option<String>,

        #[arg(long = "reason", help = "Reason for the adjustment")]
        reason: Option<String>,

        #[arg(long = "date", help = "Date of the adjustment (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Show or change work-day settings
    Settings {
        #[arg(
            long = "work-day",
            allow_hyphen_values = true,
            help = "Expected work hours per day (HH:MM or decimal)"
        )]
        work_day: Option<String>,

        #[arg(
            long = "break",
            allow_hyphen_values = true,
            help = "Standard break length (HH:MM or decimal)"
        )]
        break_hours: Option<String>,
    },
}
