use crate::export::ExportFormat;
use crate::models::task_status::TaskDateField;
use clap::{Parser, Subcommand};

/// Command-line interface definition for FocusFlow
/// Study activity tracker: check-ins, tasks and focus sessions on SQLite
#[derive(Parser)]
#[command(
    name = "focusflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track study check-ins, tasks and focus time, and report streaks and trends",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of `default_user` from the config
    #[arg(global = true, long = "user")]
    pub user: Option<i64>,

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

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Check in for a day (today by default)
    Checkin {
        #[arg(long, help = "Day to check in (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Create tasks or change their status
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Record focus sessions
    Focus {
        #[command(subcommand)]
        action: FocusAction,
    },

    /// Current and longest check-in streak
    Streak {
        #[arg(long, help = "Reference day (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Focus minutes and session counts over a period
    #[command(name = "focus-total")]
    FocusTotal {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD or A:B (default: current week so far)"
        )]
        range: Option<String>,
    },

    /// Task completion rate over a period
    Rate {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD or A:B (default: current week so far)"
        )]
        range: Option<String>,

        #[arg(long = "by", value_enum, help = "Task date bounding the population")]
        by: Option<TaskDateField>,
    },

    /// Daily trend table
    Trend {
        #[arg(long, help = "Number of days (default: trend_days from config)")]
        days: Option<i64>,

        #[arg(long, help = "Last day of the trend (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "checked-in", help = "Only show days with a check-in")]
        checked_in: bool,
    },

    /// Weekly report
    Report {
        #[arg(long, help = "Last day of the report (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Dashboard summary
    Dashboard {
        #[arg(long, help = "Reference day (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Export the daily trend
    Export {
        #[arg(long, value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(
            long,
            conflicts_with = "range",
            help = "Last N days up to today (default: trend_days)"
        )]
        days: Option<i64>,

        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or A:B")]
        range: Option<String>,

        #[arg(long, help = "Overwrite the file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user
    Add {
        #[arg(long)]
        first: String,

        #[arg(long, default_value = "")]
        last: String,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task (status: pending)
    Add {
        title: String,

        #[arg(long)]
        course: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, help = "Due date (YYYY-MM-DD)")]
        due: Option<String>,
    },

    /// Change the status of a task
    Status {
        id: i64,

        /// pending, in_progress or completed
        status: String,

        #[arg(long, help = "When the change happened (YYYY-MM-DD HH:MM[:SS], default now)")]
        at: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum FocusAction {
    /// Record a focus session
    Log {
        #[arg(long)]
        minutes: i64,

        #[arg(long, help = "Task worked on")]
        task: Option<i64>,

        #[arg(long, help = "Start time (YYYY-MM-DD HH:MM[:SS], default now minus duration)")]
        start: Option<String>,

        #[arg(long, help = "Leave the session open (no end time)")]
        open: bool,
    },
}
