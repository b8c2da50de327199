use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use goaltracker_core::goals::GoalStatus;

#[derive(Parser, Debug)]
#[command(name = "goaltracker", version, about = "Track yearly goals and their progress")]
pub struct Cli {
    /// Database file, overrides GT_DB_PATH
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Keep everything in memory for this invocation
    #[arg(long, global = true, conflicts_with = "db")]
    pub in_memory: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a goal in the current year
    Create {
        /// Goal title
        title: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Category id, see `categories`
        #[arg(short, long)]
        category: Option<String>,
        /// Target date (YYYY-MM-DD)
        #[arg(short, long)]
        target_date: Option<NaiveDate>,
    },

    /// Edit the descriptive fields of a goal
    Edit {
        /// Goal ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, conflicts_with = "clear_target_date")]
        target_date: Option<NaiveDate>,
        /// Remove the target date
        #[arg(long)]
        clear_target_date: bool,
    },

    /// Delete a goal (its logged updates are kept)
    Delete {
        /// Goal ID
        id: String,
    },

    /// Show one current-year goal
    Show {
        /// Goal ID
        id: String,
    },

    /// List goals of a year
    List {
        /// Year, defaults to the current one
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long, value_enum)]
        status: Option<StatusFilter>,
    },

    /// Log progress on a goal
    Log {
        /// Goal ID
        id: String,
        /// New progress, clamped to 0..=100. Omit to keep the current value
        #[arg(short, long, allow_negative_numbers = true)]
        progress: Option<i64>,
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show the logged updates of a goal, most recent first
    History {
        /// Goal ID
        id: String,
    },

    /// Summarize a year
    Report {
        /// Year, defaults to the current one
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List years with data
    Years,

    /// Current-year overview
    Dashboard,

    /// List goal categories
    Categories,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Active,
    Achieved,
}

impl From<StatusFilter> for GoalStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Active => GoalStatus::Active,
            StatusFilter::Achieved => GoalStatus::Achieved,
        }
    }
}
