use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quarterly", version, about = "Terminal quarter planner with a week grid")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a plan in the current directory
    Init {
        /// Optional plan name
        #[arg(long)]
        name: Option<String>,
    },
    /// List tasks in the current plan
    List,
    /// Add a new task
    Add {
        /// Task name
        name: String,
        /// Start date in YYYY-MM-DD format
        start: String,
        /// End date in YYYY-MM-DD format (must be after the start)
        end: String,
    },
    /// Edit an existing task
    Edit {
        /// Name of the task to edit
        name: String,
        /// New task name
        #[arg(long)]
        rename: Option<String>,
        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// New end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
    /// Remove a task
    Remove {
        /// Name of the task to remove
        name: String,
    },
    /// Print the week grid for a quarter
    Grid {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Quarter to show, 1-4 (defaults to the current quarter)
        #[arg(long)]
        quarter: Option<u8>,
    },
    /// Launch the interactive TUI
    Tui,
}
