use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "A kanban task board kept in a local directory")]
#[command(long_about = "
taskboard keeps a kanban board (columns, tasks and users) as JSON files in a
storage directory, `.taskboard` by default. Every command prints JSON.

Configuration is read from taskboard.toml / taskboard.yaml / taskboard.json in
the working directory (or --config), then from TASKBOARD_* environment
variables.

Example usage:
  taskboard task list                                 # Whole board, by column
  taskboard task add --column column-1 'Write docs'   # New task at the bottom
  taskboard task move task-1 --column column-3        # Move to the end of a column
  taskboard task move task-1 --column column-1 --index 0
  taskboard stats week                                # This week's progress
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of discovery
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage directory, overriding configuration
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Name recorded as the actor of changes
    #[arg(long, global = true)]
    pub actor: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, edit, move and inspect tasks
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Create, rename and inspect columns
    Column {
        #[command(subcommand)]
        action: ColumnCommands,
    },
    /// Inspect users
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Board analytics
    Stats {
        #[command(subcommand)]
        action: StatsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a task at the bottom of a column
    Add {
        /// Column to add the task to
        #[arg(long)]
        column: String,
        /// Task title
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// User to assign
        #[arg(long)]
        assign: Option<String>,
    },
    /// Edit a task's title or description
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Assign a task, or clear its assignee when no user is given
    Assign {
        id: String,
        user: Option<String>,
    },
    /// Delete a task
    Delete { id: String },
    /// Move a task to a column, at an index or at the end
    Move {
        id: String,
        #[arg(long)]
        column: String,
        /// Target slot; out-of-range values are clamped
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,
    },
    /// Show a task with its assignee
    Get { id: String },
    /// List tasks, for one column or the whole board
    List {
        #[arg(long)]
        column: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ColumnCommands {
    /// Add a column at the right edge
    Add { title: String },
    /// Rename a column
    Update { id: String, title: String },
    /// Show a column
    Get { id: String },
    /// List columns left to right
    List,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Show a user
    Get { id: String },
    /// List users
    List,
}

#[derive(Subcommand, Debug)]
pub enum StatsCommands {
    /// Totals for the ISO week containing now (or --now)
    Week {
        /// RFC 3339 instant, e.g. 2024-05-15T12:00:00+03:00
        #[arg(long)]
        now: Option<DateTime<FixedOffset>>,
    },
}
