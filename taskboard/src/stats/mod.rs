//! Analytics commands

mod week;

pub use week::WeeklyStatsCommand;
