//! Command implementations

pub mod countries;
pub mod scoreboard;
pub mod simple;

pub use countries::list_countries;
pub use scoreboard::{ScoreboardReport, scoreboard};
pub use simple::{play_lines, run_simple};
