//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{RoundReport, SimulationStatistics, play_round, run_simulation};
