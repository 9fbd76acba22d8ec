//! Minimal button press solver for counter machines
//!
//! Each line of a puzzle file describes a machine: buttons wired to
//! counters, and the totals every counter must reach. This library finds,
//! per machine, the cheapest non-negative integer press assignment via an
//! integer linear program, and sums the minima over the whole file.

pub mod batch;
pub mod config;
pub mod error;
pub mod ilp;
pub mod puzzle;

pub use batch::{BatchReport, BatchRunner};
pub use config::Settings;
pub use error::SolveError;
pub use ilp::SolveResult;
pub use puzzle::PuzzleInstance;

use anyhow::Result;
use std::path::Path;

/// Solve every machine in a puzzle file with default settings and return
/// the summed minimal press count.
pub fn solve_file<P: AsRef<Path>>(path: P) -> Result<u64> {
    let runner = BatchRunner::new(Settings::default(), false);
    Ok(runner.run_file(path.as_ref())?.total)
}
