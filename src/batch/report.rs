//! Aggregated result of one batch run

use serde::Serialize;
use std::fmt;

/// Totals for a whole puzzle file.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Sum of per-machine minima, the puzzle answer.
    pub total: u64,
    /// Machines solved to optimality.
    pub solved: usize,
    /// Parity-mode machines whose pattern no button combination matches;
    /// always zero in press mode.
    pub skipped: usize,
    /// Wall-clock time for the whole file.
    pub elapsed_seconds: f64,
}

impl BatchReport {
    /// Serialize for the JSON output format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total: {}", self.total)?;
        writeln!(f, "machines solved: {}, skipped: {}", self.solved, self.skipped)?;
        write!(f, "elapsed: {:.3}s", self.elapsed_seconds)
    }
}
