//! Sequential batch pipeline over a puzzle file

use super::report::BatchReport;
use crate::config::{Settings, SolveMode};
use crate::error::SolveError;
use crate::ilp::{self, SolveResult};
use crate::puzzle::parse_line;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

/// Runs every machine in a puzzle file through parse → formulate → solve →
/// validate, strictly in file order, and accumulates the minima.
///
/// Lines are independent and could be solved in parallel, but the run stays
/// sequential so results and diagnostics are deterministic.
pub struct BatchRunner {
    settings: Settings,
    verbose: bool,
}

impl BatchRunner {
    pub fn new(settings: Settings, verbose: bool) -> Self {
        Self { settings, verbose }
    }

    /// Read the puzzle file once and solve every machine in it.
    pub fn run_file(&self, path: &Path) -> Result<BatchReport> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read puzzle file: {}", path.display()))?;
        self.run_lines(&content)
    }

    /// Solve every non-blank line and sum the per-machine minima. The first
    /// failing line aborts the whole run; a partial sum would be a silently
    /// wrong answer.
    pub fn run_lines(&self, content: &str) -> Result<BatchReport> {
        let start = Instant::now();
        let mut total = 0u64;
        let mut solved = 0usize;
        let mut skipped = 0usize;

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let line_number = number + 1;

            match self
                .solve_line(line)
                .with_context(|| format!("line {line_number}: {line}"))?
            {
                Some(result) => {
                    if self.verbose {
                        eprintln!("line {line_number}: {} presses", result.total_presses);
                    }
                    total += result.total_presses;
                    solved += 1;
                }
                None => {
                    if self.verbose {
                        eprintln!("line {line_number}: no matching combination, skipped");
                    }
                    skipped += 1;
                }
            }
        }

        Ok(BatchReport {
            total,
            solved,
            skipped,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    fn solve_line(&self, line: &str) -> Result<Option<SolveResult>, SolveError> {
        let instance = parse_line(line)?;
        if self.verbose {
            eprintln!("{instance}");
        }
        match self.settings.solver.mode {
            SolveMode::Presses => ilp::min_total_presses(&instance).map(Some),
            SolveMode::Parity => ilp::min_buttons_for_pattern(&instance),
        }
    }
}
