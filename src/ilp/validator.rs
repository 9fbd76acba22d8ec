//! Integrality guard and exact re-check of solver output
//!
//! MILP backends hand back floating-point values even for integer variables.
//! Rounding is only trusted after two checks: every value must sit within a
//! small absolute tolerance of its nearest integer, and the rounded vector
//! must reproduce the right-hand side exactly in integer arithmetic. A
//! violation of either means the solver or the formulation is broken, and is
//! reported instead of silently absorbed.

use super::program::LinearProgram;
use crate::error::SolveError;
use serde::Serialize;

/// Absolute distance from the nearest integer above which a solver value is
/// rejected as non-integral.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Validated integer solution for one machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveResult {
    /// Press count per button, in line order.
    pub presses_per_button: Vec<u64>,
    /// Sum of all presses, the optimal objective value.
    pub total_presses: u64,
}

/// Check and round a press-mode solution: integral, non-negative, and
/// satisfying `A·x = rhs` exactly.
pub fn validate(program: &LinearProgram, raw: &[f64]) -> Result<SolveResult, SolveError> {
    let presses = round_checked(raw)?;

    for row in 0..program.num_counters() {
        let actual = row_total(program, &presses, row);
        if actual != program.rhs[row] {
            return Err(SolveError::TargetMismatch {
                counter: row,
                expected: program.rhs[row],
                actual,
            });
        }
    }

    let total_presses = presses.iter().sum();
    Ok(SolveResult {
        presses_per_button: presses,
        total_presses,
    })
}

/// Check and round a parity-mode solution: every button variable must be 0
/// or 1, and the toggle count per light must match the pattern bit mod 2.
pub fn validate_parity(program: &LinearProgram, raw: &[f64]) -> Result<SolveResult, SolveError> {
    let used = round_checked(raw)?;
    if let Some((button, &count)) = used.iter().enumerate().find(|&(_, &count)| count > 1) {
        return Err(SolveError::SolverFailure(format!(
            "non-binary value {count} for button {button}"
        )));
    }

    for row in 0..program.num_counters() {
        let toggles = row_total(program, &used, row);
        if toggles % 2 != program.rhs[row] {
            return Err(SolveError::TargetMismatch {
                counter: row,
                expected: program.rhs[row],
                actual: toggles % 2,
            });
        }
    }

    let total_presses = used.iter().sum();
    Ok(SolveResult {
        presses_per_button: used,
        total_presses,
    })
}

fn round_checked(raw: &[f64]) -> Result<Vec<u64>, SolveError> {
    let mut counts = Vec::with_capacity(raw.len());
    for (button, &value) in raw.iter().enumerate() {
        let rounded = value.round();
        if (value - rounded).abs() > INTEGRALITY_TOLERANCE {
            return Err(SolveError::NonIntegral { button, value });
        }
        if rounded < 0.0 {
            return Err(SolveError::SolverFailure(format!(
                "negative press count {value} for button {button}"
            )));
        }
        counts.push(rounded as u64);
    }
    Ok(counts)
}

fn row_total(program: &LinearProgram, counts: &[u64], row: usize) -> i64 {
    counts
        .iter()
        .enumerate()
        .map(|(col, &count)| program.incidence[(row, col)] * count as i64)
        .sum()
}
