//! Formulation of a machine as an equality-constrained integer program

use crate::error::SolveError;
use crate::puzzle::PuzzleInstance;
use nalgebra::{DMatrix, DVector};

/// `min 1ᵀx  s.t.  A·x = rhs, x ≥ 0, x integer`, with one column per button
/// and one row per counter. Built fresh per machine, never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    /// Incidence matrix: `incidence[(j, i)]` is how much one press of button
    /// `i` adds to counter `j`. Usually 0 or 1, more when a group repeats an
    /// index.
    pub incidence: DMatrix<i64>,
    /// Required totals, one per counter.
    pub rhs: DVector<i64>,
}

impl LinearProgram {
    pub fn num_buttons(&self) -> usize {
        self.incidence.ncols()
    }

    pub fn num_counters(&self) -> usize {
        self.incidence.nrows()
    }
}

/// Build the press-count program for a machine. Button order becomes column
/// order and target order becomes row order, so solutions read back in line
/// order.
pub fn formulate(instance: &PuzzleInstance) -> Result<LinearProgram, SolveError> {
    let incidence = incidence_matrix(&instance.groups, instance.target.len())?;
    let rhs = DVector::from_iterator(
        instance.target.len(),
        instance.target.iter().map(|&v| v as i64),
    );
    Ok(LinearProgram { incidence, rhs })
}

/// Build the parity program for a machine: same incidence structure, but the
/// right-hand side is the 0/1 indicator pattern. The solver layer adds the
/// mod-2 slack variables; they are not part of the incidence matrix.
pub fn formulate_parity(instance: &PuzzleInstance) -> Result<LinearProgram, SolveError> {
    let pattern = instance.pattern.as_ref().ok_or(SolveError::MissingPattern)?;
    let incidence = incidence_matrix(&instance.groups, pattern.len())?;
    let rhs = DVector::from_iterator(pattern.len(), pattern.iter().map(|&on| i64::from(on)));
    Ok(LinearProgram { incidence, rhs })
}

fn incidence_matrix(groups: &[Vec<usize>], rows: usize) -> Result<DMatrix<i64>, SolveError> {
    let mut incidence = DMatrix::<i64>::zeros(rows, groups.len());
    for (button, group) in groups.iter().enumerate() {
        for &counter in group {
            if counter >= rows {
                return Err(SolveError::IndexOutOfRange {
                    index: counter,
                    counters: rows,
                });
            }
            // Accumulate rather than set: a repeated index means one press
            // increments that counter more than once.
            incidence[(counter, button)] += 1;
        }
    }
    Ok(incidence)
}
