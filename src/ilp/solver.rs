//! Solver invocation through `good_lp`
//!
//! The backend is fixed at compile time: the pure-Rust `microlp` solver by
//! default, HiGHS when the `solver-highs` feature is enabled. Both are driven
//! through the same `good_lp` model-building API, so the formulation code
//! never sees which one is active.

#[cfg(feature = "solver-highs")]
use good_lp::solvers::highs::highs as solver_backend;
#[cfg(not(feature = "solver-highs"))]
use good_lp::solvers::microlp::microlp as solver_backend;

use good_lp::{
    constraint, variable, Constraint, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

use super::program::LinearProgram;
use crate::error::SolveError;

/// Minimize the total press count subject to `A·x = rhs`, `x ≥ 0` integer.
///
/// Returns the raw floating-point variable values in button order; the
/// caller is responsible for the integrality guard. Infeasibility and every
/// other non-success backend status surface as a solver failure.
pub fn minimize_presses(program: &LinearProgram) -> Result<Vec<f64>, SolveError> {
    // A machine with no buttons never needs the backend: feasible (with zero
    // presses) exactly when every counter target is already zero.
    if program.num_buttons() == 0 {
        return if program.rhs.iter().all(|&v| v == 0) {
            Ok(Vec::new())
        } else {
            Err(SolveError::SolverFailure(
                "no buttons to press, but target is non-zero".to_string(),
            ))
        };
    }

    let mut vars = ProblemVariables::new();
    let presses: Vec<Variable> = (0..program.num_buttons())
        .map(|_| vars.add(variable().integer().min(0)))
        .collect();

    let objective: Expression = presses.iter().copied().sum();
    let mut model = vars.minimise(objective).using(solver_backend);
    for row in 0..program.num_counters() {
        model = model.with(row_constraint(program, &presses, row, None));
    }

    let solution = model
        .solve()
        .map_err(|err| SolveError::SolverFailure(err.to_string()))?;
    Ok(presses.iter().map(|&v| solution.value(v)).collect())
}

/// Minimize the number of distinct buttons pressed so that the toggles they
/// cause reproduce the 0/1 pattern in `rhs`.
///
/// Toggling is counting mod 2, which the model encodes with one non-negative
/// integer slack per light: `Σ A[j,i]·y_i − 2·k_j = pattern[j]`. Returns the
/// raw values of the button variables only, or `None` when no combination of
/// buttons matches the pattern (that is not an error for this puzzle).
pub fn minimize_buttons(program: &LinearProgram) -> Result<Option<Vec<f64>>, SolveError> {
    if program.num_buttons() == 0 {
        return Ok(if program.rhs.iter().all(|&v| v == 0) {
            Some(Vec::new())
        } else {
            None
        });
    }

    let mut vars = ProblemVariables::new();
    let used: Vec<Variable> = (0..program.num_buttons())
        .map(|_| vars.add(variable().binary()))
        .collect();
    let slack: Vec<Variable> = (0..program.num_counters())
        .map(|_| vars.add(variable().integer().min(0)))
        .collect();

    // Slacks carry no cost; only pressed buttons count.
    let objective: Expression = used.iter().copied().sum();
    let mut model = vars.minimise(objective).using(solver_backend);
    for row in 0..program.num_counters() {
        model = model.with(row_constraint(program, &used, row, Some(slack[row])));
    }

    match model.solve() {
        Ok(solution) => Ok(Some(used.iter().map(|&v| solution.value(v)).collect())),
        Err(ResolutionError::Infeasible) => Ok(None),
        Err(err) => Err(SolveError::SolverFailure(err.to_string())),
    }
}

/// Equality constraint for one counter row, optionally minus a mod-2 slack.
fn row_constraint(
    program: &LinearProgram,
    buttons: &[Variable],
    row: usize,
    parity_slack: Option<Variable>,
) -> Constraint {
    // Every button keeps its term, zero coefficient or not, so a counter
    // wired to no button still yields a well-formed (infeasible) row.
    let mut lhs = Expression::from(0);
    for (col, &var) in buttons.iter().enumerate() {
        let coeff = program.incidence[(row, col)];
        lhs = lhs + (coeff as f64) * var;
    }
    if let Some(slack) = parity_slack {
        lhs = lhs - 2.0 * slack;
    }
    constraint!(lhs == program.rhs[row] as f64)
}
