//! The core pipeline step: formulate, solve, validate
//!
//! A machine becomes an equality-constrained integer program (`program`),
//! goes through a `good_lp` backend (`solver`), and the floating-point
//! answer is rounded and re-checked before anyone trusts it (`validator`).

pub mod program;
pub mod solver;
pub mod validator;

pub use program::{formulate, formulate_parity, LinearProgram};
pub use validator::{SolveResult, INTEGRALITY_TOLERANCE};

use crate::error::SolveError;
use crate::puzzle::PuzzleInstance;

/// Minimal total press count reaching a machine's counter targets.
pub fn min_total_presses(instance: &PuzzleInstance) -> Result<SolveResult, SolveError> {
    let program = formulate(instance)?;
    let raw = solver::minimize_presses(&program)?;
    validator::validate(&program, &raw)
}

/// Minimal number of distinct buttons whose toggles light exactly the
/// machine's indicator pattern, or `None` when no combination does.
pub fn min_buttons_for_pattern(
    instance: &PuzzleInstance,
) -> Result<Option<SolveResult>, SolveError> {
    let program = formulate_parity(instance)?;
    match solver::minimize_buttons(&program)? {
        Some(raw) => validator::validate_parity(&program, &raw).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::parse_line;

    #[test]
    fn test_example_machine_total() {
        let instance = parse_line("(3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}").unwrap();
        let result = min_total_presses(&instance).unwrap();
        // Summing the four counter equations counts every press at most
        // twice, so 19 accumulated increments need at least 10 presses.
        assert_eq!(result.total_presses, 10);
        assert_eq!(
            instance.outputs_for(&result.presses_per_button).unwrap(),
            instance.target
        );
        assert_eq!(
            result.total_presses,
            result.presses_per_button.iter().sum::<u64>()
        );
    }

    #[test]
    fn test_shared_button_never_cheaper_here() {
        let instance = parse_line("(0) (1) (0,1) {2,3}").unwrap();
        let result = min_total_presses(&instance).unwrap();
        assert_eq!(result.total_presses, 5);
    }

    #[test]
    fn test_empty_group_zero_target() {
        let instance = parse_line("() {0}").unwrap();
        let result = min_total_presses(&instance).unwrap();
        assert_eq!(result.total_presses, 0);
        assert_eq!(result.presses_per_button, vec![0]);
    }

    #[test]
    fn test_single_button_single_counter() {
        let instance = parse_line("(0) {1}").unwrap();
        assert_eq!(min_total_presses(&instance).unwrap().total_presses, 1);

        let instance = parse_line("(0) {0}").unwrap();
        assert_eq!(min_total_presses(&instance).unwrap().total_presses, 0);
    }

    #[test]
    fn test_empty_group_does_not_change_optimum() {
        let with_dud = parse_line("(0) (1) () (0,1) {2,3}").unwrap();
        let without = parse_line("(0) (1) (0,1) {2,3}").unwrap();

        let with_dud = min_total_presses(&with_dud).unwrap();
        let without = min_total_presses(&without).unwrap();
        assert_eq!(with_dud.total_presses, without.total_presses);
        assert_eq!(with_dud.presses_per_button.len(), 4);
        assert_eq!(without.presses_per_button.len(), 3);
    }

    #[test]
    fn test_duplicate_index_counts_twice_per_press() {
        let instance = parse_line("(0,0) {4}").unwrap();
        let result = min_total_presses(&instance).unwrap();
        assert_eq!(result.total_presses, 2);
    }

    #[test]
    fn test_solution_is_exact_not_approximate() {
        let instance = parse_line("(0,1) (1,2) (0,2) {3,3,4}").unwrap();
        let result = min_total_presses(&instance).unwrap();
        assert_eq!(
            instance.outputs_for(&result.presses_per_button).unwrap(),
            instance.target
        );
    }

    #[test]
    fn test_deterministic_across_repeat_solves() {
        let instance = parse_line("(3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}").unwrap();
        let first = min_total_presses(&instance).unwrap().total_presses;
        let second = min_total_presses(&instance).unwrap().total_presses;
        assert_eq!(first, second);
    }

    #[test]
    fn test_infeasible_machine_is_an_error() {
        // Counter 1 is reachable by no button.
        let instance = parse_line("(0) {1,2}").unwrap();
        let err = min_total_presses(&instance).unwrap_err();
        assert!(matches!(err, SolveError::SolverFailure(_)));
    }

    #[test]
    fn test_out_of_range_index_is_rejected_not_truncated() {
        let instance = parse_line("(0) (5) {1,2}").unwrap();
        let err = min_total_presses(&instance).unwrap_err();
        assert!(matches!(
            err,
            SolveError::IndexOutOfRange {
                index: 5,
                counters: 2
            }
        ));
    }

    #[test]
    fn test_parity_minimal_button_subset() {
        let instance = parse_line("[##] (0) (1) (0,1) {0,0}").unwrap();
        let result = min_buttons_for_pattern(&instance).unwrap().unwrap();
        assert_eq!(result.total_presses, 1);
        assert_eq!(result.presses_per_button, vec![0, 0, 1]);
    }

    #[test]
    fn test_parity_unmatched_pattern_is_skipped() {
        let instance = parse_line("[.#] (0) {0,0}").unwrap();
        assert!(min_buttons_for_pattern(&instance).unwrap().is_none());
    }

    #[test]
    fn test_parity_without_pattern_is_an_error() {
        let instance = parse_line("(0) {1}").unwrap();
        let err = min_buttons_for_pattern(&instance).unwrap_err();
        assert!(matches!(err, SolveError::MissingPattern));
    }
}
