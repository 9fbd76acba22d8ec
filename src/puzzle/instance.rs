//! Machine instance model: buttons wired to counters

use crate::error::SolveError;
use itertools::Itertools;
use std::fmt;

/// Indicator lights parsed from an optional `[...]` section, `.` = off, `#` = on.
pub type Pattern = Vec<bool>;

/// One machine from the puzzle file.
///
/// Each button is a list of counter indices it increments by one per press.
/// Repeated indices are meaningful: a button listing the same counter twice
/// adds two to that counter on every press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInstance {
    /// Indicator pattern, present only on lines carrying a `[...]` section.
    pub pattern: Option<Pattern>,
    /// One entry per button, in line order.
    pub groups: Vec<Vec<usize>>,
    /// Required total per counter, in line order.
    pub target: Vec<u64>,
}

impl PuzzleInstance {
    pub fn num_buttons(&self) -> usize {
        self.groups.len()
    }

    pub fn num_counters(&self) -> usize {
        self.target.len()
    }

    /// Counter totals produced by pressing each button the given number of
    /// times. Used for exact re-checking of solver output.
    pub fn outputs_for(&self, presses: &[u64]) -> Result<Vec<u64>, SolveError> {
        let mut outputs = vec![0u64; self.target.len()];
        for (group, &count) in self.groups.iter().zip(presses) {
            for &counter in group {
                if counter >= outputs.len() {
                    return Err(SolveError::IndexOutOfRange {
                        index: counter,
                        counters: outputs.len(),
                    });
                }
                outputs[counter] += count;
            }
        }
        Ok(outputs)
    }
}

impl fmt::Display for PuzzleInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pattern) = &self.pattern {
            let lights: String = pattern.iter().map(|&on| if on { '#' } else { '.' }).collect();
            write!(f, "pattern: [{}]  ", lights)?;
        }
        let groups = self
            .groups
            .iter()
            .map(|group| format!("({})", group.iter().join(",")))
            .join(" ");
        write!(f, "groups: [{}]  values: {{{}}}", groups, self.target.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PuzzleInstance {
        PuzzleInstance {
            pattern: None,
            groups: vec![vec![0], vec![1], vec![0, 1]],
            target: vec![2, 3],
        }
    }

    #[test]
    fn test_outputs_for_basic() {
        let instance = sample();
        let outputs = instance.outputs_for(&[2, 3, 0]).unwrap();
        assert_eq!(outputs, vec![2, 3]);
    }

    #[test]
    fn test_outputs_for_shared_button() {
        let instance = sample();
        let outputs = instance.outputs_for(&[1, 2, 1]).unwrap();
        assert_eq!(outputs, vec![2, 3]);
    }

    #[test]
    fn test_outputs_for_duplicate_index_accumulates() {
        let instance = PuzzleInstance {
            pattern: None,
            groups: vec![vec![0, 0]],
            target: vec![4],
        };
        // One press increments counter 0 twice.
        assert_eq!(instance.outputs_for(&[2]).unwrap(), vec![4]);
    }

    #[test]
    fn test_outputs_for_out_of_range() {
        let instance = PuzzleInstance {
            pattern: None,
            groups: vec![vec![3]],
            target: vec![1, 1],
        };
        let err = instance.outputs_for(&[1]).unwrap_err();
        assert!(matches!(err, SolveError::IndexOutOfRange { index: 3, counters: 2 }));
    }

    #[test]
    fn test_display_round_trips_sections() {
        let instance = PuzzleInstance {
            pattern: Some(vec![true, false, true]),
            groups: vec![vec![0, 2], vec![]],
            target: vec![1, 0, 1],
        };
        let shown = instance.to_string();
        assert_eq!(shown, "pattern: [#.#]  groups: [(0,2) ()]  values: {1,0,1}");
    }
}
