use crate::models::transition::InterferenceMask;
use serde::Serialize;

/// Outcome of the minimal-order computation.
///
/// `Infeasible` means no count of the supplied transitions separates the
/// peptide from every interferer. It is a result value, not an error;
/// callers have to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MinTransitions {
    Found(usize),
    Infeasible,
}

/// The one piece of state the minimal-order path carries across candidates:
/// the longest leading run of matched transitions seen so far.
#[derive(Debug, Default)]
pub(crate) struct PrefixRunSolver {
    best_prefix_run: usize,
}

impl PrefixRunSolver {
    /// Fold one candidate's combined mask into the running maximum.
    ///
    /// The run is the contiguous block of set bits starting at bit 0. Bits
    /// set after the first gap do not count: monitoring the top k
    /// transitions is defeated only when a candidate reproduces all k of
    /// them, regardless of what it matches further down the preference list.
    pub(crate) fn observe(&mut self, mask: InterferenceMask) {
        if mask == 0 {
            return;
        }
        // The capacity check keeps the top bit clear, so the run always
        // terminates short of the mask width.
        let run = mask.trailing_ones() as usize;
        if run > self.best_prefix_run {
            self.best_prefix_run = run;
        }
    }

    /// Runs were counted from 0, the answer is a transition count.
    pub(crate) fn finish(self, n_transitions: usize) -> MinTransitions {
        let needed = self.best_prefix_run + 1;
        if needed > n_transitions {
            MinTransitions::Infeasible
        } else {
            MinTransitions::Found(needed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(masks: &[InterferenceMask], n_transitions: usize) -> MinTransitions {
        let mut solver = PrefixRunSolver::default();
        for &mask in masks {
            solver.observe(mask);
        }
        solver.finish(n_transitions)
    }

    #[test]
    fn test_no_interference_needs_one_transition() {
        assert_eq!(solve(&[], 3), MinTransitions::Found(1));
        assert_eq!(solve(&[0, 0], 3), MinTransitions::Found(1));
    }

    #[test]
    fn test_leading_run_only() {
        // Matches transitions 0 and 2 but not 1: only the leading run
        // counts, so two transitions are enough.
        assert_eq!(solve(&[0b101], 3), MinTransitions::Found(2));
    }

    #[test]
    fn test_first_two_matched_needs_all_three() {
        assert_eq!(solve(&[0b011], 3), MinTransitions::Found(3));
    }

    #[test]
    fn test_two_candidates() {
        // Prefix runs 1 and 0.
        assert_eq!(solve(&[0b001, 0b010], 3), MinTransitions::Found(2));
    }

    #[test]
    fn test_infeasible_when_every_transition_matched() {
        assert_eq!(solve(&[0b111], 3), MinTransitions::Infeasible);
    }

    #[test]
    fn test_adding_candidates_never_decreases_the_order() {
        let masks: [InterferenceMask; 3] = [0b001, 0b011, 0b010];
        let mut previous = 0;
        for i in 0..masks.len() {
            match solve(&masks[..=i], 5) {
                MinTransitions::Found(n) => {
                    assert!(n >= previous);
                    previous = n;
                }
                MinTransitions::Infeasible => panic!("unexpectedly infeasible"),
            }
        }
    }
}
