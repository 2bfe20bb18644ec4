//! Test utilities for verifying solver behavior.
//!
//! This module provides [`SolveTester`], a harness that parses a puzzle,
//! runs a solver over it, and offers fluent assertions about the outcome
//! and the collected statistics.

use std::str::FromStr as _;

use gridlock_core::{DigitGrid, DigitSet, Position};

use crate::{BacktrackSolver, Outcome, SearchStats};

/// A fluent test harness around [`BacktrackSolver`].
///
/// The harness solves the puzzle once at construction time. Assertion
/// methods consume and return `self` so they can be chained, and use
/// `#[track_caller]` to report the correct source location on failure.
///
/// # Examples
///
/// ```
/// use gridlock_solver::testing::SolveTester;
///
/// SolveTester::from_str(&"_".repeat(81))
///     .assert_solved()
///     .assert_valid_solution();
/// ```
#[derive(Debug)]
pub struct SolveTester {
    clues: DigitGrid,
    outcome: Outcome,
    stats: SearchStats,
}

impl SolveTester {
    /// Parses a puzzle and solves it with the default solver.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid grid or the clues are
    /// contradictory.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::with_solver(s, &BacktrackSolver::new())
    }

    /// Parses a puzzle and solves it with the given solver.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid grid or the clues are
    /// contradictory.
    #[track_caller]
    pub fn with_solver(s: &str, solver: &BacktrackSolver) -> Self {
        let clues = DigitGrid::from_str(s).unwrap();
        let mut stats = SearchStats::new();
        let outcome = solver.solve_with_stats(&clues, &mut stats).unwrap();
        Self {
            clues,
            outcome,
            stats,
        }
    }

    /// Returns the parsed clues.
    #[must_use]
    pub const fn clues(&self) -> &DigitGrid {
        &self.clues
    }

    /// Returns the solver outcome.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the statistics collected during the solve.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Asserts that a solution was found.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle was unsolvable.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        assert!(
            self.outcome.is_solved(),
            "Expected a solution, but the puzzle was unsolvable"
        );
        self
    }

    /// Asserts that no solution exists.
    ///
    /// # Panics
    ///
    /// Panics if a solution was found.
    #[track_caller]
    pub fn assert_unsolvable(self) -> Self {
        assert!(
            self.outcome.is_unsolvable(),
            "Expected no solution, but one was found: {:?}",
            self.outcome
        );
        self
    }

    /// Asserts that the solution is complete and that every row, column,
    /// and box contains all nine digits.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle was unsolvable or the solution violates a
    /// constraint.
    #[track_caller]
    pub fn assert_valid_solution(self) -> Self {
        let solution = self.solution();
        assert!(
            solution.is_filled(),
            "Expected a complete grid, but cells are empty: {solution:?}"
        );
        let units = [
            ("row", &Position::ROWS),
            ("column", &Position::COLUMNS),
            ("box", &Position::BOXES),
        ];
        for (kind, table) in units {
            for (index, unit) in table.iter().enumerate() {
                let digits: DigitSet =
                    unit.iter().filter_map(|&pos| solution.get(pos)).collect();
                assert_eq!(
                    digits,
                    DigitSet::FULL,
                    "Expected {kind} {index} to contain every digit, got {digits:?}"
                );
            }
        }
        self
    }

    /// Asserts that every clue keeps its digit in the solution.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle was unsolvable or a clue was changed.
    #[track_caller]
    pub fn assert_clues_preserved(self) -> Self {
        let solution = self.solution();
        for (pos, digit) in self.clues.filled() {
            assert_eq!(
                solution.get(pos),
                Some(digit),
                "Expected clue {digit} at {pos} to be preserved"
            );
        }
        self
    }

    /// Asserts that the solution equals the grid parsed from `expected`.
    ///
    /// # Panics
    ///
    /// Panics if `expected` is not a valid grid, the puzzle was
    /// unsolvable, or the solutions differ.
    #[track_caller]
    pub fn assert_solution(self, expected: &str) -> Self {
        let expected = DigitGrid::from_str(expected).unwrap();
        assert_eq!(
            self.solution(),
            &expected,
            "Solution differs from the expected grid"
        );
        self
    }

    #[track_caller]
    fn solution(&self) -> &DigitGrid {
        match &self.outcome {
            Outcome::Solved(solution) => solution,
            Outcome::Unsolvable => {
                panic!("Expected a solution, but the puzzle was unsolvable")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSOLVABLE: &str = "
        ___ 234 ___
        _89 ___ ___
        _1_ ___ ___
        5__ ___ ___
        6__ ___ ___
        7__ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
    ";

    #[test]
    fn test_chained_assertions() {
        let tester = SolveTester::from_str(&"_".repeat(81))
            .assert_solved()
            .assert_valid_solution()
            .assert_clues_preserved();
        assert_eq!(tester.clues().filled_count(), 0);
        assert!(tester.stats().has_searched());
    }

    #[test]
    #[should_panic(expected = "Expected a solution")]
    fn test_assert_solved_panics_when_unsolvable() {
        let _ = SolveTester::from_str(UNSOLVABLE).assert_solved();
    }

    #[test]
    #[should_panic(expected = "Expected no solution")]
    fn test_assert_unsolvable_panics_when_solved() {
        let _ = SolveTester::from_str(&"_".repeat(81)).assert_unsolvable();
    }
}
