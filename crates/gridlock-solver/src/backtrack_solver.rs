//! Depth-first backtracking search.

use gridlock_core::{DigitGrid, Position};

use crate::{board::Board, error::InvalidPuzzle};

/// Strategy for choosing which empty cell to branch on next.
///
/// Both strategies are deterministic. Candidates at the chosen cell are
/// always tried in ascending digit order, so a given puzzle and strategy
/// produce the same search every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellSelection {
    /// Branch on the empty cell with the fewest candidates, breaking ties
    /// by the lowest row-major index.
    #[default]
    MinimumRemaining,
    /// Branch on the first empty cell in row-major order.
    RowMajor,
}

/// Counters collected over a single solver run.
///
/// # Examples
///
/// An already-complete grid is returned as-is, with no search performed:
///
/// ```
/// use gridlock_core::DigitGrid;
/// use gridlock_solver::{BacktrackSolver, SearchStats};
///
/// let solution: DigitGrid = "
///     534 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 179
/// "
/// .parse()
/// .unwrap();
///
/// let mut stats = SearchStats::new();
/// let outcome = BacktrackSolver::new().solve_with_stats(&solution, &mut stats)?;
/// assert_eq!(outcome.solved().as_ref(), Some(&solution));
/// assert!(!stats.has_searched());
/// # Ok::<(), gridlock_solver::InvalidPuzzle>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    assignments: usize,
    backtracks: usize,
    max_depth: usize,
}

impl SearchStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: 0,
            backtracks: 0,
            max_depth: 0,
        }
    }

    /// Returns the number of digits assigned during the search.
    #[must_use]
    pub const fn assignments(&self) -> usize {
        self.assignments
    }

    /// Returns the number of assignments that were undone.
    #[must_use]
    pub const fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the deepest nesting of trial assignments reached.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` if the search assigned at least one digit.
    #[must_use]
    pub const fn has_searched(&self) -> bool {
        self.assignments > 0
    }
}

/// The result of a completed search.
///
/// `Unsolvable` reports that a well-formed puzzle admits no solution. It is
/// a normal result, not an error. Contrast with [`InvalidPuzzle`], which
/// reports contradictory input and is produced before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// A complete grid satisfying every row, column, and box constraint.
    Solved(DigitGrid),
    /// No complete assignment extends the given clues.
    Unsolvable,
}

impl Outcome {
    /// Returns the solved grid, or `None` if the puzzle was unsolvable.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::DigitGrid;
    /// use gridlock_solver::solve;
    ///
    /// let solution = solve(&DigitGrid::new())?.solved();
    /// assert!(solution.is_some_and(|grid| grid.is_filled()));
    /// # Ok::<(), gridlock_solver::InvalidPuzzle>(())
    /// ```
    #[must_use]
    pub fn solved(self) -> Option<DigitGrid> {
        match self {
            Self::Solved(grid) => Some(grid),
            Self::Unsolvable => None,
        }
    }
}

/// A depth-first backtracking solver.
///
/// The solver builds a [`Board`] from the input grid, then repeatedly picks
/// an empty cell (per [`CellSelection`]), tries each of its candidates in
/// ascending order, and unwinds to the previous branch point when a cell
/// runs out of candidates. The first complete assignment is returned; the
/// search never continues past it.
///
/// # Examples
///
/// ```
/// use gridlock_core::DigitGrid;
/// use gridlock_solver::{BacktrackSolver, Outcome};
///
/// let puzzle: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// let solver = BacktrackSolver::new();
/// match solver.solve(&puzzle)? {
///     Outcome::Solved(solution) => assert!(solution.is_filled()),
///     Outcome::Unsolvable => unreachable!(),
/// }
/// # Ok::<(), gridlock_solver::InvalidPuzzle>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BacktrackSolver {
    selection: CellSelection,
}

impl BacktrackSolver {
    /// Creates a solver with the default cell selection strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given cell selection strategy.
    #[must_use]
    pub const fn with_selection(selection: CellSelection) -> Self {
        Self { selection }
    }

    /// Returns the configured cell selection strategy.
    #[must_use]
    pub const fn selection(&self) -> CellSelection {
        self.selection
    }

    /// Solves a puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPuzzle`] if the clues contradict each other.
    pub fn solve(&self, grid: &DigitGrid) -> Result<Outcome, InvalidPuzzle> {
        let mut stats = SearchStats::new();
        self.solve_with_stats(grid, &mut stats)
    }

    /// Solves a puzzle, accumulating search statistics into `stats`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPuzzle`] if the clues contradict each other.
    pub fn solve_with_stats(
        &self,
        grid: &DigitGrid,
        stats: &mut SearchStats,
    ) -> Result<Outcome, InvalidPuzzle> {
        let mut board = Board::new(grid)?;
        if self.search(&mut board, stats, 0) {
            Ok(Outcome::Solved(board.into_grid()))
        } else {
            Ok(Outcome::Unsolvable)
        }
    }

    /// Recursive core of the search. Returns `true` once the board is
    /// complete. On `false` the board is restored to the state it had on
    /// entry.
    fn search(&self, board: &mut Board, stats: &mut SearchStats, depth: usize) -> bool {
        let Some(pos) = self.select_cell(board) else {
            return true;
        };
        for digit in board.candidates(pos) {
            board.assign(pos, digit);
            stats.assignments += 1;
            stats.max_depth = stats.max_depth.max(depth + 1);
            if self.search(board, stats, depth + 1) {
                return true;
            }
            board.unassign(pos);
            stats.backtracks += 1;
        }
        false
    }

    /// Picks the next cell to branch on, or `None` if the board is complete.
    fn select_cell(&self, board: &Board) -> Option<Position> {
        if board.is_complete() {
            return None;
        }
        match self.selection {
            CellSelection::MinimumRemaining => {
                let mut best: Option<(Position, usize)> = None;
                for pos in Position::ALL {
                    if board.get(pos).is_some() {
                        continue;
                    }
                    let count = board.candidates(pos).len();
                    if count == 0 {
                        // Dead end; no other cell can rank lower.
                        return Some(pos);
                    }
                    if best.is_none_or(|(_, best_count)| count < best_count) {
                        best = Some((pos, count));
                    }
                }
                best.map(|(pos, _)| pos)
            }
            CellSelection::RowMajor => Position::ALL
                .into_iter()
                .find(|&pos| board.get(pos).is_none()),
        }
    }
}

/// Solves a puzzle with the default solver configuration.
///
/// # Errors
///
/// Returns [`InvalidPuzzle`] if the clues contradict each other.
///
/// # Examples
///
/// ```
/// use gridlock_core::DigitGrid;
/// use gridlock_solver::solve;
///
/// let outcome = solve(&DigitGrid::new())?;
/// assert!(outcome.is_solved());
/// # Ok::<(), gridlock_solver::InvalidPuzzle>(())
/// ```
pub fn solve(grid: &DigitGrid) -> Result<Outcome, InvalidPuzzle> {
    BacktrackSolver::new().solve(grid)
}

#[cfg(test)]
mod tests {
    use gridlock_core::Digit::*;

    use super::*;
    use crate::testing::SolveTester;

    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    const EMPTY: &str = "
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
    ";

    #[test]
    fn test_solves_unique_puzzle() {
        SolveTester::from_str(PUZZLE)
            .assert_solved()
            .assert_valid_solution()
            .assert_clues_preserved()
            .assert_solution(SOLUTION);
    }

    #[test]
    fn test_empty_grid_is_solvable() {
        SolveTester::from_str(EMPTY)
            .assert_solved()
            .assert_valid_solution();
    }

    #[test]
    fn test_single_missing_cell_is_restored() {
        // The solution with (4, 4) blanked out; 5 is the only candidate left.
        let puzzle = "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 8_3 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        ";
        let tester = SolveTester::from_str(puzzle)
            .assert_solution(SOLUTION)
            .assert_clues_preserved();
        assert_eq!(tester.stats().assignments(), 1);
        assert_eq!(tester.stats().backtracks(), 0);
    }

    #[test]
    fn test_complete_grid_returned_without_search() {
        let tester = SolveTester::from_str(SOLUTION).assert_solution(SOLUTION);
        assert!(!tester.stats().has_searched());
        assert_eq!(tester.stats().max_depth(), 0);
    }

    #[test]
    fn test_duplicate_clue_is_invalid_not_unsolvable() {
        let grid: DigitGrid = "
            5_5 ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();
        assert_eq!(
            solve(&grid),
            Err(InvalidPuzzle::Conflict {
                pos: Position::new(2, 0),
                digit: D5,
            })
        );
    }

    #[test]
    fn test_excluded_cell_is_unsolvable() {
        // The clues are pairwise consistent, but together they use up all
        // nine digits around (0, 0).
        let puzzle = "
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
        let tester = SolveTester::from_str(puzzle).assert_unsolvable();
        assert_eq!(tester.stats().assignments(), 0);
    }

    #[test]
    fn test_delayed_contradiction_backtracks() {
        // (0, 0) and (1, 0) are both forced to 1, so the search has to
        // assign once before discovering the contradiction.
        let puzzle = "
            __3 456 789
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            2__ ___ ___
            ___ ___ ___
            _2_ ___ ___
            ___ ___ ___
            ___ ___ ___
        ";
        let tester = SolveTester::from_str(puzzle).assert_unsolvable();
        assert_eq!(tester.stats().assignments(), 1);
        assert_eq!(tester.stats().backtracks(), 1);
    }

    #[test]
    fn test_selection_strategies_find_the_same_unique_solution() {
        for selection in [CellSelection::MinimumRemaining, CellSelection::RowMajor] {
            let solver = BacktrackSolver::with_selection(selection);
            SolveTester::with_solver(PUZZLE, &solver)
                .assert_solution(SOLUTION)
                .assert_clues_preserved();
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        // Only the first three rows are given, leaving many solutions;
        // repeated runs must still pick the same one.
        let puzzle = "
            534 678 912
            672 195 348
            198 342 567
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ";
        for selection in [CellSelection::MinimumRemaining, CellSelection::RowMajor] {
            let solver = BacktrackSolver::with_selection(selection);
            let first = SolveTester::with_solver(puzzle, &solver).assert_valid_solution();
            let second = SolveTester::with_solver(puzzle, &solver);
            assert_eq!(first.outcome(), second.outcome());
            assert_eq!(first.stats(), second.stats());
        }
    }

    #[test]
    fn test_row_major_selection_picks_lowest_candidates_ascending() {
        let solver = BacktrackSolver::with_selection(CellSelection::RowMajor);
        let outcome = solver.solve(&EMPTY.parse().unwrap()).unwrap();
        let solution = outcome.solved().unwrap();
        // On an empty grid the first row is filled left to right with the
        // smallest digits that fit.
        assert_eq!(solution.get(Position::new(0, 0)), Some(D1));
        assert_eq!(solution.get(Position::new(1, 0)), Some(D2));
        assert_eq!(solution.get(Position::new(8, 0)), Some(D9));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn arb_partial_solution() -> impl Strategy<Value = DigitGrid> {
            let solution: DigitGrid = SOLUTION.parse().unwrap();
            proptest::collection::vec(any::<bool>(), 81).prop_map(move |mask| {
                let mut grid = solution.clone();
                for (pos, erase) in Position::ALL.into_iter().zip(mask) {
                    if erase {
                        grid.set(pos, None);
                    }
                }
                grid
            })
        }

        proptest! {
            #[test]
            fn test_partial_solutions_always_solve(grid in arb_partial_solution()) {
                let outcome = solve(&grid).unwrap();
                let solution = outcome.solved().unwrap();
                prop_assert!(solution.is_filled());
                for (pos, digit) in grid.filled() {
                    prop_assert_eq!(solution.get(pos), Some(digit));
                }
            }

            #[test]
            fn test_solver_is_total_on_arbitrary_grids(
                values in proptest::collection::vec(
                    prop_oneof![4 => Just(0_u8), 1 => 1_u8..=9],
                    81,
                ),
            ) {
                let mut cells = [[0_u8; 9]; 9];
                for (i, value) in values.into_iter().enumerate() {
                    cells[i / 9][i % 9] = value;
                }
                let grid = DigitGrid::try_from_values(&cells).unwrap();

                // Every input produces a definite answer, and a reported
                // solution is a real one.
                match solve(&grid) {
                    Ok(Outcome::Solved(solution)) => {
                        prop_assert!(solution.is_filled());
                        for (pos, digit) in grid.filled() {
                            prop_assert_eq!(solution.get(pos), Some(digit));
                        }
                    }
                    Ok(Outcome::Unsolvable) | Err(InvalidPuzzle::Conflict { .. }) => {}
                }
            }
        }
    }
}
