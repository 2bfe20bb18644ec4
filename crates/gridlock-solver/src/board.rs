//! Constraint state for the backtracking search.

use gridlock_core::{Digit, DigitGrid, DigitSet, Position};

use crate::error::InvalidPuzzle;

/// Constraint-tracking board state.
///
/// A `Board` couples a [`DigitGrid`] with one [`DigitSet`] per row, column,
/// and box recording the digits already placed in that unit. Candidate
/// queries, assignment, and unassignment are all constant-time bitwise
/// operations on those sets.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, DigitSet, Position};
/// use gridlock_solver::Board;
///
/// let grid: DigitGrid = "
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
/// let board = Board::new(&grid)?;
/// let candidates = board.candidates(Position::new(2, 0));
/// assert_eq!(candidates, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D4]));
/// # Ok::<(), gridlock_solver::InvalidPuzzle>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: DigitGrid,
    rows: [DigitSet; 9],
    columns: [DigitSet; 9],
    boxes: [DigitSet; 9],
    empty_count: u8,
}

impl Board {
    /// Builds the constraint state for a puzzle.
    ///
    /// Clues are registered in row-major order. The first clue that repeats
    /// a digit already present in its row, column, or box aborts the build.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPuzzle::Conflict`] naming the offending cell if the
    /// clues contradict each other.
    pub fn new(grid: &DigitGrid) -> Result<Self, InvalidPuzzle> {
        let mut board = Self {
            grid: DigitGrid::new(),
            rows: [DigitSet::EMPTY; 9],
            columns: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
            empty_count: 81,
        };
        for (pos, digit) in grid.filled() {
            if board.used(pos).contains(digit) {
                return Err(InvalidPuzzle::Conflict { pos, digit });
            }
            board.assign(pos, digit);
        }
        Ok(board)
    }

    /// Returns the digits that may be assigned to the cell.
    ///
    /// The result is the complement of the digits already used in the
    /// cell's row, column, and box. The query never mutates the board, and
    /// the returned set is a snapshot that stays valid across later
    /// assignments.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        !self.used(pos)
    }

    fn used(&self, pos: Position) -> DigitSet {
        self.rows[usize::from(pos.y())]
            .union(self.columns[usize::from(pos.x())])
            .union(self.boxes[usize::from(pos.box_index())])
    }

    /// Assigns a digit to an empty cell.
    ///
    /// Callers must only assign digits drawn from
    /// [`candidates`](Self::candidates) of an empty cell. The contract is
    /// checked with debug assertions.
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        debug_assert!(
            self.grid.get(pos).is_none(),
            "Cell {pos} is already assigned"
        );
        debug_assert!(
            self.candidates(pos).contains(digit),
            "Digit {digit} is not a candidate at {pos}"
        );
        self.grid.set(pos, Some(digit));
        self.rows[usize::from(pos.y())].insert(digit);
        self.columns[usize::from(pos.x())].insert(digit);
        self.boxes[usize::from(pos.box_index())].insert(digit);
        self.empty_count -= 1;
    }

    /// Removes the digit assigned to a cell, exactly undoing the matching
    /// [`assign`](Self::assign).
    ///
    /// # Panics
    ///
    /// Panics if the cell is empty.
    pub fn unassign(&mut self, pos: Position) {
        let Some(digit) = self.grid.get(pos) else {
            panic!("No digit assigned at {pos}")
        };
        self.grid.set(pos, None);
        self.rows[usize::from(pos.y())].remove(digit);
        self.columns[usize::from(pos.x())].remove(digit);
        self.boxes[usize::from(pos.box_index())].remove(digit);
        self.empty_count += 1;
    }

    /// Returns `true` if every cell is assigned.
    ///
    /// Assignments are always drawn from candidate sets, so a complete
    /// board satisfies every row, column, and box constraint.
    #[must_use]
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.empty_count == 0
    }

    /// Returns the digit at a position, or `None` for an empty cell.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.grid.get(pos)
    }

    /// Returns the current grid.
    #[must_use]
    #[inline]
    pub const fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// Consumes the board and returns the grid.
    #[must_use]
    pub fn into_grid(self) -> DigitGrid {
        self.grid
    }
}
