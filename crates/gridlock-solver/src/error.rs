//! Error types for the solver.

use gridlock_core::{Digit, Position};

/// Error returned when a puzzle's clues contradict each other.
///
/// A conflict is a property of the input and is detected while the
/// constraint state is built, before any search step runs. It is distinct
/// from [`Outcome::Unsolvable`], which reports that a well-formed puzzle
/// admits no solution.
///
/// [`Outcome::Unsolvable`]: crate::Outcome::Unsolvable
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidPuzzle {
    /// A clue repeats a digit already present in its row, column, or box.
    #[display("conflicting clue {digit} at {pos}")]
    Conflict {
        /// Position of the clue that clashes with an earlier one.
        pos: Position,
        /// The duplicated digit.
        digit: Digit,
    },
}
