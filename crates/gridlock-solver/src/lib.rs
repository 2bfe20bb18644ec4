//! Backtracking solver for 9x9 number-place puzzles.
//!
//! The crate builds on the grid types from [`gridlock_core`] and provides:
//!
//! - [`Board`]: constraint state tracking the used digits of every row,
//!   column, and box
//! - [`BacktrackSolver`]: a deterministic depth-first search over candidate
//!   digits
//! - [`SearchStats`]: counters describing the work a solve performed
//!
//! Contradictory clues are rejected up front as [`InvalidPuzzle`]; a
//! well-formed puzzle with no solution is reported as
//! [`Outcome::Unsolvable`].
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, DigitGrid, Position};
//! use gridlock_solver::solve;
//!
//! let puzzle: DigitGrid = "
//!     534 678 912
//!     672 195 348
//!     198 342 567
//!     859 761 423
//!     426 8_3 791
//!     713 924 856
//!     961 537 284
//!     287 419 635
//!     345 286 179
//! "
//! .parse()
//! .unwrap();
//!
//! let solution = solve(&puzzle)?.solved().unwrap();
//! assert_eq!(solution.get(Position::new(4, 4)), Some(Digit::D5));
//! # Ok::<(), gridlock_solver::InvalidPuzzle>(())
//! ```

pub use self::{backtrack_solver::*, board::*, error::*};

mod backtrack_solver;
mod board;
mod error;
pub mod testing;
