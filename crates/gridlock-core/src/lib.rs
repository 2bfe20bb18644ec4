//! Core data structures for the Gridlock sudoku solver.
//!
//! This crate provides the fundamental value types shared by the solver and
//! the command-line front end. It contains no search logic and performs no
//! I/O.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`position`]: Board position (x, y) coordinate types
//! - [`digit_set`]: Bitset of digits, used for cell candidates and
//!   per-unit used-digit tracking
//! - [`grid`]: The 9x9 grid of optional digits, with parsing and raw-value
//!   conversions
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, DigitGrid, DigitSet, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! let mut row = DigitSet::new();
//! for pos in Position::ROWS[4] {
//!     if let Some(digit) = grid.get(pos) {
//!         row.insert(digit);
//!     }
//! }
//! assert!(row.contains(Digit::D5));
//! assert_eq!(row.len(), 1);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridValueError, ParseGridError},
    position::Position,
};
