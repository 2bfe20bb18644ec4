//! 9x9 grid of optional digits.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// A 9x9 grid of cells, each empty or holding a digit.
///
/// This is the plain value representation of a puzzle or a solution. Cells
/// are stored in row-major order and addressed by [`Position`].
///
/// # Grid Strings
///
/// Grids can be parsed from strings where digits `1`-`9` are filled cells,
/// `.`, `_`, or `0` are empty cells, and whitespace is ignored:
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, Position};
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
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the given position, or `None` if the cell is empty.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at the given position.
    #[inline]
    pub const fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[pos.index()] = cell;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Digit>)> {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Returns an iterator over the filled cells in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (Position, Digit)> {
        self.iter()
            .filter_map(|(pos, cell)| cell.map(|digit| (pos, digit)))
    }

    /// Builds a grid from raw cell values, row by row.
    ///
    /// A value of 0 leaves the cell empty; 1-9 fill it with the
    /// corresponding digit.
    ///
    /// # Errors
    ///
    /// Returns [`GridValueError`] naming the offending cell if any value is
    /// greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Digit, DigitGrid, Position};
    ///
    /// let mut values = [[0_u8; 9]; 9];
    /// values[0][4] = 7;
    ///
    /// let grid = DigitGrid::try_from_values(&values).unwrap();
    /// assert_eq!(grid.get(Position::new(4, 0)), Some(Digit::D7));
    /// assert_eq!(grid.filled_count(), 1);
    /// ```
    pub fn try_from_values(values: &[[u8; 9]; 9]) -> Result<Self, GridValueError> {
        let mut grid = Self::new();
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new(x as u8, y as u8);
                let digit =
                    Digit::try_from_value(value).ok_or(GridValueError { pos, value })?;
                grid.set(pos, Some(digit));
            }
        }
        Ok(grid)
    }

    /// Returns the raw cell values, row by row, with 0 for empty cells.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for (pos, digit) in self.filled() {
            values[usize::from(pos.y())][usize::from(pos.x())] = digit.value();
        }
        values
    }
}

impl Default for DigitGrid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    #[inline]
    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => Some(Digit::from_value(char_value(ch))),
                _ => return Err(ParseGridError::UnexpectedChar { ch }),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

#[expect(clippy::cast_possible_truncation)]
fn char_value(ch: char) -> u8 {
    ch.to_digit(10).map_or(0, |value| value as u8)
}

impl fmt::Display for DigitGrid {
    /// Formats the grid as 81 characters in row-major order, with `_` for
    /// empty cells. The output parses back via [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitGrid(\"{self}\")")
    }
}

/// Error returned when parsing a grid string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string contains a character that is neither a digit, a
    /// placeholder, nor whitespace.
    #[display("unexpected character {ch:?} in grid string")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
    },
    /// The string does not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

/// Error returned when building a grid from raw cell values fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell value {value} at {pos}")]
pub struct GridValueError {
    /// Position of the offending cell.
    pub pos: Position,
    /// The out-of-range value.
    pub value: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_parse_and_access() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(1, 0)), Some(Digit::D3));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.filled_count(), 30);
        assert!(!grid.is_filled());
    }

    #[test]
    fn test_display_round_trip() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered.len(), 81);
        assert_eq!(&rendered[..9], "53__7____");
        assert_eq!(&rendered[72..], "____8__79");

        let reparsed: DigitGrid = rendered.parse().unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_parse_accepts_dot_and_zero() {
        let dots: DigitGrid = ".".repeat(81).parse().unwrap();
        let zeros: DigitGrid = "0".repeat(81).parse().unwrap();
        let underscores: DigitGrid = "_".repeat(81).parse().unwrap();
        assert_eq!(dots, DigitGrid::new());
        assert_eq!(zeros, dots);
        assert_eq!(underscores, dots);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(ParseGridError::UnexpectedChar { ch: 'x' })
        );
        assert_eq!(
            "1".repeat(80).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { count: 80 })
        );
        assert_eq!(
            "1".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn test_values_round_trip() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        let values = grid.to_values();
        assert_eq!(values[0], [5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(values[8], [0, 0, 0, 0, 8, 0, 0, 7, 9]);

        let rebuilt = DigitGrid::try_from_values(&values).unwrap();
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn test_try_from_values_rejects_out_of_range() {
        let mut values = [[0_u8; 9]; 9];
        values[3][6] = 10;
        let err = DigitGrid::try_from_values(&values).unwrap_err();
        assert_eq!(
            err,
            GridValueError {
                pos: Position::new(6, 3),
                value: 10,
            }
        );
        assert_eq!(err.to_string(), "invalid cell value 10 at (6, 3)");
    }

    #[test]
    fn test_index_and_set() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(4, 4);
        grid.set(pos, Some(Digit::D5));
        assert_eq!(grid[pos], Some(Digit::D5));

        grid[pos] = Some(Digit::D6);
        assert_eq!(grid.get(pos), Some(Digit::D6));

        grid.set(pos, None);
        assert_eq!(grid[pos], None);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_filled_iterates_in_row_major_order() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        let filled: Vec<_> = grid.filled().collect();
        assert_eq!(filled.len(), 30);
        assert_eq!(filled[0], (Position::new(0, 0), Digit::D5));
        assert_eq!(filled[1], (Position::new(1, 0), Digit::D3));
        for pair in filled.windows(2) {
            assert!(pair[0].0.index() < pair[1].0.index());
        }
    }
}
