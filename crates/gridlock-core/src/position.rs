//! Board position (x, y) coordinate types.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Cells are ordered row-major: all of row 0 left to right, then
/// row 1, and so on. This ordering is what [`Position::ALL`] yields and what
/// [`Position::index`] encodes.
///
/// # Examples
///
/// ```
/// use gridlock_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 22);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Positions of each row, indexed by y. `ROWS[y][x]` is `(x, y)`.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        #[expect(clippy::cast_possible_truncation)]
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y][x] = Self {
                    x: x as u8,
                    y: y as u8,
                };
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// Positions of each column, indexed by x. `COLUMNS[x][y]` is `(x, y)`.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        #[expect(clippy::cast_possible_truncation)]
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x][y] = Self {
                    x: x as u8,
                    y: y as u8,
                };
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// Positions of each 3x3 box, indexed by box index (0-8, left to right,
    /// top to bottom). Cells within a box are in row-major order.
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut b = 0;
        #[expect(clippy::cast_possible_truncation)]
        while b < 9 {
            let mut i = 0;
            while i < 9 {
                boxes[b][i] = Self {
                    x: ((b % 3) * 3 + i % 3) as u8,
                    y: ((b / 3) * 3 + i / 3) as u8,
                };
                i += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Creates a position from x (column) and y (row) coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Position;
    ///
    /// let pos = Position::new(0, 8);
    /// assert_eq!((pos.x(), pos.y()), (0, 8));
    /// ```
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "Position coordinates must be in 0-8");
        Self { x, y }
    }

    /// Creates a position, returning `None` if either coordinate is out of range.
    #[must_use]
    pub const fn try_new(x: u8, y: u8) -> Option<Self> {
        if x < 9 && y < 9 {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "Cell index must be in 0-80");
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80) of this position.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(8, 0).box_index(), 2);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// assert_eq!(Position::new(8, 8).box_index(), 8);
    /// ```
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
