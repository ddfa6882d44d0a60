//! Coordinates and moves on a rectangular grid.

use derive_more::Display;

/// A cell address, `(row, col)`.
///
/// Rows grow downwards and columns grow to the right, so `(0, 0)` is the
/// top-left corner of a grid.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("({row},{col})")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in the given direction.
    ///
    /// Returns `None` when the move would leave the non-negative quadrant. The
    /// far edges are not known here, callers check them against a grid.
    ///
    /// ```
    /// use maze_search::space::Direction;
    /// use maze_search::space::Position;
    ///
    /// let p = Position::new(0, 3);
    /// assert_eq!(p.step(Direction::Up), None);
    /// assert_eq!(p.step(Direction::Right), Some(Position::new(0, 4)));
    /// assert_eq!(p.step(Direction::Down), Some(Position::new(1, 3)));
    /// assert_eq!(p.step(Direction::Left), Some(Position::new(0, 2)));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn step(&self, direction: Direction) -> Option<Position> {
        #[rustfmt::skip]
        let (row, col) = match direction {
            Direction::Up    => (self.row.checked_sub(1)?, self.col                ),
            Direction::Right => (self.row,                 self.col.checked_add(1)?),
            Direction::Down  => (self.row.checked_add(1)?, self.col                ),
            Direction::Left  => (self.row,                 self.col.checked_sub(1)?),
        };

        Some(Position { row, col })
    }

    /// Whether `other` is exactly one orthogonal move away.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

/// One of the four orthogonal moves.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    #[display("↑")]
    Up = 0, // row--
    #[display("→")]
    Right = 1, // col++
    #[display("↓")]
    Down = 2, // row++
    #[display("←")]
    Left = 3, // col--
}

impl Direction {
    /// Expansion order used by the depth-first search.
    ///
    /// Changing it changes which route gets found when there are many.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}
