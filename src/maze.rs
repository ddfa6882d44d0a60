//! The maze: a grid of cells plus a start and an exit.

use derive_more::Display;
use thiserror::Error;

use crate::grid::Grid;
use crate::space::Position;

/// Separator placed between cells of a row when rendering.
pub const CELL_SEPARATOR: &str = " ";
/// Largest number of cells a maze is allowed to hold.
pub const MAX_CELLS: usize = 1 << 24;

/// Contents of a single maze cell.
///
/// `PathToken` and `TriedToken` are left behind by a search, `reset` turns
/// them back into `Open`. Walls are never touched by a search.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    #[display("_")]
    Open,
    #[display("*")]
    Wall,
    /// On the route found (or currently being explored).
    #[display("x")]
    PathToken,
    /// Visited and abandoned as a dead end.
    #[display("o")]
    TriedToken,
}

impl Cell {
    #[inline(always)]
    pub fn is_open(&self) -> bool {
        *self == Cell::Open
    }

    /// Whether a search left this marker behind.
    #[inline(always)]
    pub fn is_token(&self) -> bool {
        matches!(self, Cell::PathToken | Cell::TriedToken)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Cell {
    type Error = CellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '_' | '.' | ' ' => Ok(Cell::Open),
            '*' => Ok(Cell::Wall),
            'x' => Ok(Cell::PathToken),
            'o' => Ok(Cell::TriedToken),
            ch => Err(CellParseError::InvalidCharacter(ch)),
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Endpoint {
    #[display("start")]
    Start,
    #[display("exit")]
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("Cell ({row},{col}) is out of range for a {num_rows}x{num_cols} maze")]
    OutOfRange {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    },
    #[error("The {0} cell has not been set")]
    InvalidState(Endpoint),
}

/// A rectangular maze.
///
/// Not meant for concurrent use: a search marks the grid in place, so
/// searching while mutating (or searching twice at once) must be prevented by
/// the caller. `&mut self` receivers already enforce this within safe Rust.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Grid<Cell>,
    pub(crate) start: Option<Position>,
    pub(crate) exit: Option<Position>,
}

impl Maze {
    /// Whether a `num_rows × num_cols` maze fits in `MAX_CELLS`.
    pub fn safe_dimensions(num_rows: usize, num_cols: usize) -> bool {
        num_rows
            .checked_mul(num_cols)
            .is_some_and(|cells| cells <= MAX_CELLS)
    }

    /// An open maze of the given dimensions with no start or exit.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            cells: Grid::new_default(num_rows, num_cols),
            start: None,
            exit: None,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }
    pub fn num_cols(&self) -> usize {
        self.cells.num_cols()
    }
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dimensions()
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }
    pub fn exit(&self) -> Option<Position> {
        self.exit
    }

    fn checked(&self, row: usize, col: usize) -> Result<Position, MazeError> {
        let pos = Position::new(row, col);
        if self.cells.contains(pos) {
            Ok(pos)
        } else {
            Err(MazeError::OutOfRange {
                row,
                col,
                num_rows: self.num_rows(),
                num_cols: self.num_cols(),
            })
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MazeError> {
        let pos = self.checked(row, col)?;
        Ok(self.cells[pos])
    }

    pub fn set_wall(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        let pos = self.checked(row, col)?;
        self.cells[pos] = Cell::Wall;
        Ok(())
    }

    /// Sets the start, replacing any previous one.
    ///
    /// The cell content isn't checked, a walled start is allowed.
    pub fn set_start(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        self.start = Some(self.checked(row, col)?);
        Ok(())
    }

    /// Sets the exit, replacing any previous one.
    ///
    /// The cell content isn't checked, a walled exit is allowed.
    pub fn set_exit(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        self.exit = Some(self.checked(row, col)?);
        Ok(())
    }

    /// Clears every path and tried token, keeping the walls.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.is_token()) {
            *cell = Cell::Open;
        }
    }

    /// Positions currently marked as path, row-major.
    pub fn path_cells(&self) -> Vec<Position> {
        self.cells
            .iter_pos()
            .filter(|(_, c)| **c == Cell::PathToken)
            .map(|(p, _)| p)
            .collect()
    }

    /// Row-major text dump, one line per row with cells separated by a space.
    ///
    /// ```
    /// use maze_search::maze::Maze;
    ///
    /// let mut maze = Maze::new(2, 3);
    /// maze.set_wall(0, 1).unwrap();
    /// assert_eq!(maze.render(), "_ * _\n_ _ _");
    /// ```
    pub fn render(&self) -> String {
        self.cells
            .rows()
            .map(|row| {
                row.iter()
                    .map(Cell::to_string)
                    .collect::<Vec<_>>()
                    .join(CELL_SEPARATOR)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl std::fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (rows, cols) = self.dimensions();
        write!(f, "Maze({rows}x{cols}, s:{:?}, e:{:?})", self.start, self.exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_open() {
        let maze = Maze::new(3, 4);
        assert_eq!(maze.dimensions(), (3, 4));
        assert_eq!(maze.start(), None);
        assert_eq!(maze.exit(), None);
        assert!(maze.cells.iter().all(Cell::is_open));
    }

    #[test]
    fn dimension_limits() {
        assert!(Maze::safe_dimensions(0, usize::MAX));
        assert!(Maze::safe_dimensions(1, MAX_CELLS));
        assert!(!Maze::safe_dimensions(1, MAX_CELLS + 1));
        assert!(!Maze::safe_dimensions(2, usize::MAX));
        assert!(!Maze::safe_dimensions(1 << 16, 1 << 16));
    }

    #[test]
    fn render_without_columns() {
        assert_eq!(Maze::new(3, 0).render(), "\n\n");
        assert_eq!(Maze::new(0, 3).render(), "");
    }

    #[test]
    fn out_of_range() {
        let mut maze = Maze::new(2, 2);
        let err = MazeError::OutOfRange {
            row: 2,
            col: 0,
            num_rows: 2,
            num_cols: 2,
        };
        assert_eq!(maze.set_wall(2, 0), Err(err));
        assert!(maze.set_start(0, 2).is_err());
        assert!(maze.set_exit(5, 5).is_err());
        assert!(maze.cell(0, 2).is_err());

        // Nothing changed
        assert_eq!(maze.start(), None);
        assert_eq!(maze.exit(), None);
        assert!(maze.cells.iter().all(Cell::is_open));
    }

    #[test]
    fn start_and_exit_overwrite() {
        let mut maze = Maze::new(3, 3);
        maze.set_wall(1, 1).unwrap();
        maze.set_start(0, 0).unwrap();
        maze.set_start(1, 1).unwrap();
        maze.set_exit(2, 2).unwrap();
        maze.set_exit(2, 1).unwrap();
        assert_eq!(maze.start(), Some(Position::new(1, 1)));
        assert_eq!(maze.exit(), Some(Position::new(2, 1)));
        assert_eq!(maze.cell(1, 1), Ok(Cell::Wall));
    }

    #[test]
    fn reset_keeps_walls() {
        let mut maze = Maze::new(2, 2);
        maze.set_wall(0, 0).unwrap();
        maze.cells[Position::new(0, 1)] = Cell::PathToken;
        maze.cells[Position::new(1, 0)] = Cell::TriedToken;

        maze.reset();
        assert_eq!(maze.render(), "* _\n_ _");

        let once = maze.clone();
        maze.reset();
        assert_eq!(maze, once);
    }

    #[test]
    fn render_glyphs() {
        let mut maze = Maze::new(1, 4);
        maze.set_wall(0, 0).unwrap();
        maze.cells[Position::new(0, 1)] = Cell::PathToken;
        maze.cells[Position::new(0, 2)] = Cell::TriedToken;
        assert_eq!(maze.render(), "* x o _");
        assert_eq!(maze.to_string(), maze.render());
    }

    #[test]
    fn render_walls_only() {
        let mut maze = Maze::new(3, 3);
        let walls = [(0, 2), (1, 1), (2, 0)];
        for (r, c) in walls {
            maze.set_wall(r, c).unwrap();
        }
        maze.reset();

        let rendered = maze.render();
        for (r, line) in rendered.lines().enumerate() {
            for (c, glyph) in line.split(CELL_SEPARATOR).enumerate() {
                let expected = if walls.contains(&(r, c)) { "*" } else { "_" };
                assert_eq!(glyph, expected);
            }
        }
    }

    #[test]
    fn cell_glyphs_parse_back() {
        for cell in [Cell::Open, Cell::Wall, Cell::PathToken, Cell::TriedToken] {
            let glyph = cell.to_string().chars().next().unwrap();
            assert_eq!(Cell::try_from(glyph), Ok(cell));
        }
        assert_eq!(Cell::try_from('.'), Ok(Cell::Open));
        assert_eq!(
            Cell::try_from('#'),
            Err(CellParseError::InvalidCharacter('#'))
        );
    }

    #[test]
    fn path_cells_row_major() {
        let mut maze = Maze::new(2, 2);
        maze.cells[Position::new(1, 1)] = Cell::PathToken;
        maze.cells[Position::new(0, 1)] = Cell::PathToken;
        assert_eq!(
            maze.path_cells(),
            vec![Position::new(0, 1), Position::new(1, 1)]
        );
    }
}
