//! Loading mazes from text files.
//!
//! ```text
//! 5 5        <- rows cols
//! 4 1        <- start row, col
//! 3 4        <- exit row, col
//! *****
//! *.*.*
//! *...*
//! *.*..
//! *.***
//! ```
//!
//! Grid lines use the cell glyphs (`*` wall, `.`/`_`/space open, `x` and `o`
//! for search tokens). Short lines are padded with open cells. A line in
//! `Maze::render` format (cells separated by single spaces) is accepted too.

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::maze::Cell;
use crate::maze::CellParseError;
use crate::maze::Maze;
use crate::maze::MazeError;
use crate::space::Position;

const HEADER_LINES: usize = 3;

#[derive(Debug, Error)]
pub enum MazeFileParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid header line {line}: '{content}'")]
    InvalidHeader { line: usize, content: String },
    #[error("A {num_rows}x{num_cols} maze is too large")]
    TooLarge { num_rows: usize, num_cols: usize },
    #[error("Expected {expected} grid rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("Row {row} has {width} cells, but the maze has {num_cols} columns")]
    RowTooWide {
        row: usize,
        width: usize,
        num_cols: usize,
    },
    #[error("Invalid cell {e} found at ({row},{col})")]
    InvalidCell {
        e: CellParseError,
        row: usize,
        col: usize,
    },
    #[error("Invalid maze: {0}")]
    Maze(#[from] MazeError),
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
}

/// Parses a header line holding exactly two numbers.
fn parse_pair(line: usize, content: &str) -> Result<(usize, usize), MazeFileParseError> {
    let invalid = || MazeFileParseError::InvalidHeader {
        line,
        content: content.to_string(),
    };

    let mut numbers = content.split_whitespace().map(str::parse::<usize>);
    match (numbers.next(), numbers.next(), numbers.next()) {
        (Some(Ok(a)), Some(Ok(b)), None) => Ok((a, b)),
        _ => Err(invalid()),
    }
}

/// Splits a grid line into cell glyphs.
///
/// Lines in render format (`* _ x`) have their separators dropped, anything
/// else is read one character per cell.
fn glyphs(line: &str, num_cols: usize) -> Vec<char> {
    let chars: Vec<char> = line.chars().collect();
    let rendered = num_cols > 1
        && chars.len() == 2 * num_cols - 1
        && chars.iter().skip(1).step_by(2).all(|&c| c == ' ');

    if rendered {
        chars.into_iter().step_by(2).collect()
    } else {
        chars
    }
}

impl std::convert::TryFrom<&str> for Maze {
    type Error = MazeFileParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.iter().all(|l| l.trim().is_empty()) {
            return Err(MazeFileParseError::EmptyInput);
        }
        if lines.len() < HEADER_LINES {
            return Err(MazeFileParseError::InvalidHeader {
                line: lines.len(),
                content: String::new(),
            });
        }

        let (num_rows, num_cols) = parse_pair(0, lines[0])?;
        let (start_row, start_col) = parse_pair(1, lines[1])?;
        let (exit_row, exit_col) = parse_pair(2, lines[2])?;

        if !Maze::safe_dimensions(num_rows, num_cols) {
            return Err(MazeFileParseError::TooLarge { num_rows, num_cols });
        }

        let grid = &lines[HEADER_LINES..];
        if grid.len() < num_rows {
            return Err(MazeFileParseError::MissingRows {
                expected: num_rows,
                found: grid.len(),
            });
        }
        if grid.len() > num_rows {
            log::debug!(
                "Ignoring {} lines after the {num_rows} grid rows",
                grid.len() - num_rows
            );
        }

        let mut maze = Maze::new(num_rows, num_cols);
        for (row, line) in grid.iter().take(num_rows).enumerate() {
            let glyphs = glyphs(line.trim_end_matches('\r'), num_cols);
            if glyphs.len() > num_cols {
                return Err(MazeFileParseError::RowTooWide {
                    row,
                    width: glyphs.len(),
                    num_cols,
                });
            }

            for (col, ch) in glyphs.into_iter().enumerate() {
                let cell = Cell::try_from(ch)
                    .map_err(|e| MazeFileParseError::InvalidCell { e, row, col })?;
                maze.cells[Position::new(row, col)] = cell;
            }
        }

        maze.set_start(start_row, start_col)?;
        maze.set_exit(exit_row, exit_col)?;

        Ok(maze)
    }
}

impl std::convert::TryFrom<&Path> for Maze {
    type Error = MazeFileParseError;

    fn try_from(p: &Path) -> Result<Self, Self::Error> {
        let contents = std::fs::read_to_string(p).map_err(|e| MazeFileParseError::IOError {
            p: PathBuf::from(p),
            e,
        })?;
        log::debug!("Loaded {} bytes from {p:?}", contents.len());

        Maze::try_from(contents.as_str())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn parse_with_header() {
        let maze = Maze::try_from(indoc! {"
            5 5
            4 1
            3 4
            *****
            *.*.*
            *...*
            *.*..
            *.***
        "})
        .unwrap();

        assert_eq!(maze.dimensions(), (5, 5));
        assert_eq!(maze.start(), Some(Position::new(4, 1)));
        assert_eq!(maze.exit(), Some(Position::new(3, 4)));
        assert_eq!(
            maze.render(),
            indoc! {"
                * * * * *
                * _ * _ *
                * _ _ _ *
                * _ * _ _
                * _ * * *"}
        );
    }

    #[test]
    fn short_lines_are_open() {
        let maze = Maze::try_from("2 3\n0 0\n1 2\n*\n\n").unwrap();
        assert_eq!(maze.render(), "* _ _\n_ _ _");
    }

    #[test]
    fn rendered_rows_load_back() {
        let mut maze = Maze::new(2, 3);
        maze.set_wall(0, 1).unwrap();
        maze.set_start(0, 0).unwrap();
        maze.set_exit(1, 2).unwrap();
        maze.find_path().unwrap();

        let file = format!("2 3\n0 0\n1 2\n{}\n", maze.render());
        let loaded = Maze::try_from(file.as_str()).unwrap();
        assert_eq!(loaded, maze);
    }

    #[test]
    fn header_errors() {
        assert!(matches!(
            Maze::try_from(""),
            Err(MazeFileParseError::EmptyInput)
        ));
        assert!(matches!(
            Maze::try_from("3 3\n0 0\n"),
            Err(MazeFileParseError::InvalidHeader { line: 2, .. })
        ));
        assert!(matches!(
            Maze::try_from("3 x\n0 0\n1 1\n"),
            Err(MazeFileParseError::InvalidHeader { line: 0, .. })
        ));
        assert!(matches!(
            Maze::try_from("1 1\n0 0 0\n0 0\n_\n"),
            Err(MazeFileParseError::InvalidHeader { line: 1, .. })
        ));
    }

    #[test]
    fn oversized_header() {
        assert!(matches!(
            Maze::try_from("2 18446744073709551615\n0 0\n0 0\n*\n*\n"),
            Err(MazeFileParseError::TooLarge {
                num_rows: 2,
                num_cols: usize::MAX
            })
        ));
        assert!(matches!(
            Maze::try_from("1 4611686018427387904\n0 0\n0 0\n*\n"),
            Err(MazeFileParseError::TooLarge { num_rows: 1, .. })
        ));
        // Rejected before the grid lines are counted.
        assert!(matches!(
            Maze::try_from("4611686018427387904 1\n0 0\n0 0\n*\n"),
            Err(MazeFileParseError::TooLarge { .. })
        ));
    }

    #[test]
    fn grid_errors() {
        assert!(matches!(
            Maze::try_from("3 2\n0 0\n1 1\n__\n__\n"),
            Err(MazeFileParseError::MissingRows {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            Maze::try_from("1 2\n0 0\n0 1\n___\n"),
            Err(MazeFileParseError::RowTooWide {
                row: 0,
                width: 3,
                num_cols: 2
            })
        ));
        assert!(matches!(
            Maze::try_from("2 2\n0 0\n0 1\n__\n_#\n"),
            Err(MazeFileParseError::InvalidCell {
                e: CellParseError::InvalidCharacter('#'),
                row: 1,
                col: 1
            })
        ));
    }

    #[test]
    fn endpoints_out_of_range() {
        assert!(matches!(
            Maze::try_from("2 2\n0 0\n2 0\n__\n__\n"),
            Err(MazeFileParseError::Maze(MazeError::OutOfRange {
                row: 2,
                col: 0,
                ..
            }))
        ));
    }

    #[test]
    fn missing_file() {
        let p = Path::new("data/mazes/does-not-exist.txt");
        assert!(matches!(
            Maze::try_from(p),
            Err(MazeFileParseError::IOError { .. })
        ));
    }

    #[test]
    fn solve_fixture() {
        // data/mazes/mazefile.txt
        let mut maze = Maze::try_from(Path::new("data/mazes/mazefile.txt")).unwrap();
        assert_eq!(maze.find_path(), Ok(true));

        let path = maze.path_cells();
        assert!(path.contains(&maze.start().unwrap()));
        assert!(path.contains(&maze.exit().unwrap()));
    }

    #[test]
    fn no_exit_fixture() {
        // data/mazes/walled-in.txt
        let mut maze = Maze::try_from(Path::new("data/mazes/walled-in.txt")).unwrap();
        assert_eq!(maze.find_path(), Ok(false));
        assert!(maze.path_cells().is_empty());
    }

    #[test]
    fn serpentine_fixture() {
        // data/mazes/serpentine.txt
        let mut maze = Maze::try_from(Path::new("data/mazes/serpentine.txt")).unwrap();
        assert_eq!(maze.dimensions(), (21, 31));
        assert_eq!(maze.find_path(), Ok(true));

        // Every corridor walked end to end, except the last one past the exit.
        assert!(!maze.render().contains('o'));
        assert_eq!(maze.path_cells().len(), 11 * 31 + 10 - 30);
    }
}
