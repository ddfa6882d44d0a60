//! Depth-first search with explicit backtracking.
//!
//! The search marks the maze as it goes. Cells on the tentative route hold a
//! `PathToken`, dead ends become `TriedToken`, and only `Open` cells can be
//! entered. Every cell is entered at most once per search, so it always
//! terminates after O(rows × cols) steps.
//!
//! ```text
//! current == exit?  ──yes──▶ unwind frontier as path ──▶ Found
//!       │no
//!       ▼
//! first open neighbour in ↑ → ↓ ← order?
//!       │yes: push current, mark it path, move  ──▶ Advanced
//!       │no:  mark current tried, pop frontier
//!       ▼
//! frontier empty?  ──yes──▶ Exhausted
//!       │no: move to popped cell  ──▶ Backtracked
//! ```

use derive_more::Display;

use crate::data_structures::stack::Stack;
use crate::data_structures::stack::StackUnderflow;
use crate::maze::Cell;
use crate::maze::Endpoint;
use crate::maze::Maze;
use crate::maze::MazeError;
use crate::space::Direction;
use crate::space::Position;

/// A single transition of the search.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Step {
    #[display("{from} {direction} {to}")]
    Advanced {
        from: Position,
        to: Position,
        direction: Direction,
    },
    #[display("{from} ⤺ {to}")]
    Backtracked { from: Position, to: Position },
    /// Reached the exit. `path_len` counts the cells marked as path, start
    /// and exit included.
    #[display("Found({path_len})")]
    Found { path_len: usize },
    #[display("Exhausted")]
    Exhausted,
}

impl Step {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Found { .. } | Step::Exhausted)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub advances: usize,
    pub backtracks: usize,
}

/// A depth-first search running over a borrowed maze.
///
/// Drive it with [`DepthFirstSearch::step`], iterate over its steps, or let
/// [`DepthFirstSearch::run`] take it to the end.
#[derive(Debug)]
pub struct DepthFirstSearch<'m> {
    maze: &'m mut Maze,
    /// Route from the start up to (excluding) `current`.
    frontier: Stack<Position>,
    current: Position,
    exit: Position,
    outcome: Option<Step>,
    stats: SearchStats,
}

impl<'m> DepthFirstSearch<'m> {
    pub fn new(maze: &'m mut Maze) -> Result<Self, MazeError> {
        let start = maze.start.ok_or(MazeError::InvalidState(Endpoint::Start))?;
        let exit = maze.exit.ok_or(MazeError::InvalidState(Endpoint::Exit))?;
        log::debug!("DFS on {maze:?} from {start} to {exit}");

        Ok(Self {
            maze,
            frontier: Stack::new(),
            current: start,
            exit,
            outcome: None,
            stats: SearchStats::default(),
        })
    }

    pub fn current(&self) -> Position {
        self.current
    }
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }
    #[cfg(feature = "inspect")]
    pub fn frontier(&self) -> &Stack<Position> {
        &self.frontier
    }

    /// Runs the search to completion, returning whether the exit was reached.
    pub fn run(mut self) -> bool {
        loop {
            match self.step() {
                Step::Found { .. } => return true,
                Step::Exhausted => return false,
                Step::Advanced { .. } | Step::Backtracked { .. } => {}
            }
        }
    }

    /// Performs one transition.
    ///
    /// Once the search is over this keeps returning the final step without
    /// touching the maze.
    pub fn step(&mut self) -> Step {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        self.verify_frontier();

        let step = if self.current == self.exit {
            self.commit_path()
        } else if let Some((direction, to)) = self.first_open_neighbour() {
            self.advance(direction, to)
        } else {
            self.backtrack()
        };
        log::trace!("{step}");

        if step.is_terminal() {
            log::debug!(
                "DFS {step} after {} advances and {} backtracks",
                self.stats.advances,
                self.stats.backtracks
            );
            self.outcome = Some(step);
        }
        step
    }

    fn first_open_neighbour(&self) -> Option<(Direction, Position)> {
        Direction::PRIORITY.into_iter().find_map(|direction| {
            let next = self.current.step(direction)?;
            let cell = self.maze.cells.get(next)?;
            cell.is_open().then_some((direction, next))
        })
    }

    fn advance(&mut self, direction: Direction, to: Position) -> Step {
        let from = self.current;
        self.frontier.push(from);
        self.maze.cells[from] = Cell::PathToken;
        self.current = to;
        self.stats.advances += 1;

        Step::Advanced {
            from,
            to,
            direction,
        }
    }

    fn backtrack(&mut self) -> Step {
        let from = self.current;
        self.maze.cells[from] = Cell::TriedToken;

        match self.frontier.pop() {
            Ok(to) => {
                self.current = to;
                self.stats.backtracks += 1;
                Step::Backtracked { from, to }
            }
            Err(StackUnderflow) => Step::Exhausted,
        }
    }

    fn commit_path(&mut self) -> Step {
        let path_len = self.frontier.len() + 1;
        while let Ok(p) = self.frontier.pop() {
            self.maze.cells[p] = Cell::PathToken;
        }
        self.maze.cells[self.exit] = Cell::PathToken;

        Step::Found { path_len }
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_frontier(&self) {
        // All good... (hopefully)
    }

    #[cfg(feature = "verify")]
    fn verify_frontier(&self) {
        let mut next = self.current;
        for p in self.frontier.iter().rev() {
            // Every frontier cell,
            // - is still marked as path.
            assert_eq!(self.maze.cells[*p], Cell::PathToken, "{p} left the path");
            // - is one move away from the following one.
            assert!(p.is_adjacent(&next), "{p} and {next} are not adjacent");
            next = *p;
        }
        assert_eq!(Some(next), self.maze.start, "frontier doesn't begin at start");
    }
}

impl Iterator for DepthFirstSearch<'_> {
    type Item = Step;

    /// Yields every step, the final `Found`/`Exhausted` included.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        Some(self.step())
    }
}

impl Maze {
    /// Looks for a route from the start to the exit.
    ///
    /// On success the route (start and exit included) is left marked with
    /// path tokens, and cells explored and abandoned hold tried tokens. On
    /// failure every cell reachable from the start ends up tried.
    ///
    /// Leftover tokens from an earlier search block the way just like walls,
    /// call [`Maze::reset`] first for a fresh search.
    ///
    /// ```
    /// use maze_search::maze::Maze;
    ///
    /// let mut maze = Maze::new(2, 2);
    /// maze.set_wall(0, 1).unwrap();
    /// maze.set_start(0, 0).unwrap();
    /// maze.set_exit(1, 1).unwrap();
    /// assert_eq!(maze.find_path(), Ok(true));
    /// assert_eq!(maze.render(), "x *\nx x");
    /// ```
    pub fn find_path(&mut self) -> Result<bool, MazeError> {
        Ok(DepthFirstSearch::new(self)?.run())
    }
}
