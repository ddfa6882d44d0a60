//! Maze inputs.
//!
//! Loaders that build a `Maze` with its start and exit from external
//! descriptions.

pub mod maze_file;
