//! Implementation of search algorithms.
//!
//! These algorithms look for a route through a `Maze`, marking it in place.

pub mod depth_first;
