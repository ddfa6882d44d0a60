//! Containers used by the search.

pub mod stack;
