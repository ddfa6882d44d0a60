use shadow_rs::shadow;

shadow!(build);

// Containers
// ----------
pub mod data_structures;
pub mod grid;

// Search space and problems
// -------------------------
pub mod maze;
pub mod problems;
pub mod space;

// Algorithms
// ----------
pub mod algorithms;
