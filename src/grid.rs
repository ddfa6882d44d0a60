//! Fixed-size 2-D container.

use std::ops;

use crate::space::Position;

/// A `num_rows × num_cols` grid stored row-major in a single buffer.
///
/// The dimensions are fixed at construction. Lookups through `get`/`get_mut`
/// are bounded and return `None` outside the grid, while `Index`/`IndexMut`
/// panic, so they are only used where the position was already checked.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    buf: Vec<T>,
    num_rows: usize,
    num_cols: usize,
}

impl<T> Grid<T> {
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.num_rows && pos.col < self.num_cols
    }

    #[inline(always)]
    fn pos_to_idx(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row * self.num_cols + pos.col)
    }

    #[inline(always)]
    fn idx_to_pos(&self, idx: usize) -> Position {
        debug_assert!(idx < self.buf.len());
        Position::new(idx / self.num_cols, idx % self.num_cols)
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.pos_to_idx(pos).map(|i| &self.buf[i])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.pos_to_idx(pos).map(|i| &mut self.buf[i])
    }

    /// Stores `item` at `pos`, handing it back if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, item: T) -> Result<(), T> {
        match self.get_mut(pos) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(item),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    /// Every position paired with its item, row-major.
    pub fn iter_pos(&self) -> impl Iterator<Item = (Position, &T)> {
        self.buf
            .iter()
            .enumerate()
            .map(|(i, item)| (self.idx_to_pos(i), item))
    }

    /// The grid one row at a time. Always `num_rows` slices, even when they
    /// are empty.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        let num_cols = self.num_cols;
        (0..self.num_rows).map(move |r| &self.buf[r * num_cols..(r + 1) * num_cols])
    }
}

impl<T: Clone> Grid<T> {
    pub fn new(item: T, num_rows: usize, num_cols: usize) -> Self {
        Self {
            buf: vec![item; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    pub fn new_default(num_rows: usize, num_cols: usize) -> Self {
        Self::new(T::default(), num_rows, num_cols)
    }
}

impl<T> ops::Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        self.get(pos)
            .unwrap_or_else(|| panic!("Index out of bounds: {pos}"))
    }
}

impl<T> ops::IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        self.get_mut(pos)
            .unwrap_or_else(|| panic!("Index out of bounds: {pos}"))
    }
}

impl<T> std::fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Grid({}x{})", self.num_rows, self.num_cols)
    }
}
