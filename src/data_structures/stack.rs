
use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("Stack underflow")]
pub struct StackUnderflow;

/// LIFO stack.
///
/// Unlike `Vec::pop`, an empty stack is reported as an error so callers can
/// tell "nothing left" apart from a stored `None`.
///
/// ```
/// use maze_search::data_structures::stack::Stack;
/// use maze_search::data_structures::stack::StackUnderflow;
///
/// let mut s = Stack::new();
/// s.push(1);
/// s.push(2);
/// assert_eq!(s.peek(), Ok(&2));
/// assert_eq!(s.pop(), Ok(2));
/// assert_eq!(s.pop(), Ok(1));
/// assert_eq!(s.pop(), Err(StackUnderflow));
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }
    pub fn with_capacity(s: usize) -> Self {
        Self {
            items: Vec::with_capacity(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T, StackUnderflow> {
        self.items.pop().ok_or(StackUnderflow)
    }

    pub fn peek(&self) -> Result<&T, StackUnderflow> {
        self.items.last().ok_or(StackUnderflow)
    }

    /// Items from the bottom to the top of the stack.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
