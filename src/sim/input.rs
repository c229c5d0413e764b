//! Direction input buffer
//!
//! Input events may arrive any number of times between ticks. Only the last
//! accepted one is applied, and reversal is judged against the direction the
//! snake is actually moving in, not against what is buffered.

use super::grid::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBuffer {
    /// Direction applied on the most recent tick
    current: Direction,
    /// Direction to apply on the next tick
    next: Direction,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(Direction::Up)
    }
}

impl InputBuffer {
    pub fn new(initial: Direction) -> Self {
        Self {
            current: initial,
            next: initial,
        }
    }

    /// Buffer `dir` for the next tick. Returns false (and changes nothing) if
    /// `dir` would reverse the snake into its own neck.
    pub fn submit(&mut self, dir: Direction) -> bool {
        if dir == self.current.opposite() {
            return false;
        }
        self.next = dir;
        true
    }

    /// Promote the buffered direction to the current one
    pub fn apply(&mut self) -> Direction {
        self.current = self.next;
        self.current
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn pending(&self) -> Direction {
        self.next
    }
}
