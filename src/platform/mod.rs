//! Platform input translation
//!
//! Turns raw device input into game commands. Nothing here touches game
//! state; the controller decides what a command means in the current phase.

use crate::sim::Direction;

/// A device-independent player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change heading
    Steer(Direction),
    /// Start / restart
    Confirm,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowUp" => Some(Command::Steer(Direction::Up)),
        "ArrowDown" => Some(Command::Steer(Direction::Down)),
        "ArrowLeft" => Some(Command::Steer(Direction::Left)),
        "ArrowRight" => Some(Command::Steer(Direction::Right)),
        " " | "Enter" => Some(Command::Confirm),
        _ => None,
    }
}

/// Keys whose default action (page scrolling) should be suppressed
pub fn suppresses_scroll(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " ")
}

/// Direction of a swipe from `start` to `end` in screen coordinates (y down).
/// The dominant axis wins; a tap with no movement yields nothing.
pub fn swipe_direction(start: (f32, f32), end: (f32, f32)) -> Option<Direction> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;

    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy > 0.0 {
        Some(Direction::Down)
    } else if dy < 0.0 {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Tracks the start point of an in-progress swipe
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the swipe at `(x, y)`
    pub fn end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let start = self.start.take()?;
        swipe_direction(start, (x, y))
    }
}
