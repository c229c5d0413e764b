//! Playfield geometry: grid dimensions, cells and directions

use serde::{Deserialize, Serialize};

use crate::consts::MIN_TILES;

/// Playfield size in tiles. Fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub width: i32,
    pub height: i32,
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
        }
    }
}

impl GridDimensions {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Fit as many whole tiles as possible into the viewport, leaving `margin`
    /// pixels of slack, but never fewer than `min_tiles` per axis.
    pub fn from_viewport(
        viewport_w: f32,
        viewport_h: f32,
        tile_size: f32,
        margin: f32,
        min_tiles: i32,
    ) -> Self {
        let fit = |extent: f32| -> i32 {
            if tile_size <= 0.0 {
                return min_tiles;
            }
            let tiles = ((extent - margin) / tile_size).floor();
            if tiles.is_finite() { tiles as i32 } else { 0 }
        };
        Self::new(fit(viewport_w), fit(viewport_h)).clamped(min_tiles)
    }

    /// Raise both axes to at least `min_tiles` (and at least `MIN_TILES` overall)
    pub fn clamped(self, min_tiles: i32) -> Self {
        let floor = min_tiles.max(MIN_TILES);
        Self {
            width: self.width.max(floor),
            height: self.height.max(floor),
        }
    }

    /// Whether `cell` lies inside `[0, width) x [0, height)`
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

/// A grid square. May lie outside the grid while being tested as a candidate head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step in `dir`
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Movement direction. Screen coordinates: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse a unit vector; anything else (including zero) is `None`
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}
