//! Game state and core simulation types
//!
//! Everything a run owns lives in `GameState`: snake, food, particles, score
//! and the input buffer. A new run discards all of it.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::{Cell, Direction, GridDimensions};
use super::input::InputBuffer;
use super::particles::{ColorTag, Particle, spawn_burst};
use crate::cell_center;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Start screen, nothing simulated yet
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended
    Over,
}

impl GamePhase {
    /// Whether a new run may begin from this phase
    pub fn can_start(self) -> bool {
        matches!(self, GamePhase::Idle | GamePhase::Over)
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Wall,
    SelfCollision,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Food consumed at `cell`
    AteFood { cell: Cell, score: u64 },
    /// Run ended; `cell` is where the burst goes
    Died { cell: Cell, cause: DeathCause },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Playfield captured at `start()`
    pub grid: GridDimensions,
    /// Pixel size of one tile, for particle placement
    pub tile_size: f32,
    /// Spawn particle bursts on events
    pub effects: bool,
    pub phase: GamePhase,
    /// Head at the front
    pub snake: VecDeque<Cell>,
    /// `None` only when the snake covers the whole board
    pub food: Option<Cell>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub score: u64,
    pub input: InputBuffer,
    /// Ticks simulated this run
    pub time_ticks: u64,
}

impl GameState {
    /// Create an idle game; nothing is placed until `start()`
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid: GridDimensions::default(),
            tile_size: TILE_SIZE,
            effects: true,
            phase: GamePhase::Idle,
            snake: VecDeque::with_capacity(START_LENGTH),
            food: None,
            particles: Vec::new(),
            score: 0,
            input: InputBuffer::default(),
            time_ticks: 0,
        }
    }

    /// Begin a new run on `grid`. Only valid from `Idle` or `Over`; returns
    /// false otherwise.
    pub fn start(&mut self, grid: GridDimensions) -> bool {
        if !self.phase.can_start() {
            return false;
        }

        self.grid = grid.clamped(MIN_TILES);
        self.score = 0;
        self.time_ticks = 0;

        let head = Cell::new(self.grid.width / 2, self.grid.height / 2);
        self.snake.clear();
        for i in 0..START_LENGTH as i32 {
            self.snake.push_back(Cell::new(head.x, head.y + i));
        }
        self.input = InputBuffer::new(Direction::Up);

        self.place_food();
        self.particles.clear();

        self.phase = GamePhase::Running;
        true
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// Move the food to a uniformly random free cell.
    ///
    /// Draws random cells and rejects occupied ones; after `FOOD_ATTEMPTS`
    /// misses it picks uniformly among the free cells instead. A full board
    /// leaves no food.
    pub fn place_food(&mut self) -> Option<Cell> {
        let grid = self.grid;
        for _ in 0..FOOD_ATTEMPTS {
            let cell = Cell::new(
                self.rng.random_range(0..grid.width),
                self.rng.random_range(0..grid.height),
            );
            if !self.snake.contains(&cell) {
                self.food = Some(cell);
                return self.food;
            }
        }

        let free: Vec<Cell> = grid.cells().filter(|c| !self.snake.contains(c)).collect();
        self.food = if free.is_empty() {
            log::warn!("No free cell left for food");
            None
        } else {
            Some(free[self.rng.random_range(0..free.len())])
        };
        self.food
    }

    /// Emit a particle burst centred on `cell`, if effects are enabled
    pub fn burst(&mut self, cell: Cell, color: ColorTag) {
        if self.effects {
            let pos = cell_center(cell, self.tile_size);
            spawn_burst(&mut self.particles, &mut self.rng, pos, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle_and_empty() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.snake.is_empty());
        assert!(state.food.is_none());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_start_layout() {
        let mut state = GameState::new(42);
        assert!(state.start(GridDimensions::new(20, 20)));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(
            state.snake,
            [Cell::new(10, 10), Cell::new(10, 11), Cell::new(10, 12)]
        );
        assert_eq!(state.input.current(), Direction::Up);
        let food = state.food.expect("food placed");
        assert!(state.grid.contains(food));
        assert!(!state.occupies(food));
    }

    #[test]
    fn test_start_rejected_while_running() {
        let mut state = GameState::new(42);
        assert!(state.start(GridDimensions::new(20, 20)));
        state.score = 30;
        assert!(!state.start(GridDimensions::new(30, 30)));
        assert_eq!(state.score, 30);
        assert_eq!(state.grid, GridDimensions::new(20, 20));
    }

    #[test]
    fn test_start_resets_after_game_over() {
        let mut state = GameState::new(42);
        state.start(GridDimensions::new(20, 20));
        state.score = 50;
        state.snake.push_back(Cell::new(10, 13));
        state.phase = GamePhase::Over;

        assert!(state.start(GridDimensions::new(24, 16)));
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), START_LENGTH);
        assert_eq!(state.head(), Some(Cell::new(12, 8)));
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_start_clamps_tiny_grid() {
        let mut state = GameState::new(5);
        state.start(GridDimensions::new(2, 1));
        assert_eq!(state.grid, GridDimensions::new(MIN_TILES, MIN_TILES));
        assert!(state.snake.iter().all(|c| state.grid.contains(*c)));
    }

    #[test]
    fn test_place_food_single_free_cell() {
        let mut state = GameState::new(9);
        state.grid = GridDimensions::new(10, 10);
        state.snake = state.grid.cells().filter(|c| *c != Cell::new(7, 3)).collect();
        assert_eq!(state.place_food(), Some(Cell::new(7, 3)));
    }

    #[test]
    fn test_place_food_full_board() {
        let mut state = GameState::new(9);
        state.grid = GridDimensions::new(10, 10);
        state.snake = state.grid.cells().collect();
        assert_eq!(state.place_food(), None);
        assert_eq!(state.food, None);
    }

    #[test]
    fn test_burst_respects_effects_flag() {
        let mut state = GameState::new(3);
        state.burst(Cell::new(2, 3), ColorTag::Food);
        assert_eq!(state.particles.len(), BURST_COUNT);
        assert_eq!(state.particles[0].pos, glam::Vec2::new(50.0, 70.0));

        state.particles.clear();
        state.effects = false;
        state.burst(Cell::new(2, 3), ColorTag::Food);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_same_seed_same_food() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        a.start(GridDimensions::new(30, 20));
        b.start(GridDimensions::new(30, 20));
        assert_eq!(a.food, b.food);
    }
}
