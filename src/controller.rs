//! Game controller
//!
//! Owns the run state, the storage backend and the tick clock. Input adapters
//! call `command()`/`submit()`, the clock calls `tick()`, and the renderer reads
//! `state()` afterwards.

use crate::clock::Clock;
use crate::highscore::BestScore;
use crate::persistence::KeyValueStore;
use crate::platform::Command;
use crate::settings::Settings;
use crate::sim::{Direction, GameEvent, GamePhase, GameState, GridDimensions, tick};

pub struct Game<S: KeyValueStore, C: Clock> {
    state: GameState,
    best: BestScore,
    /// Whether the last finished run set a new best
    new_best: bool,
    settings: Settings,
    /// Grid to use at the next `start()`
    pending_grid: GridDimensions,
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> Game<S, C> {
    pub fn new(store: S, clock: C, settings: Settings, seed: u64) -> Self {
        let best = BestScore::load(&store);
        Self {
            state: GameState::new(seed),
            best,
            new_best: false,
            settings,
            pending_grid: GridDimensions::default(),
            store,
            clock,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups (level editors, tests)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn best_score(&self) -> u64 {
        self.best.get()
    }

    pub fn is_new_best(&self) -> bool {
        self.new_best
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Grid the next run will use
    pub fn pending_grid(&self) -> GridDimensions {
        self.pending_grid
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Recompute the grid for a viewport of `width` x `height` pixels. Takes
    /// effect at the next `start()`; a run in progress keeps its grid.
    pub fn resize(&mut self, width: f32, height: f32) -> GridDimensions {
        self.set_grid(self.settings.grid_for_viewport(width, height));
        self.pending_grid
    }

    /// Use `grid` for the next run
    pub fn set_grid(&mut self, grid: GridDimensions) {
        self.pending_grid = grid.clamped(self.settings.min_tiles);
    }

    /// Begin a new run. Only possible from `Idle` or `Over`.
    pub fn start(&mut self) -> bool {
        if !self.state.phase.can_start() {
            log::debug!("Start ignored while running");
            return false;
        }
        self.state.tile_size = self.settings.effective_tile_size();
        self.state.effects = self.settings.particles;
        self.state.start(self.pending_grid);

        self.new_best = false;
        self.clock.start(self.settings.tick_period());
        log::info!(
            "Run started on {}x{} grid",
            self.state.grid.width,
            self.state.grid.height
        );
        true
    }

    /// Buffer a direction for the next tick. Ignored unless running.
    pub fn submit(&mut self, dir: Direction) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        if !self.state.input.submit(dir) {
            log::debug!("Rejected reversal to {:?}", dir);
        }
    }

    /// Apply a device command
    pub fn command(&mut self, cmd: Command) {
        match cmd {
            Command::Steer(dir) => self.submit(dir),
            Command::Confirm => {
                if self.state.phase.can_start() {
                    self.start();
                }
            }
        }
    }

    /// Advance one step. On death the clock is stopped and the best score
    /// updated before returning.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state);
        for event in &events {
            if let GameEvent::Died { cell, cause } = event {
                self.clock.stop();
                self.new_best = self.best.submit(self.state.score, &mut self.store);
                log::info!(
                    "Game over at {:?} ({:?}), score {}, best {}",
                    cell,
                    cause,
                    self.state.score,
                    self.best.get()
                );
            }
        }
        events
    }
}
