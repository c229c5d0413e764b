//! Fixed-interval simulation tick
//!
//! One call advances the snake by one cell and reports what happened.

use super::grid::Cell;
use super::particles::{ColorTag, advance_particles};
use super::state::{DeathCause, GameEvent, GamePhase, GameState};
use crate::consts::FOOD_REWARD;

/// Advance the game state by one step. Does nothing unless running.
///
/// Collisions are tested against the snake as it was before this move, so
/// stepping onto the current tail cell is fatal even though the tail would
/// have moved away.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }
    let Some(head) = state.head() else {
        return events;
    };

    state.time_ticks += 1;

    let dir = state.input.apply();
    let next = head.step(dir);

    if !state.grid.contains(next) {
        die(state, head, DeathCause::Wall, &mut events);
        return events;
    }
    if state.occupies(next) {
        die(state, next, DeathCause::SelfCollision, &mut events);
        return events;
    }

    state.snake.push_front(next);

    if state.food == Some(next) {
        state.score += FOOD_REWARD;
        state.burst(next, ColorTag::Food);
        let food = state.place_food();
        log::debug!("Ate food at {:?}, score {}, next food {:?}", next, state.score, food);
        events.push(GameEvent::AteFood {
            cell: next,
            score: state.score,
        });
    } else {
        state.snake.pop_back();
    }

    advance_particles(&mut state.particles);
    events
}

fn die(state: &mut GameState, at: Cell, cause: DeathCause, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::Over;
    state.burst(at, ColorTag::Danger);
    events.push(GameEvent::Died { cell: at, cause });
}
