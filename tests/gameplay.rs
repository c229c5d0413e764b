//! End-to-end runs through the controller with in-memory storage and a
//! hand-driven clock.

use neon_snake::clock::{Clock, ManualClock};
use neon_snake::consts::{BEST_SCORE_KEY, BURST_COUNT};
use neon_snake::persistence::{KeyValueStore, MemoryStore};
use neon_snake::platform::{Command, command_for_key, swipe_direction};
use neon_snake::sim::{Cell, DeathCause, Direction, GameEvent, GamePhase, GridDimensions, InputBuffer};
use neon_snake::{Game, Settings};

fn new_game(store: MemoryStore) -> Game<MemoryStore, ManualClock> {
    let mut game = Game::new(store, ManualClock::new(), Settings::default(), 2024);
    game.set_grid(GridDimensions::new(20, 20));
    game
}

#[test]
fn test_first_tick_without_input() {
    let mut game = new_game(MemoryStore::new());
    assert!(game.start());
    assert_eq!(
        game.state().snake,
        [Cell::new(10, 10), Cell::new(10, 11), Cell::new(10, 12)]
    );
    // Keep food out of the way
    game.state_mut().food = Some(Cell::new(0, 0));

    let events = game.tick();
    assert!(events.is_empty());
    assert_eq!(
        game.state().snake,
        [Cell::new(10, 9), Cell::new(10, 10), Cell::new(10, 11)]
    );
    assert_eq!(game.state().score, 0);
}

#[test]
fn test_first_tick_eats_food() {
    let mut game = new_game(MemoryStore::new());
    game.start();
    game.state_mut().food = Some(Cell::new(10, 9));

    let events = game.tick();
    assert_eq!(
        events,
        vec![GameEvent::AteFood {
            cell: Cell::new(10, 9),
            score: 10
        }]
    );
    let state = game.state();
    assert_eq!(state.score, 10);
    assert_eq!(
        state.snake,
        [
            Cell::new(10, 9),
            Cell::new(10, 10),
            Cell::new(10, 11),
            Cell::new(10, 12)
        ]
    );
    let food = state.food.expect("food relocated");
    assert!(!state.snake.contains(&food));
    assert_eq!(state.particles.len(), BURST_COUNT);
}

#[test]
fn test_wall_death_updates_best() {
    let store = MemoryStore::new().with_entry(BEST_SCORE_KEY, "20");
    let mut game = new_game(store);
    game.start();
    {
        let state = game.state_mut();
        state.snake = [(0, 5), (1, 5), (2, 5)].into_iter().map(Cell::from).collect();
        state.input = InputBuffer::new(Direction::Left);
        state.score = 30;
    }

    let events = game.tick();
    assert_eq!(
        events,
        vec![GameEvent::Died {
            cell: Cell::new(0, 5),
            cause: DeathCause::Wall
        }]
    );
    assert_eq!(game.phase(), GamePhase::Over);
    assert!(!game.clock().is_running());
    assert_eq!(game.best_score(), 30);
    assert_eq!(game.store().get(BEST_SCORE_KEY).as_deref(), Some("30"));
}

#[test]
fn test_wall_death_below_best_keeps_best() {
    let store = MemoryStore::new().with_entry(BEST_SCORE_KEY, "50");
    let mut game = new_game(store);
    game.start();
    {
        let state = game.state_mut();
        state.snake = [(0, 5), (1, 5), (2, 5)].into_iter().map(Cell::from).collect();
        state.input = InputBuffer::new(Direction::Left);
        state.score = 50;
    }

    game.tick();
    assert_eq!(game.phase(), GamePhase::Over);
    assert_eq!(game.best_score(), 50);
    assert!(!game.is_new_best());
}

#[test]
fn test_reversal_via_keyboard_is_ignored() {
    let mut game = new_game(MemoryStore::new());
    game.start();
    game.state_mut().food = Some(Cell::new(0, 0));

    // Moving up; Down is a reversal
    game.command(command_for_key("ArrowDown").unwrap());
    game.tick();
    assert_eq!(game.state().head(), Some(Cell::new(10, 9)));
}

#[test]
fn test_swipe_steers_snake() {
    let mut game = new_game(MemoryStore::new());
    game.start();
    game.state_mut().food = Some(Cell::new(0, 0));

    let dir = swipe_direction((200.0, 300.0), (120.0, 310.0)).unwrap();
    game.command(Command::Steer(dir));
    game.tick();
    assert_eq!(game.state().head(), Some(Cell::new(9, 10)));
}

#[test]
fn test_run_restart_cycle() {
    let mut game = new_game(MemoryStore::new());
    assert_eq!(game.phase(), GamePhase::Idle);

    game.command(Command::Confirm);
    assert_eq!(game.phase(), GamePhase::Running);
    game.state_mut().food = Some(Cell::new(0, 0));

    // Run straight up into the top wall: head at y=10 needs 11 ticks
    let mut ticks = 0;
    while game.clock().is_running() {
        game.tick();
        ticks += 1;
        assert!(ticks <= 11);
    }
    assert_eq!(ticks, 11);
    assert_eq!(game.phase(), GamePhase::Over);

    game.command(Command::Confirm);
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().snake.len(), 3);
    assert_eq!(game.clock().starts, 2);
    assert_eq!(game.clock().stops, 1);
}

#[test]
fn test_resize_applies_on_next_run() {
    let mut game = new_game(MemoryStore::new());
    game.start();
    game.resize(640.0, 480.0);
    assert_eq!(game.state().grid, GridDimensions::new(20, 20));

    game.state_mut().phase = GamePhase::Over;
    game.start();
    assert_eq!(game.state().grid, GridDimensions::new(30, 22));
    assert_eq!(game.state().head(), Some(Cell::new(15, 11)));
}

#[test]
fn test_best_score_survives_new_controller() {
    let mut game = new_game(MemoryStore::new());
    game.start();
    {
        let state = game.state_mut();
        state.snake = [(5, 0), (5, 1)].into_iter().map(Cell::from).collect();
        state.score = 70;
    }
    game.tick();
    assert_eq!(game.phase(), GamePhase::Over);

    let store = game.store().clone();
    let game = new_game(store);
    assert_eq!(game.best_score(), 70);
}
