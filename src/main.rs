//! Neon Snake entry point
//!
//! Handles platform-specific initialization and wires the game to the page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use neon_snake::clock::IntervalClock;
    use neon_snake::persistence::LocalStore;
    use neon_snake::platform::{Command, SwipeTracker, command_for_key, suppresses_scroll};
    use neon_snake::renderer::CanvasRenderer;
    use neon_snake::sim::{GameEvent, GamePhase};
    use neon_snake::{Game, Settings};

    /// Page-level state: the game plus its DOM-facing pieces
    struct App {
        game: Game<LocalStore, IntervalClock>,
        renderer: CanvasRenderer,
        swipe: SwipeTracker,
        document: Document,
    }

    impl App {
        /// Start or restart a run and draw its first frame
        fn start(&mut self) {
            if !self.game.start() {
                return;
            }
            self.fit_canvas();
            set_text(&self.document, "score", "0");
            hide_screen(&self.document, "start-screen");
            hide_screen(&self.document, "game-over-screen");
            self.draw();
        }

        fn command(&mut self, cmd: Command) {
            match cmd {
                Command::Confirm if self.game.phase().can_start() => self.start(),
                Command::Confirm => {}
                Command::Steer(_) => self.game.command(cmd),
            }
        }

        fn on_tick(&mut self) {
            let events = self.game.tick();
            self.draw();

            for event in &events {
                match event {
                    GameEvent::AteFood { score, .. } => {
                        set_text(&self.document, "score", &score.to_string());
                    }
                    GameEvent::Died { .. } => self.show_game_over(),
                }
            }
        }

        fn show_game_over(&self) {
            let score = self.game.state().score;
            set_text(&self.document, "high-score", &self.game.best_score().to_string());
            set_text(&self.document, "final-score", &format!("Score: {}", score));
            show_screen(&self.document, "game-over-screen");
        }

        /// Recompute the grid from the window size
        fn resize(&mut self) {
            let (w, h) = window_size();
            let grid = self.game.resize(w as f32, h as f32);
            log::debug!("Viewport {}x{} -> grid {}x{}", w, h, grid.width, grid.height);
            self.fit_canvas();
        }

        /// Size the canvas to the running grid, or to the next run's grid
        fn fit_canvas(&self) {
            let grid = if self.game.phase() == GamePhase::Running {
                self.game.state().grid
            } else {
                self.game.pending_grid()
            };
            let (w, h) = window_size();
            if let Err(e) = self.renderer.fit(grid, w, h) {
                log::warn!("Canvas resize failed: {:?}", e);
            }
        }

        fn draw(&self) {
            if let Err(e) = self.renderer.render(self.game.state(), js_sys::Date::now()) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let store = LocalStore::open();
        let settings = Settings::load(&store);
        let renderer =
            CanvasRenderer::new(canvas, settings.effective_tile_size()).expect("no 2d context");
        let seed = js_sys::Date::now() as u64;

        let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
            let weak = weak.clone();
            let clock = IntervalClock::new(move || {
                if let Some(app) = weak.upgrade() {
                    app.borrow_mut().on_tick();
                }
            });
            RefCell::new(App {
                game: Game::new(store, clock, settings, seed),
                renderer,
                swipe: SwipeTracker::default(),
                document: document.clone(),
            })
        });

        {
            let mut a = app.borrow_mut();
            set_text(&document, "high-score", &a.game.best_score().to_string());
            a.resize();
        }

        log::info!("Game initialized with seed: {}", seed);

        setup_resize_handler(app.clone());
        setup_buttons(app.clone());
        setup_keyboard(app.clone());
        setup_touch(app);

        log::info!("Neon Snake ready!");
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    app.borrow_mut().command(Command::Confirm);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            if suppresses_scroll(&key) {
                event.prevent_default();
            }
            if let Some(cmd) = command_for_key(&key) {
                app.borrow_mut().command(cmd);
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Touch start (remember origin)
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    app.borrow_mut()
                        .swipe
                        .begin(touch.screen_x() as f32, touch.screen_y() as f32);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end (steer, only while running)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut a = app.borrow_mut();
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let dir = a.swipe.end(touch.screen_x() as f32, touch.screen_y() as f32);
                if a.game.phase() != GamePhase::Running {
                    return;
                }
                if let Some(dir) = dir {
                    a.command(Command::Steer(dir));
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn window_size() -> (f64, f64) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w, h)
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn show_screen(document: &Document, id: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = classes.remove_1("hidden");
            let _ = classes.add_1("active");
        }
    }

    fn hide_screen(document: &Document, id: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = classes.remove_1("active");
            let _ = classes.add_1("hidden");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Neon Snake (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Upper bound on demo length
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_TICKS: u32 = 5_000;

/// Play one run with a greedy autopilot and log the outcome
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use neon_snake::clock::{Clock, ManualClock};
    use neon_snake::persistence::MemoryStore;
    use neon_snake::sim::GridDimensions;
    use neon_snake::{Game, Settings};

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::new(MemoryStore::new(), ManualClock::new(), Settings::default(), seed);
    game.set_grid(GridDimensions::new(20, 20));
    game.start();

    let mut ticks = 0;
    while game.clock().is_running() && ticks < DEMO_MAX_TICKS {
        if let Some(dir) = autopilot(game.state()) {
            game.submit(dir);
        }
        game.tick();
        ticks += 1;
    }

    let state = game.state();
    println!(
        "Demo finished after {} ticks: score {}, length {}, best {}",
        ticks,
        state.score,
        state.snake.len(),
        game.best_score()
    );
}

/// Pick the safe direction that gets closest to the food
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(state: &neon_snake::sim::GameState) -> Option<neon_snake::sim::Direction> {
    use neon_snake::sim::Direction;

    let head = state.head()?;
    let current = state.input.current();
    let target = state.food.unwrap_or(head);

    Direction::ALL
        .into_iter()
        .filter(|dir| *dir != current.opposite())
        .filter(|dir| {
            let next = head.step(*dir);
            state.grid.contains(next) && !state.occupies(next)
        })
        .min_by_key(|dir| {
            let next = head.step(*dir);
            (next.x - target.x).abs() + (next.y - target.y).abs()
        })
}
