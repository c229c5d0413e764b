//! Tick scheduling
//!
//! The controller owns a `Clock` and starts/stops it explicitly on phase
//! changes. What the clock calls back into is wired up by whoever builds it.

use std::time::Duration;

/// Cancellable repeating timer
pub trait Clock {
    /// Begin firing every `period`, replacing any running schedule
    fn start(&mut self, period: Duration);
    /// Stop firing. Stopping a stopped clock is a no-op.
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Clock driven by hand: the owner polls `is_running()` and calls `tick()`
/// itself. Used by tests and the native build.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    period: Option<Duration>,
    /// Number of `start()` calls
    pub starts: u32,
    /// Number of `stop()` calls that actually stopped something
    pub stops: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the running schedule
    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl Clock for ManualClock {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.starts += 1;
    }

    fn stop(&mut self) {
        if self.period.take().is_some() {
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.period.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
pub use interval::IntervalClock;

#[cfg(target_arch = "wasm32")]
mod interval {
    use std::time::Duration;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::Clock;

    /// `setInterval` timer
    pub struct IntervalClock {
        callback: Closure<dyn FnMut()>,
        handle: Option<i32>,
    }

    impl IntervalClock {
        pub fn new(callback: impl FnMut() + 'static) -> Self {
            Self {
                callback: Closure::<dyn FnMut()>::new(callback),
                handle: None,
            }
        }
    }

    impl Clock for IntervalClock {
        fn start(&mut self, period: Duration) {
            self.stop();
            let Some(window) = web_sys::window() else {
                log::error!("No window, cannot schedule ticks");
                return;
            };
            let millis = period.as_millis().min(i32::MAX as u128) as i32;
            match window.set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                millis,
            ) {
                Ok(handle) => self.handle = Some(handle),
                Err(e) => log::error!("setInterval failed: {:?}", e),
            }
        }

        fn stop(&mut self) {
            if let Some(handle) = self.handle.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
            }
        }

        fn is_running(&self) -> bool {
            self.handle.is_some()
        }
    }

    impl Drop for IntervalClock {
        fn drop(&mut self) {
            self.stop();
        }
    }
}
