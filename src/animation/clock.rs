use web_sys::{js_sys, window, Performance};

/// Source of "now" in milliseconds for frame timing.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Browser clock backed by `performance.now()`, falling back to `Date.now()`
/// when the Performance API is unavailable.
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        let performance = window().and_then(|w| w.performance());
        if performance.is_none() {
            log::warn!("performance.now() unavailable, counters fall back to Date.now()");
        }
        Self { performance }
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}
