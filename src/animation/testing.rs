//! Deterministic clock and frame scheduler for exercising animations natively.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::animation::clock::Clock;
use crate::animation::error::AnimationError;
use crate::animation::scheduler::{FrameCallback, FrameScheduler};
use crate::animation::spec::AnimationFrame;

#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<VecDeque<FrameCallback>>,
    refuse: Cell<bool>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn refuse_requests(&self) {
        self.refuse.set(true);
    }

    /// Runs every tick queued before this call. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let due: Vec<FrameCallback> = self.pending.borrow_mut().drain(..).collect();
        let count = due.len();
        for tick in due {
            tick();
        }
        count
    }

    /// Advances `clock` by `frame_ms` and runs a frame until nothing is queued.
    pub fn run_to_idle(&self, clock: &ManualClock, frame_ms: f64) {
        while self.pending() > 0 {
            clock.advance(frame_ms);
            self.run_frame();
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, tick: FrameCallback) -> Result<(), AnimationError> {
        if self.refuse.get() {
            return Err(AnimationError::Host("scheduler closed".to_string()));
        }
        self.pending.borrow_mut().push_back(tick);
        Ok(())
    }
}

/// Collects emitted frame texts.
pub fn frame_sink() -> (Rc<RefCell<Vec<String>>>, Box<dyn FnMut(AnimationFrame)>) {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let frames = frames.clone();
        Box::new(move |frame: AnimationFrame| frames.borrow_mut().push(frame.text))
            as Box<dyn FnMut(AnimationFrame)>
    };
    (frames, sink)
}
