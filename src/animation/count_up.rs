//! Count-up animation: a small state machine driven by a frame loop.
//!
//! [`CountUp`] turns clock readings into frames and knows nothing about the
//! browser. [`run`] wires it to a [`Clock`] and a [`FrameScheduler`] and returns
//! a [`CountUpTask`] the owner cancels on teardown.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};

use crate::animation::cancel::CancellationToken;
use crate::animation::clock::Clock;
use crate::animation::scheduler::FrameScheduler;
use crate::animation::spec::{AnimationFrame, AnimationSpec};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunState {
    Idle,
    /// `started_at` is taken from the first tick so the first frame shows the start value.
    Running { started_at: Option<f64> },
    Completed,
    Cancelled,
}

pub struct CountUp {
    spec: AnimationSpec,
    state: RunState,
}

impl CountUp {
    pub fn new(spec: AnimationSpec) -> Self {
        Self { spec, state: RunState::Idle }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Enters `Running` from any state, restarting from the start value.
    pub fn start(&mut self) {
        self.state = RunState::Running { started_at: None };
    }

    pub fn cancel(&mut self) {
        if matches!(self.state, RunState::Idle | RunState::Running { .. }) {
            self.state = RunState::Cancelled;
        }
    }

    /// Produces the frame for `now_ms`, or `None` unless running.
    pub fn tick(&mut self, now_ms: f64) -> Option<AnimationFrame> {
        let started_at = match self.state {
            RunState::Running { started_at } => started_at.unwrap_or(now_ms),
            _ => return None,
        };

        let frame = self.spec.frame_at(now_ms - started_at);
        self.state = if frame.is_final {
            RunState::Completed
        } else {
            RunState::Running { started_at: Some(started_at) }
        };
        Some(frame)
    }
}

/// Handle to a running count-up. Dropping it does not stop the run; call [`CountUpTask::cancel`].
pub struct CountUpTask {
    token: CancellationToken,
    counter: Rc<RefCell<CountUp>>,
}

impl CountUpTask {
    pub fn cancel(&self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();
        self.counter.borrow_mut().cancel();
        debug!("count-up cancelled");
    }

    pub fn state(&self) -> RunState {
        self.counter.borrow().state()
    }
}

struct TickLoop {
    counter: Rc<RefCell<CountUp>>,
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn FrameScheduler>,
    on_frame: RefCell<Box<dyn FnMut(AnimationFrame)>>,
    token: CancellationToken,
}

impl TickLoop {
    fn schedule(self: Rc<Self>) {
        let scheduler = self.scheduler.clone();
        let counter = self.counter.clone();
        if let Err(e) = scheduler.request_frame(Box::new(move || self.tick())) {
            error!("Stopping count-up: {}", e);
            counter.borrow_mut().cancel();
        }
    }

    fn tick(self: Rc<Self>) {
        if self.token.is_cancelled() {
            return;
        }

        let frame = self.counter.borrow_mut().tick(self.clock.now_ms());
        let Some(frame) = frame else {
            return;
        };

        let finished = frame.is_final;
        if finished {
            debug!("count-up finished at {}", frame.text);
        }
        (self.on_frame.borrow_mut())(frame);

        // The frame callback may have cancelled the run.
        if !finished && !self.token.is_cancelled() {
            Self::schedule(self);
        }
    }
}

/// Starts a count-up. `on_frame` receives one frame per display tick, ending with the
/// exact end value unless the returned task is cancelled first.
pub fn run(
    spec: AnimationSpec,
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn FrameScheduler>,
    on_frame: Box<dyn FnMut(AnimationFrame)>,
) -> CountUpTask {
    debug!(
        "count-up {} -> {} over {}ms",
        spec.start_value(),
        spec.end_value(),
        spec.duration_ms()
    );

    let mut counter = CountUp::new(spec);
    counter.start();
    let counter = Rc::new(RefCell::new(counter));
    let token = CancellationToken::new();

    let tick_loop = Rc::new(TickLoop {
        counter: counter.clone(),
        clock,
        scheduler,
        on_frame: RefCell::new(on_frame),
        token: token.clone(),
    });
    TickLoop::schedule(tick_loop);

    CountUpTask { token, counter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::testing::{frame_sink, ManualClock, ManualScheduler};

    const FRAME_MS: f64 = 16.0;

    fn customers() -> AnimationSpec {
        AnimationSpec::builder(500.0)
            .duration_ms(2500)
            .suffix("+")
            .build()
            .unwrap()
    }

    fn start(spec: AnimationSpec) -> (Rc<ManualClock>, Rc<ManualScheduler>, Rc<RefCell<Vec<String>>>, CountUpTask) {
        let clock = Rc::new(ManualClock::default());
        let scheduler = Rc::new(ManualScheduler::default());
        let (frames, sink) = frame_sink();
        let task = run(spec, clock.clone(), scheduler.clone(), sink);
        (clock, scheduler, frames, task)
    }

    #[test]
    fn counts_customers_from_zero_to_exact_end() {
        let (clock, scheduler, frames, task) = start(customers());
        scheduler.run_to_idle(&clock, FRAME_MS);

        let frames = frames.borrow();
        assert_eq!(frames.first().map(String::as_str), Some("0+"));
        assert_eq!(frames.last().map(String::as_str), Some("500+"));
        assert!(frames.len() > 100);

        let mut previous = 0;
        for text in frames.iter() {
            let number = text.strip_suffix('+').expect("every frame carries the suffix");
            let value: i64 = number.parse().expect("integer frame");
            assert!(value >= previous, "{} went backwards after {}", value, previous);
            previous = value;
        }
        assert_eq!(task.state(), RunState::Completed);
    }

    #[test]
    fn rating_ends_on_exact_decimal() {
        let spec = AnimationSpec::builder(4.9)
            .duration_ms(3000)
            .decimals(1)
            .build()
            .unwrap();
        let (clock, scheduler, frames, _task) = start(spec);
        scheduler.run_to_idle(&clock, FRAME_MS);

        assert_eq!(frames.borrow().first().map(String::as_str), Some("0.0"));
        assert_eq!(frames.borrow().last().map(String::as_str), Some("4.9"));
    }

    #[test]
    fn irregular_frame_pacing_still_converges() {
        let (clock, scheduler, frames, _task) = start(customers());
        for gap in [5.0, 400.0, 33.0, 1200.0, 7.0, 900.0, 16.0] {
            clock.advance(gap);
            scheduler.run_frame();
        }

        assert_eq!(scheduler.pending(), 0);
        assert_eq!(frames.borrow().last().map(String::as_str), Some("500+"));
    }

    #[test]
    fn no_frames_after_cancel() {
        let (clock, scheduler, frames, task) = start(customers());
        for _ in 0..5 {
            clock.advance(FRAME_MS);
            scheduler.run_frame();
        }
        assert_eq!(frames.borrow().len(), 5);

        task.cancel();
        // The tick scheduled before cancellation still fires, as a no-op.
        assert_eq!(scheduler.pending(), 1);
        scheduler.run_to_idle(&clock, FRAME_MS);

        assert_eq!(frames.borrow().len(), 5);
        assert_ne!(frames.borrow().last().map(String::as_str), Some("500+"));
        assert_eq!(task.state(), RunState::Cancelled);
    }

    #[test]
    fn cancel_before_first_tick_emits_nothing() {
        let (clock, scheduler, frames, task) = start(customers());
        task.cancel();
        scheduler.run_to_idle(&clock, FRAME_MS);

        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn new_run_after_cancel_restarts_from_start() {
        let clock = Rc::new(ManualClock::default());
        let scheduler = Rc::new(ManualScheduler::default());

        let (first_frames, sink) = frame_sink();
        let first = run(customers(), clock.clone(), scheduler.clone(), sink);
        for _ in 0..30 {
            clock.advance(FRAME_MS);
            scheduler.run_frame();
        }
        first.cancel();
        assert_ne!(first_frames.borrow().last().map(String::as_str), Some("0+"));

        let (second_frames, sink) = frame_sink();
        let _second = run(customers(), clock.clone(), scheduler.clone(), sink);
        scheduler.run_to_idle(&clock, FRAME_MS);

        assert_eq!(second_frames.borrow().first().map(String::as_str), Some("0+"));
        assert_eq!(second_frames.borrow().last().map(String::as_str), Some("500+"));
    }

    #[test]
    fn counters_run_independently() {
        let clock = Rc::new(ManualClock::default());
        let scheduler = Rc::new(ManualScheduler::default());

        let (years, years_sink) = frame_sink();
        let (hours, hours_sink) = frame_sink();
        let years_spec = AnimationSpec::builder(3.0).duration_ms(2200).suffix(" Years").build().unwrap();
        let hours_spec = AnimationSpec::builder(24.0).duration_ms(1800).suffix("/7").build().unwrap();

        let years_task = run(years_spec, clock.clone(), scheduler.clone(), years_sink);
        let _hours_task = run(hours_spec, clock.clone(), scheduler.clone(), hours_sink);

        clock.advance(FRAME_MS);
        scheduler.run_frame();
        years_task.cancel();
        scheduler.run_to_idle(&clock, FRAME_MS);

        assert_eq!(years.borrow().len(), 1);
        assert_eq!(hours.borrow().last().map(String::as_str), Some("24/7"));
    }

    #[test]
    fn cancelling_from_inside_the_frame_callback_stops_the_loop() {
        let clock = Rc::new(ManualClock::default());
        let scheduler = Rc::new(ManualScheduler::default());
        let task_slot: Rc<RefCell<Option<CountUpTask>>> = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(0));

        let on_frame = {
            let task_slot = task_slot.clone();
            let seen = seen.clone();
            Box::new(move |_frame: AnimationFrame| {
                *seen.borrow_mut() += 1;
                if let Some(task) = task_slot.borrow().as_ref() {
                    task.cancel();
                }
            })
        };
        let task = run(customers(), clock.clone(), scheduler.clone(), on_frame);
        *task_slot.borrow_mut() = Some(task);

        scheduler.run_to_idle(&clock, FRAME_MS);
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn refused_frame_request_stops_the_run() {
        let clock = Rc::new(ManualClock::default());
        let scheduler = Rc::new(ManualScheduler::default());
        scheduler.refuse_requests();
        let (frames, sink) = frame_sink();

        let task = run(customers(), clock.clone(), scheduler.clone(), sink);

        assert_eq!(task.state(), RunState::Cancelled);
        assert_eq!(scheduler.pending(), 0);
        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn state_machine_transitions() {
        let mut counter = CountUp::new(customers());
        assert_eq!(counter.state(), RunState::Idle);
        assert_eq!(counter.tick(0.0), None);

        counter.start();
        assert_eq!(counter.tick(100.0).map(|f| f.text), Some("0+".to_string()));
        assert_eq!(counter.state(), RunState::Running { started_at: Some(100.0) });

        let last = counter.tick(2600.0).unwrap();
        assert!(last.is_final);
        assert_eq!(counter.state(), RunState::Completed);
        assert_eq!(counter.tick(2700.0), None);

        // Terminal states ignore cancel until restarted.
        counter.cancel();
        assert_eq!(counter.state(), RunState::Completed);

        counter.start();
        counter.cancel();
        assert_eq!(counter.state(), RunState::Cancelled);
        assert_eq!(counter.tick(3000.0), None);
    }
}
