use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::animation::clock::PerformanceClock;
use crate::animation::count_up;
use crate::animation::scheduler::AnimationFrameScheduler;
use crate::animation::spec::{AnimationFrame, AnimationSpec};
use crate::animation::visibility::ViewportObserver;

/// `true` from the first time `node` is at least `threshold` on screen until unmount.
#[hook]
pub fn use_visible_once(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, threshold)| {
                let observer = if *visible {
                    None
                } else {
                    node.cast::<Element>().and_then(|element| {
                        let on_visible = {
                            let visible = visible.clone();
                            move || {
                                debug!("region entered view");
                                visible.set(true);
                            }
                        };
                        match ViewportObserver::observe(&element, *threshold, on_visible) {
                            Ok(observer) => Some(observer),
                            Err(e) => {
                                // Without an observer the region would never show up.
                                warn!("Revealing region immediately: {}", e);
                                visible.set(true);
                                None
                            }
                        }
                    })
                };
                move || drop(observer)
            },
            (node, threshold),
        );
    }

    *visible
}

/// Scroll-triggered reveal delayed by `delay_ms`, used for staggered card entrances.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64, delay_ms: u32) -> bool {
    let in_view = use_visible_once(node, threshold);
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(in_view, delay_ms)| {
                let timeout = (*in_view && !*revealed).then(|| {
                    let revealed = revealed.clone();
                    Timeout::new(*delay_ms, move || revealed.set(true))
                });
                // Dropping a pending Timeout clears it.
                move || drop(timeout)
            },
            (in_view, delay_ms),
        );
    }

    *revealed
}

/// Text of a count-up that starts once `active` turns true and is cancelled on unmount.
#[hook]
pub fn use_count_up(spec: AnimationSpec, active: bool) -> String {
    let text = use_state(|| spec.initial_text());

    {
        let text = text.clone();
        use_effect_with_deps(
            move |(spec, active)| {
                let task = (*active).then(|| {
                    let text = text.clone();
                    count_up::run(
                        spec.clone(),
                        Rc::new(PerformanceClock::new()),
                        Rc::new(AnimationFrameScheduler),
                        Box::new(move |frame: AnimationFrame| text.set(frame.text)),
                    )
                });
                move || {
                    if let Some(task) = task {
                        task.cancel();
                    }
                }
            },
            (spec, active),
        );
    }

    (*text).clone()
}
