use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::animation::error::AnimationError;

// Browsers report ratios a hair under the threshold at the crossing itself.
const RATIO_TOLERANCE: f64 = 0.001;

/// Single-shot latch over intersection reports for one region.
#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    threshold: f64,
    fired: bool,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Result<Self, AnimationError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(AnimationError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold, fired: false })
    }

    /// Feeds one intersection report. Returns `true` only for the first report that
    /// puts the region in view; every later report returns `false`.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        if ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Watches one element with an `IntersectionObserver` until it first becomes visible.
///
/// Observation stops after the signal fires or when this value is dropped. A target
/// that is already on screen is reported on the browser's next intersection pass,
/// never from inside [`ViewportObserver::observe`].
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_visible: impl FnOnce() + 'static,
    ) -> Result<Self, AnimationError> {
        let mut trigger = VisibilityTrigger::new(threshold)?;
        let mut on_visible = Some(on_visible);

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if trigger.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                    break;
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| AnimationError::Host(format!("IntersectionObserver unavailable: {:?}", e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_across_visibility_cycles() {
        let mut trigger = VisibilityTrigger::new(0.3).unwrap();

        assert!(!trigger.observe(false, 0.0));
        assert!(trigger.observe(true, 0.45));

        // Scrolled away and back again.
        assert!(!trigger.observe(false, 0.0));
        assert!(!trigger.observe(true, 0.8));
        assert!(!trigger.observe(true, 1.0));
    }

    #[test]
    fn waits_for_threshold() {
        let mut trigger = VisibilityTrigger::new(0.3).unwrap();
        assert!(!trigger.observe(true, 0.1));
        assert!(!trigger.observe(true, 0.25));
        assert!(trigger.observe(true, 0.3));
    }

    #[test]
    fn tolerates_rounding_at_the_crossing() {
        let mut trigger = VisibilityTrigger::new(0.2).unwrap();
        assert!(trigger.observe(true, 0.1995));
    }

    #[test]
    fn zero_threshold_still_needs_intersection() {
        let mut trigger = VisibilityTrigger::new(0.0).unwrap();
        assert!(!trigger.observe(false, 0.0));
        assert!(trigger.observe(true, 0.0));
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        for threshold in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                VisibilityTrigger::new(threshold),
                Err(AnimationError::InvalidThreshold(_))
            ));
        }
    }
}
