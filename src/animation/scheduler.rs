use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::animation::error::AnimationError;

pub type FrameCallback = Box<dyn FnOnce()>;

/// Hands out one callback slot per display refresh.
pub trait FrameScheduler {
    fn request_frame(&self, tick: FrameCallback) -> Result<(), AnimationError>;
}

/// `requestAnimationFrame` on the current window.
///
/// Requests are never withdrawn with `cancelAnimationFrame`: a cancelled run lets
/// its pending tick fire as a no-op, which also frees the one-shot closure.
#[derive(Default)]
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, tick: FrameCallback) -> Result<(), AnimationError> {
        let window = window().ok_or_else(|| AnimationError::Host("no window".to_string()))?;
        let callback = Closure::once_into_js(move |_timestamp: f64| tick());
        window
            .request_animation_frame(callback.unchecked_ref())
            .map(|_| ())
            .map_err(|e| AnimationError::Host(format!("requestAnimationFrame failed: {:?}", e)))
    }
}
