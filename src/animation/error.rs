use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("animation duration must be positive, got {0}ms")]
    NonPositiveDuration(i64),

    #[error("decimal places must not be negative, got {0}")]
    NegativeDecimals(i32),

    #[error("{field} must be a finite number, got {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    #[error("visibility threshold must be within 0..=1, got {0}")]
    InvalidThreshold(f64),

    /// The host refused to hand out an animation frame or observer.
    #[error("browser binding failed: {0}")]
    Host(String),
}
