//! Count-up animation parameters and the pure value-over-time function.

use crate::animation::error::AnimationError;

/// Ease-out quartic: fast start, decelerating into the end value.
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Validated parameters of one count-up run. Build it with [`AnimationSpec::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    start: f64,
    end: f64,
    duration_ms: u64,
    decimals: usize,
    prefix: String,
    suffix: String,
}

/// One display value produced by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub value: f64,
    pub text: String,
    pub is_final: bool,
}

impl AnimationSpec {
    pub fn builder(end: f64) -> AnimationSpecBuilder {
        AnimationSpecBuilder {
            start: 0.0,
            end,
            duration_ms: 2000,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn start_value(&self) -> f64 {
        self.start
    }

    pub fn end_value(&self) -> f64 {
        self.end
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Time progress in `[0, 1]`. Negative or NaN elapsed time counts as zero.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms.max(0.0) / self.duration_ms as f64).min(1.0)
    }

    /// Value shown `elapsed_ms` after the run started. Returns `end` exactly once
    /// the duration has passed.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress_at(elapsed_ms);
        if progress >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * ease_out_quart(progress)
    }

    /// Formats `value` with the configured precision, prefix and suffix.
    /// Zero decimals floors to an integer.
    pub fn format(&self, value: f64) -> String {
        let number = if self.decimals == 0 {
            (value.floor() as i64).to_string()
        } else {
            format!("{:.*}", self.decimals, value)
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }

    pub fn frame_at(&self, elapsed_ms: f64) -> AnimationFrame {
        let is_final = self.progress_at(elapsed_ms) >= 1.0;
        let value = self.value_at(elapsed_ms);
        AnimationFrame {
            value,
            text: self.format(value),
            is_final,
        }
    }

    /// Text shown before the run starts.
    pub fn initial_text(&self) -> String {
        self.format(self.start)
    }

    /// Text of the terminal frame.
    pub fn final_text(&self) -> String {
        self.format(self.end)
    }
}

#[derive(Debug, Clone)]
pub struct AnimationSpecBuilder {
    start: f64,
    end: f64,
    duration_ms: i64,
    decimals: i32,
    prefix: String,
    suffix: String,
}

impl AnimationSpecBuilder {
    pub fn start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn build(self) -> Result<AnimationSpec, AnimationError> {
        if !self.start.is_finite() {
            return Err(AnimationError::NonFiniteValue { field: "start value", value: self.start });
        }
        if !self.end.is_finite() {
            return Err(AnimationError::NonFiniteValue { field: "end value", value: self.end });
        }
        let duration_ms = u64::try_from(self.duration_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or(AnimationError::NonPositiveDuration(self.duration_ms))?;
        let decimals = usize::try_from(self.decimals)
            .map_err(|_| AnimationError::NegativeDecimals(self.decimals))?;

        Ok(AnimationSpec {
            start: self.start,
            end: self.end,
            duration_ms,
            decimals,
            prefix: self.prefix,
            suffix: self.suffix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_zero_and_negative_duration() {
        assert_eq!(
            AnimationSpec::builder(10.0).duration_ms(0).build(),
            Err(AnimationError::NonPositiveDuration(0))
        );
        assert_eq!(
            AnimationSpec::builder(10.0).duration_ms(-250).build(),
            Err(AnimationError::NonPositiveDuration(-250))
        );
    }

    #[test]
    fn rejects_negative_decimals() {
        assert_eq!(
            AnimationSpec::builder(10.0).decimals(-1).build(),
            Err(AnimationError::NegativeDecimals(-1))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            AnimationSpec::builder(f64::NAN).build(),
            Err(AnimationError::NonFiniteValue { field: "end value", .. })
        ));
        assert!(matches!(
            AnimationSpec::builder(1.0).start(f64::INFINITY).build(),
            Err(AnimationError::NonFiniteValue { field: "start value", .. })
        ));
    }

    #[test]
    fn zero_decimals_floors() {
        let spec = AnimationSpec::builder(500.0).suffix("+").build().unwrap();
        assert_eq!(spec.format(499.97), "499+");
        assert_eq!(spec.format(0.0), "0+");
    }

    #[test]
    fn fixed_decimals_round_to_precision() {
        let spec = AnimationSpec::builder(4.9).decimals(1).prefix("★ ").build().unwrap();
        assert_eq!(spec.format(4.9), "★ 4.9");
        assert_eq!(spec.format(2.0), "★ 2.0");
    }

    #[test]
    fn value_starts_at_start_and_ends_at_end() {
        let spec = AnimationSpec::builder(50.0).start(10.0).duration_ms(1000).build().unwrap();
        assert_eq!(spec.value_at(0.0), 10.0);
        assert_eq!(spec.value_at(-5.0), 10.0);
        assert_eq!(spec.value_at(1000.0), 50.0);
        assert_eq!(spec.value_at(10_000.0), 50.0);
        assert!(spec.frame_at(1000.0).is_final);
        assert!(!spec.frame_at(999.0).is_final);
    }

    #[test]
    fn ease_out_front_loads_change() {
        // Half the time covers well over half the distance.
        assert!(ease_out_quart(0.5) > 0.9);
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn final_frame_is_exact_despite_float_drift() {
        let spec = AnimationSpec::builder(0.3).start(0.1).decimals(2).build().unwrap();
        let last = spec.frame_at(spec.duration_ms() as f64);
        assert_eq!(last.value, 0.3);
        assert_eq!(last.text, "0.30");
    }

    proptest! {
        #[test]
        fn easing_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_out_quart(lo) <= ease_out_quart(hi));
        }

        #[test]
        fn rising_run_never_overshoots(
            end in 1.0f64..100_000.0,
            duration in 1i64..10_000,
            elapsed in 0.0f64..20_000.0,
        ) {
            let spec = AnimationSpec::builder(end).duration_ms(duration).build().unwrap();
            let value = spec.value_at(elapsed);
            prop_assert!(value >= 0.0);
            prop_assert!(value <= end);
        }

        #[test]
        fn completed_frame_equals_end(
            start in -1_000.0f64..1_000.0,
            end in -1_000.0f64..1_000.0,
            duration in 1i64..10_000,
            decimals in 0i32..4,
        ) {
            let spec = AnimationSpec::builder(end)
                .start(start)
                .duration_ms(duration)
                .decimals(decimals)
                .build()
                .unwrap();
            let frame = spec.frame_at(duration as f64);
            prop_assert_eq!(frame.value, end);
            prop_assert_eq!(frame.text, spec.final_text());
        }
    }
}
