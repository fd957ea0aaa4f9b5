//! The temperature range control.
//!
//! Behaves like an HTML range input: values outside `[min, max]` are clamped
//! and values between stops snap to the nearest step. The softmax core never
//! clamps, so this is the only place an out-of-range temperature is fixed up.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::float_fmt::fmt_f64_fixed;

pub const DEFAULT_MIN: f64 = 0.1;
pub const DEFAULT_MAX: f64 = 2.0;
pub const DEFAULT_STEP: f64 = 0.1;
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// Finest accepted step. Stops are re-rounded to nine decimals, so a step
/// must stay well above that resolution to keep stops distinct.
pub const MIN_STEP: f64 = 1e-6;

/// Upper bound on `(max - min) / step`.
pub const MAX_POSITIONS: usize = 10_000;

const TIDY_DECIMALS: i32 = 9;

/// Decimals that [`MIN_STEP`] needs; labels never use more.
const LABEL_MAX_DECIMALS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SliderSpec", into = "SliderSpec")]
pub struct TemperatureSlider {
    min: f64,
    max: f64,
    step: f64,
    default: f64,
}

/// Unvalidated wire form of [`TemperatureSlider`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Default for SliderSpec {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            default: DEFAULT_TEMPERATURE,
        }
    }
}

impl TemperatureSlider {
    pub fn new(min: f64, max: f64, step: f64, default: f64) -> Result<Self, InvalidInput> {
        let all_finite = [min, max, step, default].iter().all(|v| v.is_finite());
        if !all_finite {
            return Err(InvalidInput::SliderRange(
                "bounds must be finite".to_string(),
            ));
        }
        if min <= 0.0 {
            return Err(InvalidInput::SliderRange(format!(
                "min must be > 0 (got {min})"
            )));
        }
        if min > max {
            return Err(InvalidInput::SliderRange(format!(
                "min {min} exceeds max {max}"
            )));
        }
        if step < MIN_STEP {
            return Err(InvalidInput::SliderRange(format!(
                "step must be >= {MIN_STEP} (got {step})"
            )));
        }
        if (max - min) / step > MAX_POSITIONS as f64 {
            return Err(InvalidInput::SliderRange(format!(
                "range [{min}, {max}] with step {step} exceeds {MAX_POSITIONS} stops"
            )));
        }
        if default < min || default > max {
            return Err(InvalidInput::SliderRange(format!(
                "default {default} outside [{min}, {max}]"
            )));
        }
        Ok(Self {
            min,
            max,
            step,
            default,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn default_value(&self) -> f64 {
        self.default
    }

    /// Parse a raw control value. Does not clamp.
    pub fn parse(&self, raw: &str) -> Result<f64, InvalidInput> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| InvalidInput::UnparsableTemperature(raw.to_string()))
    }

    /// Snap to the nearest stop and clamp into `[min, max]`. NaN falls back
    /// to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let stops = ((value - self.min) / self.step).round();
        let snapped = self.min + stops.max(0.0) * self.step;
        // Re-round to the step's precision so 0.1 + 2 * 0.1 reads as 0.3.
        tidy(snapped).clamp(self.min, self.max)
    }

    /// Every reachable value, from `min` to `max`.
    pub fn positions(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step + 1e-6).floor() as usize;
        (0..=count)
            .map(|i| tidy(self.min + i as f64 * self.step).min(self.max))
            .collect()
    }

    /// Display text next to the control, e.g. `0.7`. Uses as many decimals
    /// as `min` and `step` need, and at least one.
    pub fn label(&self, value: f64) -> String {
        fmt_f64_fixed(value, self.label_decimals())
    }

    pub fn label_decimals(&self) -> usize {
        decimals_of(self.step).max(decimals_of(self.min)).max(1)
    }
}

impl Default for TemperatureSlider {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            default: DEFAULT_TEMPERATURE,
        }
    }
}

impl TryFrom<SliderSpec> for TemperatureSlider {
    type Error = InvalidInput;

    fn try_from(s: SliderSpec) -> Result<Self, Self::Error> {
        Self::new(s.min, s.max, s.step, s.default)
    }
}

impl From<TemperatureSlider> for SliderSpec {
    fn from(s: TemperatureSlider) -> Self {
        Self {
            min: s.min,
            max: s.max,
            step: s.step,
            default: s.default,
        }
    }
}

fn tidy(v: f64) -> f64 {
    let scale = 10f64.powi(TIDY_DECIMALS);
    (v * scale).round() / scale
}

/// Fewest decimals that write `v` exactly (up to the step resolution).
fn decimals_of(v: f64) -> usize {
    (0..=LABEL_MAX_DECIMALS)
        .find(|&d| {
            let scaled = v * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(LABEL_MAX_DECIMALS)
}
