use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Speed slider range and the reveal intervals it maps onto.
///
/// The slowest slider value maps to `max_interval_ms`, the fastest to
/// `min_interval_ms`, linearly in between.
pub struct PlaybackOptions {
    /// Lowest accepted slider value.
    #[schemars(title = "Min Speed Value")]
    pub min_speed_value: f32,
    /// Highest accepted slider value.
    #[schemars(title = "Max Speed Value")]
    pub max_speed_value: f32,
    /// Shortest time between reveals, in milliseconds.
    #[schemars(title = "Min Interval (ms)", range(min = 1))]
    pub min_interval_ms: u64,
    /// Longest time between reveals, in milliseconds.
    #[schemars(title = "Max Interval (ms)", range(min = 1))]
    pub max_interval_ms: u64,
    /// Interval used before the speed is first changed.
    #[schemars(title = "Default Interval (ms)", range(min = 1))]
    pub default_interval_ms: u64,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            min_speed_value: 100.0,
            max_speed_value: 2000.0,
            min_interval_ms: 100,
            max_interval_ms: 2000,
            default_interval_ms: 500,
        }
    }
}

impl PlaybackOptions {
    /// Copy with inverted ranges swapped, zero intervals raised to 1 ms and
    /// the default interval clamped into the interval range.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        if !out.min_speed_value.is_finite() || !out.max_speed_value.is_finite()
        {
            let defaults = Self::default();
            out.min_speed_value = defaults.min_speed_value;
            out.max_speed_value = defaults.max_speed_value;
        }
        if out.min_speed_value > out.max_speed_value {
            std::mem::swap(&mut out.min_speed_value, &mut out.max_speed_value);
        }
        out.min_interval_ms = out.min_interval_ms.max(1);
        out.max_interval_ms = out.max_interval_ms.max(1);
        if out.min_interval_ms > out.max_interval_ms {
            std::mem::swap(&mut out.min_interval_ms, &mut out.max_interval_ms);
        }
        out.default_interval_ms = out
            .default_interval_ms
            .clamp(out.min_interval_ms, out.max_interval_ms);

        if out != *self {
            log::warn!("playback options normalized: {self:?} -> {out:?}");
        }
        out
    }

    /// Map a slider value onto a reveal interval.
    ///
    /// The value is clamped into the slider range first; higher values give
    /// shorter intervals. Rounded to the nearest millisecond.
    #[must_use]
    pub fn interval_for_speed(&self, speed_value: f32) -> u64 {
        let lo = f64::from(self.min_speed_value);
        let hi = f64::from(self.max_speed_value);
        let max_ms = self.max_interval_ms as f64;
        let min_ms = self.min_interval_ms as f64;

        if hi <= lo || speed_value.is_nan() {
            return self.max_interval_ms;
        }
        let speed = f64::from(speed_value).clamp(lo, hi);
        let interval = max_ms - (speed - lo) * (max_ms - min_ms) / (hi - lo);
        interval.round() as u64
    }
}
