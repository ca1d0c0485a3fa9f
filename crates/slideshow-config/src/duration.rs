use std::collections::BTreeMap;
use std::time::Duration;

/// Configuration mapping returned by the host's configuration service.
pub type ConfigMap = BTreeMap<String, String>;

/// Configuration key holding the per-slide display duration in milliseconds.
pub const DURATION_KEY: &str = "cortex.tutorial.duration";

/// Per-slide display duration, read once at bootstrap.
///
/// The host delivers configuration values as strings, and its tooling
/// coerces them with JS `Number()` rules: empty input is zero, unparsable
/// input is NaN. The NaN sentinel is preserved here rather than replaced,
/// so a misconfigured host degrades the same way it always has. Callers
/// can detect the sentinel via [`is_degraded`](Self::is_degraded).
#[derive(Debug, Clone, Copy)]
pub struct SlideDuration {
    millis: f64,
}

impl SlideDuration {
    /// Coerce a raw configuration value. `None` (missing key) yields the
    /// NaN sentinel.
    pub fn from_value(value: Option<&str>) -> Self {
        let millis = match value {
            None => f64::NAN,
            Some(raw) => coerce_number(raw),
        };
        Self { millis }
    }

    /// Read [`DURATION_KEY`] from a host configuration map.
    pub fn from_config(config: &ConfigMap) -> Self {
        Self::from_value(config.get(DURATION_KEY).map(String::as_str))
    }

    /// Build a duration directly from milliseconds.
    pub fn from_millis(millis: f64) -> Self {
        Self { millis }
    }

    /// Raw coerced value in milliseconds. NaN when the setting was missing
    /// or non-numeric.
    pub fn millis(&self) -> f64 {
        self.millis
    }

    /// True when coercion produced the NaN sentinel.
    pub fn is_degraded(&self) -> bool {
        self.millis.is_nan()
    }

    /// Timer delay for one slide, with `setTimeout` clamping: NaN and
    /// negative values collapse to zero, fractional milliseconds truncate.
    pub fn as_delay(&self) -> Duration {
        if self.millis.is_nan() || self.millis <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.millis as u64)
    }
}

/// JS `Number(string)` coercion for the decimal forms configuration values
/// take: trimmed, empty means zero, anything unparsable means NaN.
fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
