use serde_json::Value;
use slideshow_config::ConfigMap;

use crate::error::HostError;
use crate::offer::Offer;
use crate::slot::SurfaceHandle;

/// Host API version this contract models. Widget manifests declare a
/// semver requirement against it.
pub const HOST_API_VERSION: &str = "1.0.0";

/// Callback invoked by the host scheduler once per content slot it wants
/// filled.
pub type PrepareFn = Box<dyn FnMut(Offer, SurfaceHandle) + Send>;

/// Callback invoked once the host finishes starting up.
///
/// An `Err` re-signals bootstrap failure to the host; the widget stays
/// unregistered.
pub type ReadyFn = Box<dyn FnOnce(&mut dyn Cortex) -> anyhow::Result<()> + Send>;

/// Services the host exposes to an embedded widget.
pub trait Cortex {
    /// Fetch the host configuration mapping.
    fn get_config(&mut self) -> Result<ConfigMap, HostError>;

    /// Register the widget's prepare callback with the host scheduler.
    fn on_prepare(&mut self, callback: PrepareFn);
}

/// Host startup lifecycle.
pub trait Lifecycle {
    /// Register a callback for the host's readiness signal. The host
    /// dispatches it exactly once, after startup completes.
    fn on_ready(&mut self, callback: ReadyFn);
}

/// Decode a JSON configuration object into a [`ConfigMap`].
///
/// The JS host delivers configuration as a loosely typed object; string,
/// number, and bool values are all coerced to strings here. Anything else
/// is a shape error.
pub fn config_from_json(value: &Value) -> Result<ConfigMap, HostError> {
    let Value::Object(entries) = value else {
        return Err(HostError::ConfigShape(format!(
            "expected an object, got {value}"
        )));
    };

    let mut map = ConfigMap::new();
    for (key, val) in entries {
        let text = match val {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(HostError::ConfigShape(format!(
                    "value for {key} is not a scalar: {other}"
                )))
            }
        };
        map.insert(key.clone(), text);
    }
    Ok(map)
}
