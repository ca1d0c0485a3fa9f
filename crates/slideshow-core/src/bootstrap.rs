use std::sync::Arc;

use anyhow::{Context, Result};
use slideshow_config::{SlideDuration, WidgetManifest};
use slideshow_host::{Cortex, Lifecycle, HOST_API_VERSION};
use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::loader::{AssetFetch, Preloader};
use crate::provider::SlideShow;

/// Hook widget installation onto the host's readiness signal.
pub fn register(
    lifecycle: &mut dyn Lifecycle,
    manifest: WidgetManifest,
    assets: Arc<dyn AssetFetch>,
) {
    lifecycle.on_ready(Box::new(move |cortex| install(cortex, &manifest, assets)));
}

/// Fetch host configuration and register the slideshow provider with the
/// scheduler.
///
/// A configuration fetch failure is fatal: it is logged, propagated to the
/// host, and the provider is never registered. There is no retry.
pub fn install(
    cortex: &mut dyn Cortex,
    manifest: &WidgetManifest,
    assets: Arc<dyn AssetFetch>,
) -> Result<()> {
    manifest
        .supports_host_api(HOST_API_VERSION)
        .context("widget is incompatible with this host")?;

    let config = cortex.get_config().map_err(|err| {
        error!(error = %err, "failed to initialize the widget");
        err
    })?;

    let duration = SlideDuration::from_config(&config);
    if duration.is_degraded() {
        warn!("slide duration setting is missing or non-numeric; slot timers degrade to zero delay");
    }
    info!(duration_ms = duration.millis(), "widget will be initialized");

    let catalog = Catalog::from_manifest(manifest)?;
    let mut provider = SlideShow::new(catalog, duration, Preloader::new(assets));
    cortex.on_prepare(Box::new(move |offer, surface| {
        provider.prepare(offer, surface)
    }));
    Ok(())
}
