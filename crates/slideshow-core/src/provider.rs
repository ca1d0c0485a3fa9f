use slideshow_config::SlideDuration;
use slideshow_host::{Offer, OfferMeta, RenderFn, SurfaceHandle};
use tracing::{debug, error};

use crate::catalog::Catalog;
use crate::loader::Preloader;
use crate::timer;

/// How long the host may keep reusing an accepted render function: one
/// hour.
pub const SLOT_TTL_MS: u64 = 60 * 60 * 1000;

/// Cycling content provider over a fixed image catalog.
///
/// One `prepare` call produces one slot answer. The cursor advances before
/// the preload is dispatched, so a slow load never disturbs the ordering
/// of later calls.
pub struct SlideShow {
    catalog: Catalog,
    cursor: usize,
    duration: SlideDuration,
    loader: Preloader,
}

impl SlideShow {
    pub fn new(catalog: Catalog, duration: SlideDuration, loader: Preloader) -> Self {
        Self {
            catalog,
            cursor: 0,
            duration,
            loader,
        }
    }

    /// Current catalog position, always within `[0, len)`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Fill one content slot.
    ///
    /// Preloads the next catalog image in the background and answers the
    /// offer once the load settles: accepted with a render function on
    /// success, declined on failure. A failed source is not retried until
    /// its next turn through the cycle.
    pub fn prepare(&mut self, offer: Offer, surface: SurfaceHandle) {
        let source = self.catalog.source_at(self.cursor).to_string();
        self.cursor = (self.cursor + 1) % self.catalog.len();

        let delay = self.duration.as_delay();
        debug!(source = %source, next_cursor = self.cursor, "preparing slot");

        self.loader.load(
            source.clone(),
            Box::new(move |result| match result {
                Ok(node) => {
                    let render: RenderFn = Box::new(move |token| {
                        if let Ok(mut surface) = surface.lock() {
                            surface.attach(node);
                        }
                        let active = token.begin();
                        timer::fire_after(delay, move || active.done());
                    });
                    offer.accept(
                        render,
                        OfferMeta {
                            label: source,
                            ttl_ms: SLOT_TTL_MS,
                        },
                    );
                }
                Err(err) => {
                    error!(source = %err.source_location(), error = %err, "failed to preload slide");
                    offer.decline();
                }
            }),
        );
    }
}
