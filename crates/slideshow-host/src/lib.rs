//! The Cortex host contract as seen by the slideshow widget.
//!
//! Cortex owns the scheduling loop; the widget only registers callbacks.
//! This crate models that boundary: the readiness signal, the configuration
//! service, scheduler registration, and the offer/render types a content
//! provider hands back once per slot.

pub mod contract;
pub mod error;
pub mod offer;
pub mod slot;

pub use contract::{config_from_json, Cortex, Lifecycle, PrepareFn, ReadyFn, HOST_API_VERSION};
pub use error::HostError;
pub use offer::{Offer, OfferMeta, OfferSink, RenderFn};
pub use slot::{ActiveSlot, SignalFn, SlideNode, SlotToken, Surface, SurfaceHandle};
