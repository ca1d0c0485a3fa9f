//! Configuration types for the slideshow widget.
//!
//! This crate owns the widget manifest schema and the host-delivered
//! configuration map so the contract and runtime crates share a single
//! source of truth.

pub mod duration;
pub mod manifest;

pub use duration::{ConfigMap, SlideDuration, DURATION_KEY};
pub use manifest::{WidgetAssets, WidgetCompatibility, WidgetManifest};
