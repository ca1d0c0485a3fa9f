//! Shared fakes for crate tests.

use std::collections::BTreeMap;

use crate::loader::{AssetFetch, LoadError};

/// In-memory asset store for deterministic tests.
pub(crate) struct CannedAssets {
    entries: BTreeMap<String, Vec<u8>>,
}

impl CannedAssets {
    pub(crate) fn new(entries: BTreeMap<String, Vec<u8>>) -> Self {
        Self { entries }
    }
}

impl AssetFetch for CannedAssets {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        self.entries
            .get(location)
            .cloned()
            .ok_or_else(|| LoadError::Fetch {
                source: location.to_string(),
                reason: "no such asset".to_string(),
            })
    }
}

/// A tiny valid PNG, encoded fresh so tests never depend on fixture files.
pub(crate) fn png_bytes() -> Vec<u8> {
    let mut buf = Vec::new();
    let img = image::DynamicImage::new_rgb8(2, 2);
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}
