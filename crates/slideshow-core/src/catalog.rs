use anyhow::{bail, Result};
use slideshow_config::WidgetManifest;

/// Ordered, immutable list of slide source locations.
///
/// Never empty: construction rejects an empty list, so cyclic indexing
/// always has a positive length to wrap against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sources: Vec<String>,
}

impl Catalog {
    /// Build a catalog from source locations.
    pub fn new(sources: Vec<String>) -> Result<Self> {
        if sources.is_empty() {
            bail!("catalog must contain at least one image");
        }
        Ok(Self { sources })
    }

    /// Build a catalog from a widget manifest's bundled image list.
    pub fn from_manifest(manifest: &WidgetManifest) -> Result<Self> {
        Self::new(manifest.assets.images.clone())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source at `idx`, which must be within `[0, len)`.
    pub fn source_at(&self, idx: usize) -> &str {
        &self.sources[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::new(Vec::new()).unwrap_err().to_string();
        assert!(err.contains("at least one image"));
    }

    #[test]
    fn preserves_source_order() {
        let catalog = Catalog::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.source_at(0), "a");
        assert_eq!(catalog.source_at(1), "b");
        assert_eq!(catalog.source_at(2), "c");
    }

    #[test]
    fn from_manifest_takes_bundled_images() {
        let manifest = WidgetManifest::bundled().unwrap();
        let catalog = Catalog::from_manifest(&manifest).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.source_at(0), "images/1.jpeg");
    }
}
