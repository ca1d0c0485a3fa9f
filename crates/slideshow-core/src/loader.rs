use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use slideshow_host::SlideNode;

/// Asset access failures, tagged with the offending source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The asset bytes could not be read.
    Fetch { source: String, reason: String },
    /// The asset bytes were not a decodable image.
    Decode { source: String, reason: String },
}

impl LoadError {
    /// The source location this failure refers to.
    pub fn source_location(&self) -> &str {
        match self {
            Self::Fetch { source, .. } | Self::Decode { source, .. } => source,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch { source, reason } => {
                write!(f, "failed to read asset {source}: {reason}")
            }
            Self::Decode { source, reason } => {
                write!(f, "failed to decode image {source}: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Access to the deployed asset bundle.
pub trait AssetFetch: Send + Sync {
    /// Return the raw bytes for an asset location.
    fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError>;
}

/// Asset store rooted at the deployed bundle directory.
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetFetch for FsAssets {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        fs::read(self.root.join(location)).map_err(|err| LoadError::Fetch {
            source: location.to_string(),
            reason: err.to_string(),
        })
    }
}

/// Completion callback for one preload.
pub type LoadSink = Box<dyn FnOnce(Result<SlideNode, LoadError>) + Send>;

/// Background image preloader over an injected asset store.
pub struct Preloader {
    assets: Arc<dyn AssetFetch>,
}

impl Preloader {
    pub fn new(assets: Arc<dyn AssetFetch>) -> Self {
        Self { assets }
    }

    /// Fetch and decode `source` off-thread, delivering the result to
    /// `on_done` once the load settles.
    pub fn load(&self, source: String, on_done: LoadSink) {
        let assets = Arc::clone(&self.assets);
        thread::spawn(move || on_done(decode(assets.as_ref(), &source)));
    }

    /// Fetch and decode on the calling thread.
    pub fn load_blocking(&self, source: &str) -> Result<SlideNode, LoadError> {
        decode(self.assets.as_ref(), source)
    }
}

fn decode(assets: &dyn AssetFetch, source: &str) -> Result<SlideNode, LoadError> {
    let bytes = assets.fetch(source)?;
    let image = image::load_from_memory(&bytes).map_err(|err| LoadError::Decode {
        source: source.to_string(),
        reason: err.to_string(),
    })?;
    Ok(SlideNode {
        source: source.to_string(),
        image,
    })
}
