use std::fmt;

/// Host boundary failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The configuration service rejected the fetch.
    ConfigUnavailable(String),
    /// The configuration payload had an unusable shape.
    ConfigShape(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigUnavailable(msg) => write!(f, "configuration fetch failed: {msg}"),
            Self::ConfigShape(msg) => write!(f, "unusable configuration payload: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}
