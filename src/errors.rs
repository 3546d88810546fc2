use thiserror::Error;
use crate::Float;

/// Errors surfaced by the sift pipeline
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("Descriptor is degenerate: every sampled gradient had a zero x component")]
    DegenerateDescriptor,

    #[error("Cannot match against an empty keypoint set")]
    EmptyKeypointSet,

    #[error("No nearest neighbour passed the acceptance threshold of {threshold}")]
    NoAcceptedMatches { threshold: Float },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SiftError>;
