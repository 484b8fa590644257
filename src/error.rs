//! Error types for scene_preload

use thiserror::Error;

/// Errors raised while setting up a preload session
#[derive(Error, Debug)]
pub enum PreloadError {
    #[error("No assets to preload")]
    EmptyManifest,

    #[error("Duplicate asset name: {0}")]
    DuplicateAsset(String),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for preload operations
pub type Result<T> = std::result::Result<T, PreloadError>;
