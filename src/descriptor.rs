//! Asset descriptors: the static input records of a preload session

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{PreloadError, Result};

/// Loading strategy for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    /// A binary glTF model, decoded by a [`crate::ModelLoader`]
    GlbModel,
    /// A looping video wrapped as a texture by a [`crate::VideoTextureFactory`]
    VideoTexture,
}

/// Names an asset, where it lives and how to load it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Unique key under which the loaded resource is stored
    pub name: String,
    /// Resource location, resolved against the configured asset root when relative
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: AssetKind,
}

impl AssetDescriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: AssetKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Shorthand for a glTF model descriptor
    pub fn model(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(name, path, AssetKind::GlbModel)
    }

    /// Shorthand for a video texture descriptor
    pub fn video(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(name, path, AssetKind::VideoTexture)
    }
}

/// Check that a descriptor list is non-empty and its names are unique
pub fn validate(descriptors: &[AssetDescriptor]) -> Result<()> {
    if descriptors.is_empty() {
        return Err(PreloadError::EmptyManifest);
    }

    let mut seen = HashSet::with_capacity(descriptors.len());
    for descriptor in descriptors {
        if !seen.insert(descriptor.name.as_str()) {
            return Err(PreloadError::DuplicateAsset(descriptor.name.clone()));
        }
    }
    Ok(())
}
