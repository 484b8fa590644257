//! JSON asset manifests
//!
//! A manifest lists the assets of a scene and optionally overrides
//! the session timeout and asset root:
//!
//! ```json
//! {
//!     "timeout_ms": 20000,
//!     "asset_root": "public",
//!     "assets": [
//!         { "name": "room", "path": "models/room.glb", "type": "glbModel" },
//!         { "name": "screen", "path": "textures/screen.mp4", "type": "videoTexture" }
//!     ]
//! }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::PreloadConfig;
use crate::descriptor::{self, AssetDescriptor};
use crate::error::Result;

/// Deserialized manifest file
#[derive(Debug, Clone, Deserialize)]
pub struct PreloadManifest {
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub asset_root: Option<PathBuf>,
    pub assets: Vec<AssetDescriptor>,
}

impl PreloadManifest {
    /// Parse a manifest from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        descriptor::validate(&manifest.assets)?;
        Ok(manifest)
    }

    /// Read and parse a manifest file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Split into descriptors and a config built on top of `base`
    pub fn into_parts(self, base: PreloadConfig) -> (Vec<AssetDescriptor>, PreloadConfig) {
        let mut config = base;
        if let Some(ms) = self.timeout_ms {
            config = config.with_load_timeout(Duration::from_millis(ms));
        }
        if let Some(root) = self.asset_root {
            config = config.with_asset_root(root);
        }
        (self.assets, config)
    }
}
