//! Preload session configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default session-wide load timeout
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Settings shared by every asset of a preload session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadConfig {
    /// How long the whole session may take before it is declared failed
    pub load_timeout: Duration,
    /// Base directory for relative descriptor paths
    pub asset_root: Option<PathBuf>,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            asset_root: None,
        }
    }
}

impl PreloadConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session-wide load timeout
    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    /// Set the base directory for relative asset paths
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    /// Resolve a descriptor path against the asset root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.asset_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}
