//! Mock model loader for testing
//!
//! Resolves every load immediately, so it works with any spawner,
//! including [`crate::MockSpawner`] in blocking mode.

use crate::model::{LoadedModel, ModelError, ModelLoader, ProgressFn, TransferProgress};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const MOCK_GLTF: &str = r#"{"asset":{"version":"2.0"},"nodes":[{"name":"mock"}]}"#;

/// Mock model loader with configurable per-path failures
#[derive(Debug, Default)]
pub struct MockModelLoader {
    failing: HashSet<PathBuf>,
    requested: Mutex<Vec<PathBuf>>,
}

impl MockModelLoader {
    /// Create a loader where every load succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make loads of `path` fail
    pub fn failing(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Paths requested so far, in request order
    pub fn requested(&self) -> Vec<PathBuf> {
        self.requested.lock().clone()
    }
}

#[async_trait::async_trait]
impl ModelLoader for MockModelLoader {
    async fn load(&self, path: &Path, progress: &ProgressFn) -> Result<LoadedModel, ModelError> {
        self.requested.lock().push(path.to_path_buf());

        let total = MOCK_GLTF.len() as u64;
        progress(TransferProgress::new(total / 2, total));

        if self.failing.contains(path) {
            return Err(ModelError::LoadError(format!("mock failure for {}", path.display())));
        }

        progress(TransferProgress::new(total, total));
        LoadedModel::from_bytes(path, MOCK_GLTF.as_bytes())
    }
}
