//! GLTF/GLB model loading from the filesystem
//!
//! Files are read in fixed-size chunks so byte progress can be reported
//! while the transfer is underway, then decoded in one pass.

use crate::model::{LoadedModel, ModelError, ModelLoader, ProgressFn, TransferProgress};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Default read chunk size
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Upper bound on the buffer reserved up front from the reported file size
pub const MAX_PREALLOCATION: usize = 64 * 1024 * 1024;

fn initial_capacity(total: u64) -> usize {
    usize::try_from(total)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATION)
}

/// Loads `.glb` and embedded `.gltf` files with `tokio::fs`
#[derive(Debug, Clone)]
pub struct GltfModelLoader {
    chunk_size: usize,
}

impl Default for GltfModelLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GltfModelLoader {
    /// Create a loader with the default chunk size
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a loader reading `chunk_size` bytes at a time
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

#[async_trait::async_trait]
impl ModelLoader for GltfModelLoader {
    async fn load(&self, path: &Path, progress: &ProgressFn) -> Result<LoadedModel, ModelError> {
        let mut file = tokio::fs::File::open(path).await?;
        let total = file.metadata().await?.len();

        let mut data = Vec::with_capacity(initial_capacity(total));
        let mut chunk = vec![0u8; self.chunk_size];
        loop {
            let read = file.read(&mut chunk).await?;
            if read == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..read]);
            progress(TransferProgress::new(data.len() as u64, total));
        }

        log::debug!("Read {} bytes from {}", data.len(), path.display());
        LoadedModel::from_bytes(path, &data)
    }
}
