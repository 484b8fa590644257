//! Model loading capability and decoded model data

use gltf::json;
use gltf::{Document, Glb};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for model loading operations
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to load model: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GLTF error: {0}")]
    Gltf(#[from] gltf::Error),
}

/// Required extensions accepted even though their data is not decoded here
///
/// Draco-compressed meshes are decoded by the renderer, so the preloader
/// only has to accept the document.
pub const TOLERATED_REQUIRED_EXTENSIONS: &[&str] = &["KHR_draco_mesh_compression"];

/// Byte-level progress of a single transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    pub loaded: u64,
    pub total: u64,
    /// Whether `total` is known
    pub length_computable: bool,
}

impl TransferProgress {
    /// Progress of a transfer whose size is known
    pub fn new(loaded: u64, total: u64) -> Self {
        Self {
            loaded,
            total,
            length_computable: true,
        }
    }

    /// Progress of a transfer whose size is unknown
    pub fn indeterminate(loaded: u64) -> Self {
        Self {
            loaded,
            total: 0,
            length_computable: false,
        }
    }

    /// Fraction transferred in `0.0..=1.0`, if computable
    pub fn fraction(&self) -> Option<f32> {
        if !self.length_computable || self.total == 0 {
            return None;
        }
        Some((self.loaded as f64 / self.total as f64).clamp(0.0, 1.0) as f32)
    }
}

/// Callback receiving transfer progress while a model loads
pub type ProgressFn = dyn Fn(TransferProgress) + Send + Sync;

/// A decoded glTF model
#[derive(Debug, Clone)]
pub struct LoadedModel {
    /// Where the model was loaded from
    pub path: PathBuf,
    /// Parsed glTF document
    pub document: gltf::Document,
    /// Binary chunk of a GLB container
    pub blob: Option<Vec<u8>>,
    /// Size of the source data in bytes
    pub byte_len: usize,
}

impl LoadedModel {
    /// Decode a glTF or GLB payload
    pub fn from_bytes(path: impl Into<PathBuf>, data: &[u8]) -> Result<Self, ModelError> {
        let (root, blob) = if data.starts_with(b"glTF") {
            let glb = Glb::from_slice(data)?;
            let root = json::Root::from_slice(&glb.json).map_err(gltf::Error::Deserialize)?;
            (root, glb.bin.map(|bin| bin.into_owned()))
        } else {
            let root = json::Root::from_slice(data).map_err(gltf::Error::Deserialize)?;
            (root, None)
        };
        let document = validate_tolerating_extensions(root)?;
        Ok(Self {
            path: path.into(),
            document,
            blob,
            byte_len: data.len(),
        })
    }

    pub fn mesh_count(&self) -> usize {
        self.document.meshes().count()
    }

    pub fn material_count(&self) -> usize {
        self.document.materials().count()
    }

    pub fn node_count(&self) -> usize {
        self.document.nodes().count()
    }

    /// Whether the meshes need a Draco decoder
    pub fn is_draco_compressed(&self) -> bool {
        self.document
            .extensions_required()
            .any(|ext| ext == "KHR_draco_mesh_compression")
    }

    /// Index of the first root node of the default scene
    pub fn scene_root(&self) -> Option<usize> {
        self.document
            .default_scene()
            .and_then(|s| s.nodes().next())
            .map(|n| n.index())
    }
}

/// Validate `root`, ignoring required extensions listed in
/// [`TOLERATED_REQUIRED_EXTENSIONS`]
fn validate_tolerating_extensions(mut root: json::Root) -> Result<Document, gltf::Error> {
    let (tolerated, others): (Vec<String>, Vec<String>) = root
        .extensions_required
        .drain(..)
        .partition(|ext| TOLERATED_REQUIRED_EXTENSIONS.contains(&ext.as_str()));
    root.extensions_required = others;

    let mut root = Document::from_json(root)?.into_json();
    root.extensions_required.extend(tolerated);
    Ok(Document::from_json_without_validation(root))
}

/// Capability that fetches and decodes a model
///
/// Implementations report byte progress through `progress` as data arrives
/// and resolve once with the decoded model or an error.
#[async_trait::async_trait]
pub trait ModelLoader: Send + Sync {
    async fn load(&self, path: &Path, progress: &ProgressFn) -> Result<LoadedModel, ModelError>;
}

#[cfg(test)]
pub(crate) const MINIMAL_GLTF: &str = r#"{
    "asset": { "version": "2.0" },
    "nodes": [ { "name": "root" } ],
    "scenes": [ { "nodes": [0] } ],
    "scene": 0
}"#;

#[cfg(test)]
pub(crate) const DRACO_GLTF: &str = r#"{
    "asset": { "version": "2.0" },
    "extensionsUsed": ["KHR_draco_mesh_compression"],
    "extensionsRequired": ["KHR_draco_mesh_compression"],
    "nodes": [ { "name": "root" } ]
}"#;
