//! scene_preload - One-shot asset preloading for 3D scenes
//!
//! # Features
//! - Loads glTF models and video textures from a fixed asset list
//! - Aggregate progress pushed to a pluggable UI sink
//! - Session-wide load timeout
//! - Single `Ready` / `Failed` outcome per session
//! - Async runtime abstraction (Tokio or a mock for tests)
//!
//! # Quick Start
//!
//! ```ignore
//! use scene_preload::{AssetDescriptor, AssetPreloader, Loaders, PreloadConfig, Sinks, TokioSpawner};
//!
//! let assets = vec![
//!     AssetDescriptor::model("room", "models/room.glb"),
//!     AssetDescriptor::video("screen", "textures/screen.mp4"),
//! ];
//! let (preloader, listener) = AssetPreloader::start(
//!     assets,
//!     Loaders::default(),
//!     Sinks::default(),
//!     PreloadConfig::default(),
//!     &TokioSpawner::new(),
//! )?;
//! if listener.wait().await.is_ready() {
//!     let room = preloader.get("room");
//! }
//! ```
//!
//! # Feature Flags
//!
//! - `runtime-tokio` (default): Tokio spawner and the filesystem glTF loader

pub mod config;
pub mod descriptor;
pub mod loader;
pub mod manifest;
pub mod metrics;
pub mod model;
pub mod runtime;
pub mod session;
pub mod sink;
pub mod video;

mod error;
pub use error::{PreloadError, Result};

pub use config::{PreloadConfig, DEFAULT_LOAD_TIMEOUT};
pub use descriptor::{AssetDescriptor, AssetKind};
pub use manifest::PreloadManifest;
pub use metrics::{PreloadMetrics, PreloadMetricsHandle};

// Re-export loader types
pub use loader::MockModelLoader;
#[cfg(feature = "runtime-tokio")]
pub use loader::GltfModelLoader;
pub use model::{LoadedModel, ModelError, ModelLoader, ProgressFn, TransferProgress};
pub use video::{
    ColorSpace, DefaultVideoTextureFactory, PlaybackSettings, TextureFilter, VideoError,
    VideoTexture, VideoTextureFactory,
};

// Re-export runtime types
pub use runtime::mock::MockSpawnBehavior;
pub use runtime::MockSpawner;
#[cfg(feature = "runtime-tokio")]
pub use runtime::TokioSpawner;
pub use runtime::{AsyncSpawner, BoxFuture};

// Re-export session types
pub use session::{
    AssetPreloader, FailureReason, LoadState, LoadedAsset, Loaders, PreloadOutcome, ReadyListener,
};
pub use sink::{ErrorSink, LogSink, NullSink, ProgressSink, RecordingSink, Sinks};

// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_timeout_exported() {
        assert_eq!(DEFAULT_LOAD_TIMEOUT.as_millis(), 15_000);
    }
}
