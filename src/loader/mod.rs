//! Model loader implementations

#[cfg(feature = "runtime-tokio")]
pub mod gltf;
pub mod mock;

pub use mock::MockModelLoader;

#[cfg(feature = "runtime-tokio")]
pub use gltf::GltfModelLoader;
