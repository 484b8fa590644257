//! Preload the assets listed in a manifest and report the outcome
//!
//! Run with: cargo run --example preload_scene -- path/to/assets.json

use scene_preload::{
    AssetPreloader, Loaders, LoadedAsset, PreloadConfig, PreloadManifest, PreloadOutcome, Sinks,
    TokioSpawner,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(manifest_path) = std::env::args().nth(1) else {
        anyhow::bail!("usage: preload_scene <manifest.json>");
    };

    let (assets, config) =
        PreloadManifest::from_path(&manifest_path)?.into_parts(PreloadConfig::default());
    let spawner = TokioSpawner::new();

    let (preloader, listener) =
        AssetPreloader::start(assets, Loaders::default(), Sinks::default(), config, &spawner)?;

    match listener.wait().await {
        PreloadOutcome::Ready => {
            println!("Scene ready: {} assets", preloader.loaded_count());
            for (name, asset) in preloader.items() {
                match asset {
                    LoadedAsset::Model(model) => println!(
                        "  {name}: model, {} meshes, {} nodes, {} bytes",
                        model.mesh_count(),
                        model.node_count(),
                        model.byte_len
                    ),
                    LoadedAsset::VideoTexture(texture) => {
                        println!("  {name}: video texture from {}", texture.source.display())
                    }
                }
            }
            Ok(())
        }
        PreloadOutcome::Failed(reason) => {
            anyhow::bail!("Unable to load 3D scene: {reason}")
        }
    }
}
