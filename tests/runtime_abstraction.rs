//! Integration tests for the async runtime abstraction

use scene_preload::{
    AssetDescriptor, AssetPreloader, AsyncSpawner, DefaultVideoTextureFactory, Loaders,
    MockModelLoader, MockSpawnBehavior, MockSpawner, PreloadConfig, PreloadOutcome,
    RecordingSink, Sinks,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[test]
fn test_mock_spawner_integration() {
    let spawner = MockSpawner::blocking();
    assert_eq!(spawner.behavior(), MockSpawnBehavior::BlockSync);

    let executed = Arc::new(AtomicBool::new(false));
    let executed_clone = Arc::clone(&executed);

    spawner.spawn(async move {
        executed_clone.store(true, Ordering::SeqCst);
    });

    // In blocking mode, should execute immediately
    assert!(executed.load(Ordering::SeqCst));
}

#[test]
fn test_preloader_generic_over_spawner() {
    fn run<S: AsyncSpawner>(spawner: &S) -> (AssetPreloader, Option<PreloadOutcome>) {
        let loader = Arc::new(MockModelLoader::new());
        let loaders = Loaders::new(loader, Arc::new(DefaultVideoTextureFactory::new()));
        let (preloader, mut listener) = AssetPreloader::start(
            vec![AssetDescriptor::model("room", "room.glb")],
            loaders,
            Sinks::shared(Arc::new(RecordingSink::new())),
            PreloadConfig::default(),
            spawner,
        )
        .unwrap();
        let outcome = listener.try_outcome();
        (preloader, outcome)
    }

    let (blocking, outcome) = run(&MockSpawner::blocking());
    assert_eq!(outcome, Some(PreloadOutcome::Ready));
    assert!(blocking.is_ready());

    // dropped tasks never settle the session
    let (dropping, outcome) = run(&MockSpawner::new());
    assert_eq!(outcome, None);
    assert_eq!(dropping.loaded_count(), 0);
}

#[test]
fn test_blocking_failure_settles_before_timer_is_armed() {
    let loader = Arc::new(MockModelLoader::new().failing("room.glb"));
    let loaders = Loaders::new(loader, Arc::new(DefaultVideoTextureFactory::new()));
    let sink = Arc::new(RecordingSink::new());
    let (preloader, mut listener) = AssetPreloader::start(
        vec![AssetDescriptor::model("room", "room.glb")],
        loaders,
        Sinks::shared(sink.clone()),
        PreloadConfig::default(),
        &MockSpawner::blocking(),
    )
    .unwrap();

    assert!(matches!(listener.try_outcome(), Some(PreloadOutcome::Failed(_))));
    assert!(preloader.is_failed());
    assert_eq!(sink.failures().len(), 1);
}
