//! Preload sessions
//!
//! An [`AssetPreloader`] loads a fixed list of assets, pushes aggregate
//! progress to a [`ProgressSink`](crate::ProgressSink) and settles exactly
//! once, either `Ready` when every asset loaded or `Failed` when one asset
//! failed or the session timeout elapsed first.
//!
//! All session state lives behind one mutex. Load tasks, progress callbacks
//! and the timeout task all take that lock before touching it, so "last
//! completion" and "timeout" can race freely and only one of them wins.

use crate::config::PreloadConfig;
use crate::descriptor::{self, AssetDescriptor, AssetKind};
use crate::error::Result;
use crate::metrics::PreloadMetricsHandle;
use crate::model::{LoadedModel, ModelLoader, TransferProgress};
use crate::runtime::{AsyncSpawner, BoxFuture};
use crate::sink::Sinks;
use crate::video::{VideoTexture, VideoTextureFactory};
use futures::channel::oneshot;
use futures::future::{AbortHandle, Abortable};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// A loaded resource, keyed by asset name in the session's item map
#[derive(Debug, Clone)]
pub enum LoadedAsset {
    Model(Arc<LoadedModel>),
    VideoTexture(Arc<VideoTexture>),
}

impl LoadedAsset {
    pub fn as_model(&self) -> Option<&Arc<LoadedModel>> {
        match self {
            LoadedAsset::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_video_texture(&self) -> Option<&Arc<VideoTexture>> {
        match self {
            LoadedAsset::VideoTexture(texture) => Some(texture),
            _ => None,
        }
    }
}

/// Why a session failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    #[error("asset '{name}' failed to load: {message}")]
    AssetFailed { name: String, message: String },

    #[error("timed out with {loaded}/{total} assets loaded")]
    TimedOut { loaded: usize, total: usize },

    #[error("preload session was dropped before it finished")]
    Abandoned,
}

/// Terminal result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadOutcome {
    Ready,
    Failed(FailureReason),
}

impl PreloadOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, PreloadOutcome::Ready)
    }
}

/// Receives the outcome of one session
///
/// There is exactly one listener per session and it observes exactly one
/// outcome.
#[derive(Debug)]
pub struct ReadyListener {
    rx: oneshot::Receiver<PreloadOutcome>,
    settled: Option<PreloadOutcome>,
}

impl ReadyListener {
    fn new(rx: oneshot::Receiver<PreloadOutcome>) -> Self {
        Self { rx, settled: None }
    }

    /// Wait until the session settles
    pub async fn wait(self) -> PreloadOutcome {
        if let Some(outcome) = self.settled {
            return outcome;
        }
        self.rx
            .await
            .unwrap_or(PreloadOutcome::Failed(FailureReason::Abandoned))
    }

    /// The outcome if the session already settled
    pub fn try_outcome(&mut self) -> Option<PreloadOutcome> {
        if self.settled.is_none() {
            self.settled = match self.rx.try_recv() {
                Ok(outcome) => outcome,
                Err(_) => Some(PreloadOutcome::Failed(FailureReason::Abandoned)),
            };
        }
        self.settled.clone()
    }
}

/// Result of recording a completed asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completion {
    /// Counted; carries the percentage to display
    Progress(f32),
    /// Counted and it was the last one
    Ready(f32),
    /// The name already completed
    Duplicate,
    /// The session already settled
    AfterTerminal,
}

/// Counters and items of one session
#[derive(Debug)]
pub struct LoadState {
    total: usize,
    loaded: usize,
    completed: HashSet<String>,
    items: HashMap<String, LoadedAsset>,
    failed: bool,
    ready: bool,
    last_percent: f32,
}

impl LoadState {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            loaded: 0,
            completed: HashSet::with_capacity(total),
            items: HashMap::with_capacity(total),
            failed: false,
            ready: false,
            last_percent: 0.0,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_terminal(&self) -> bool {
        self.failed || self.ready
    }

    /// Highest percentage reported so far
    pub fn percent(&self) -> f32 {
        self.last_percent
    }

    pub fn items(&self) -> &HashMap<String, LoadedAsset> {
        &self.items
    }

    /// Store a loaded asset and count it once
    pub fn record_completion(&mut self, name: &str, asset: LoadedAsset) -> Completion {
        if self.is_terminal() {
            return Completion::AfterTerminal;
        }
        if !self.completed.insert(name.to_string()) {
            return Completion::Duplicate;
        }

        self.items.insert(name.to_string(), asset);
        self.loaded += 1;
        let percent = self.raise_percent(self.loaded as f32 / self.total as f32 * 100.0);

        if self.loaded == self.total {
            self.ready = true;
            Completion::Ready(percent)
        } else {
            Completion::Progress(percent)
        }
    }

    /// Percentage to display for byte progress of an in-flight asset
    ///
    /// `None` when nothing should be pushed: the session settled, the asset
    /// already counted, or the value would move the bar backwards.
    pub fn transfer_percent(&mut self, name: &str, fraction: f32) -> Option<f32> {
        if self.is_terminal() || self.completed.contains(name) {
            return None;
        }
        let candidate = (self.loaded as f32 + fraction) / self.total as f32 * 100.0;
        if candidate <= self.last_percent {
            return None;
        }
        Some(self.raise_percent(candidate))
    }

    /// Latch the failed flag; false if the session had already settled
    pub fn latch_failure(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.failed = true;
        true
    }

    fn raise_percent(&mut self, candidate: f32) -> f32 {
        self.last_percent = self.last_percent.max(candidate.min(100.0));
        self.last_percent
    }
}

/// Model and video capabilities used by a session
#[derive(Clone)]
pub struct Loaders {
    pub model: Arc<dyn ModelLoader>,
    pub video: Arc<dyn VideoTextureFactory>,
}

impl Loaders {
    pub fn new(model: Arc<dyn ModelLoader>, video: Arc<dyn VideoTextureFactory>) -> Self {
        Self { model, video }
    }
}

#[cfg(feature = "runtime-tokio")]
impl Default for Loaders {
    fn default() -> Self {
        Self::new(
            Arc::new(crate::loader::GltfModelLoader::new()),
            Arc::new(crate::video::DefaultVideoTextureFactory::new()),
        )
    }
}

impl std::fmt::Debug for Loaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loaders").finish_non_exhaustive()
    }
}

type TimeoutDelay = Abortable<BoxFuture<'static, ()>>;

struct SessionState {
    load: LoadState,
    timeout: Option<AbortHandle>,
    notifier: Option<oneshot::Sender<PreloadOutcome>>,
}

impl SessionState {
    fn cancel_timeout(&mut self) {
        if let Some(timeout) = self.timeout.take() {
            timeout.abort();
        }
    }

    fn notify(&mut self, outcome: PreloadOutcome) {
        if let Some(tx) = self.notifier.take() {
            if tx.send(outcome).is_err() {
                log::debug!("Preload listener dropped before the session settled");
            }
        }
    }
}

struct Shared {
    id: Uuid,
    descriptors: Arc<[AssetDescriptor]>,
    loaders: Loaders,
    sinks: Sinks,
    config: PreloadConfig,
    metrics: PreloadMetricsHandle,
    state: Mutex<SessionState>,
}

impl Shared {
    fn load<S: AsyncSpawner>(self: &Arc<Self>, descriptor: &AssetDescriptor, spawner: &S) {
        let path = self.config.resolve(&descriptor.path);
        log::debug!("[{}] Loading {} from {}", self.id, descriptor.name, path.display());

        match descriptor.kind {
            AssetKind::GlbModel => {
                let shared = Arc::clone(self);
                let name = descriptor.name.clone();
                spawner.spawn(async move {
                    let progress_shared = Arc::clone(&shared);
                    let progress_name = name.clone();
                    let on_progress = move |progress: TransferProgress| {
                        progress_shared.on_transfer(&progress_name, progress);
                    };

                    match shared.loaders.model.load(&path, &on_progress).await {
                        Ok(model) => shared.complete(&name, LoadedAsset::Model(Arc::new(model))),
                        Err(e) => {
                            log::error!(
                                "[{}] Failed to load model: {}: {e}",
                                shared.id,
                                path.display()
                            );
                            shared.metrics.record_failure();
                            shared.fail(FailureReason::AssetFailed {
                                name,
                                message: e.to_string(),
                            });
                        }
                    }
                });
            }
            // No playback readiness is awaited: a built texture counts as loaded.
            AssetKind::VideoTexture => match self.loaders.video.create(&path) {
                Ok(texture) => {
                    self.complete(&descriptor.name, LoadedAsset::VideoTexture(Arc::new(texture)))
                }
                Err(e) => {
                    log::error!(
                        "[{}] Failed to create video texture: {}: {e}",
                        self.id,
                        path.display()
                    );
                    self.metrics.record_failure();
                    self.fail(FailureReason::AssetFailed {
                        name: descriptor.name.clone(),
                        message: e.to_string(),
                    });
                }
            },
        }
    }

    /// Start the timeout clock and register its abort handle
    ///
    /// The delay is created before any load is dispatched so the deadline
    /// counts from construction; the task that awaits it is spawned later by
    /// [`Shared::arm_timeout`].
    fn reserve_timeout<S: AsyncSpawner>(&self, spawner: &S) -> TimeoutDelay {
        let (handle, registration) = AbortHandle::new_pair();
        self.state.lock().timeout = Some(handle);
        Abortable::new(spawner.sleep(self.config.load_timeout), registration)
    }

    fn arm_timeout<S: AsyncSpawner>(self: &Arc<Self>, delay: TimeoutDelay, spawner: &S) {
        if self.state.lock().load.is_terminal() {
            return;
        }

        let shared = Arc::clone(self);
        spawner.spawn(async move {
            if delay.await.is_ok() {
                shared.on_timeout();
            }
        });
    }

    fn on_transfer(&self, name: &str, progress: TransferProgress) {
        let Some(fraction) = progress.fraction() else {
            return;
        };
        let mut state = self.state.lock();
        if let Some(percent) = state.load.transfer_percent(name, fraction) {
            self.sinks.push_percent(percent);
        }
    }

    fn complete(&self, name: &str, asset: LoadedAsset) {
        let mut state = self.state.lock();
        match state.load.record_completion(name, asset) {
            Completion::Progress(percent) => {
                self.metrics.record_loaded(name);
                self.sinks.push_percent(percent);
                log::debug!(
                    "[{}] Loaded {} ({}/{})",
                    self.id,
                    name,
                    state.load.loaded(),
                    state.load.total()
                );
            }
            Completion::Ready(percent) => {
                self.metrics.record_loaded(name);
                self.sinks.push_percent(percent);
                state.cancel_timeout();
                log::info!(
                    "[{}] All {} assets loaded in {:?}",
                    self.id,
                    state.load.total(),
                    self.metrics.elapsed()
                );
                state.notify(PreloadOutcome::Ready);
            }
            Completion::Duplicate => {
                self.metrics.record_ignored();
                log::warn!("[{}] Ignoring duplicate completion of {}", self.id, name);
            }
            Completion::AfterTerminal => {
                self.metrics.record_ignored();
                log::debug!("[{}] Ignoring {} loaded after the session settled", self.id, name);
            }
        }
    }

    fn fail(&self, reason: FailureReason) {
        let mut state = self.state.lock();
        self.fail_locked(&mut state, reason);
    }

    fn fail_locked(&self, state: &mut SessionState, reason: FailureReason) {
        if !state.load.latch_failure() {
            log::debug!("[{}] Session already settled, not reporting: {reason}", self.id);
            return;
        }
        state.cancel_timeout();
        self.sinks.error.show_failure(&reason);
        state.notify(PreloadOutcome::Failed(reason));
    }

    fn on_timeout(&self) {
        let mut state = self.state.lock();
        if state.load.is_terminal() {
            return;
        }
        let (loaded, total) = (state.load.loaded(), state.load.total());
        log::error!(
            "[{}] Asset loading timed out after {:.1}s. Loaded {}/{} assets.",
            self.id,
            self.config.load_timeout.as_secs_f32(),
            loaded,
            total
        );
        self.fail_locked(&mut state, FailureReason::TimedOut { loaded, total });
    }
}

/// Loads a fixed set of assets and settles once
///
/// Loading starts in [`AssetPreloader::start`]; the returned
/// [`ReadyListener`] observes the outcome. Dropping the preloader before it
/// settles ends the session as [`FailureReason::Abandoned`] without
/// touching the error sink.
pub struct AssetPreloader {
    shared: Arc<Shared>,
}

impl AssetPreloader {
    /// Validate `descriptors` and start loading all of them
    pub fn start<S: AsyncSpawner>(
        descriptors: Vec<AssetDescriptor>,
        loaders: Loaders,
        sinks: Sinks,
        config: PreloadConfig,
        spawner: &S,
    ) -> Result<(Self, ReadyListener)> {
        descriptor::validate(&descriptors)?;
        Ok(Self::launch(descriptors.into(), loaders, sinks, config, spawner))
    }

    /// Abandon this session and start a fresh one with the same assets
    pub fn restart<S: AsyncSpawner>(self, spawner: &S) -> (Self, ReadyListener) {
        log::info!("[{}] Restarting preload session", self.shared.id);
        let Shared {
            descriptors,
            loaders,
            sinks,
            config,
            ..
        } = &*self.shared;
        Self::launch(
            Arc::clone(descriptors),
            loaders.clone(),
            sinks.clone(),
            config.clone(),
            spawner,
        )
    }

    fn launch<S: AsyncSpawner>(
        descriptors: Arc<[AssetDescriptor]>,
        loaders: Loaders,
        sinks: Sinks,
        config: PreloadConfig,
        spawner: &S,
    ) -> (Self, ReadyListener) {
        let (tx, rx) = oneshot::channel();
        let shared = Arc::new(Shared {
            id: Uuid::new_v4(),
            state: Mutex::new(SessionState {
                load: LoadState::new(descriptors.len()),
                timeout: None,
                notifier: Some(tx),
            }),
            descriptors,
            loaders,
            sinks,
            config,
            metrics: PreloadMetricsHandle::new(),
        });

        log::info!(
            "[{}] Preloading {} assets on {} (timeout {:?})",
            shared.id,
            shared.descriptors.len(),
            spawner.runtime_name(),
            shared.config.load_timeout
        );

        let delay = shared.reserve_timeout(spawner);
        for descriptor in shared.descriptors.iter() {
            shared.load(descriptor, spawner);
        }
        shared.arm_timeout(delay, spawner);

        (Self { shared }, ReadyListener::new(rx))
    }

    /// Identifier used to tag this session's log lines
    pub fn session_id(&self) -> Uuid {
        self.shared.id
    }

    pub fn descriptors(&self) -> &[AssetDescriptor] {
        &self.shared.descriptors
    }

    pub fn config(&self) -> &PreloadConfig {
        &self.shared.config
    }

    pub fn metrics(&self) -> &PreloadMetricsHandle {
        &self.shared.metrics
    }

    pub fn total(&self) -> usize {
        self.shared.state.lock().load.total()
    }

    pub fn loaded_count(&self) -> usize {
        self.shared.state.lock().load.loaded()
    }

    pub fn is_ready(&self) -> bool {
        self.shared.state.lock().load.is_ready()
    }

    pub fn is_failed(&self) -> bool {
        self.shared.state.lock().load.is_failed()
    }

    /// Highest percentage pushed to the progress sink
    pub fn percent(&self) -> f32 {
        self.shared.state.lock().load.percent()
    }

    /// A loaded asset by name
    pub fn get(&self, name: &str) -> Option<LoadedAsset> {
        self.shared.state.lock().load.items().get(name).cloned()
    }

    /// Snapshot of every loaded asset
    pub fn items(&self) -> HashMap<String, LoadedAsset> {
        self.shared.state.lock().load.items().clone()
    }
}

impl Drop for AssetPreloader {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock();
        state.cancel_timeout();
        if state.load.latch_failure() {
            log::debug!("[{}] Preloader dropped before settling", self.shared.id);
            state.notify(PreloadOutcome::Failed(FailureReason::Abandoned));
        }
    }
}

impl std::fmt::Debug for AssetPreloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("AssetPreloader")
            .field("id", &self.shared.id)
            .field("loaded", &state.load.loaded())
            .field("total", &state.load.total())
            .field("failed", &state.load.is_failed())
            .field("ready", &state.load.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MockModelLoader;
    use crate::runtime::MockSpawner;
    use crate::sink::RecordingSink;
    use crate::video::DefaultVideoTextureFactory;

    fn video_asset() -> LoadedAsset {
        LoadedAsset::VideoTexture(Arc::new(VideoTexture::new("screen.mp4")))
    }

    fn mock_loaders(model: MockModelLoader) -> Loaders {
        Loaders::new(Arc::new(model), Arc::new(DefaultVideoTextureFactory::new()))
    }

    fn start(
        descriptors: Vec<AssetDescriptor>,
        model: MockModelLoader,
        spawner: &MockSpawner,
    ) -> (AssetPreloader, ReadyListener, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let (preloader, listener) = AssetPreloader::start(
            descriptors,
            mock_loaders(model),
            Sinks::shared(sink.clone()),
            PreloadConfig::default(),
            spawner,
        )
        .unwrap();
        (preloader, listener, sink)
    }

    #[test]
    fn test_load_state_counts_each_name_once() {
        let mut state = LoadState::new(2);
        assert_eq!(state.record_completion("a", video_asset()), Completion::Progress(50.0));
        assert_eq!(state.record_completion("a", video_asset()), Completion::Duplicate);
        assert_eq!(state.loaded(), 1);
        assert_eq!(state.record_completion("b", video_asset()), Completion::Ready(100.0));
        assert!(state.is_ready());
        assert_eq!(state.record_completion("c", video_asset()), Completion::AfterTerminal);
        assert_eq!(state.loaded(), 2);
    }

    #[test]
    fn test_load_state_transfer_percent_never_regresses() {
        let mut state = LoadState::new(2);
        assert_eq!(state.transfer_percent("a", 0.8), Some(40.0));
        // a second in-flight asset behind the first one
        assert_eq!(state.transfer_percent("b", 0.2), None);
        assert_eq!(state.record_completion("a", video_asset()), Completion::Progress(50.0));
        assert_eq!(state.transfer_percent("a", 0.9), None);
        assert_eq!(state.transfer_percent("b", 0.5), Some(75.0));
        assert_eq!(state.percent(), 75.0);
    }

    #[test]
    fn test_load_state_failure_latches_once() {
        let mut state = LoadState::new(1);
        assert!(state.latch_failure());
        assert!(!state.latch_failure());
        assert_eq!(state.transfer_percent("a", 0.5), None);
        assert_eq!(state.record_completion("a", video_asset()), Completion::AfterTerminal);
        assert!(!state.is_ready());
    }

    #[test]
    fn test_all_assets_ready() {
        let spawner = MockSpawner::blocking();
        let (preloader, mut listener, sink) = start(
            vec![
                AssetDescriptor::model("room", "room.glb"),
                AssetDescriptor::video("screen", "screen.mp4"),
            ],
            MockModelLoader::new(),
            &spawner,
        );

        assert_eq!(listener.try_outcome(), Some(PreloadOutcome::Ready));
        assert!(preloader.is_ready());
        assert!(!preloader.is_failed());
        assert_eq!(preloader.loaded_count(), 2);
        assert!(preloader.get("room").and_then(|a| a.as_model().cloned()).is_some());
        assert!(preloader
            .get("screen")
            .and_then(|a| a.as_video_texture().cloned())
            .is_some());
        assert_eq!(sink.last_width(), Some(100.0));
        assert_eq!(sink.texts().last().map(String::as_str), Some("100%"));
        assert!(sink.failures().is_empty());
        assert!(preloader.metrics().load_time("room").is_some());
    }

    #[test]
    fn test_model_failure_fails_session() {
        let spawner = MockSpawner::blocking();
        let (preloader, listener, sink) = start(
            vec![
                AssetDescriptor::model("broken", "broken.glb"),
                AssetDescriptor::model("room", "room.glb"),
            ],
            MockModelLoader::new().failing("broken.glb"),
            &spawner,
        );

        let outcome = futures::executor::block_on(listener.wait());
        assert!(matches!(
            outcome,
            PreloadOutcome::Failed(FailureReason::AssetFailed { ref name, .. }) if name == "broken"
        ));
        assert!(preloader.is_failed());
        assert_eq!(sink.failures().len(), 1);
        // the other load finished after the failure and was not counted
        assert_eq!(preloader.loaded_count(), 0);
        assert!(preloader.get("room").is_none());
        assert_eq!(preloader.metrics().ignored_count(), 1);
    }

    #[test]
    fn test_timeout_fires_once_while_pending() {
        // the drop spawner discards both the load and the timer task
        let spawner = MockSpawner::new();
        let (preloader, mut listener, sink) = start(
            vec![AssetDescriptor::model("room", "room.glb")],
            MockModelLoader::new(),
            &spawner,
        );
        assert_eq!(listener.try_outcome(), None);

        preloader.shared.on_timeout();
        assert_eq!(
            listener.try_outcome(),
            Some(PreloadOutcome::Failed(FailureReason::TimedOut { loaded: 0, total: 1 }))
        );
        assert_eq!(sink.failures().len(), 1);

        // a second firing is a no-op
        preloader.shared.on_timeout();
        assert_eq!(sink.failures().len(), 1);
    }

    #[test]
    fn test_video_only_session_settles_without_timer() {
        let spawner = MockSpawner::blocking();
        let (preloader, mut listener, _sink) = start(
            vec![AssetDescriptor::video("screen", "screen.mp4")],
            MockModelLoader::new(),
            &spawner,
        );

        assert_eq!(listener.try_outcome(), Some(PreloadOutcome::Ready));
        assert!(preloader.shared.state.lock().timeout.is_none());
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let spawner = MockSpawner::new();
        let (preloader, mut listener, sink) = start(
            vec![
                AssetDescriptor::model("a", "a.glb"),
                AssetDescriptor::model("b", "b.glb"),
            ],
            MockModelLoader::new(),
            &spawner,
        );

        preloader.shared.complete("a", video_asset());
        preloader.shared.complete("a", video_asset());

        assert_eq!(preloader.loaded_count(), 1);
        assert_eq!(preloader.metrics().ignored_count(), 1);
        assert_eq!(sink.widths(), vec![50.0]);
        assert_eq!(listener.try_outcome(), None);
    }

    #[test]
    fn test_late_failure_after_ready_is_ignored() {
        let spawner = MockSpawner::blocking();
        let (preloader, listener, sink) = start(
            vec![AssetDescriptor::model("room", "room.glb")],
            MockModelLoader::new(),
            &spawner,
        );

        preloader.shared.fail(FailureReason::AssetFailed {
            name: "room".to_string(),
            message: "late".to_string(),
        });

        assert!(preloader.is_ready());
        assert!(!preloader.is_failed());
        assert!(sink.failures().is_empty());
        assert_eq!(futures::executor::block_on(listener.wait()), PreloadOutcome::Ready);
    }

    #[test]
    fn test_drop_abandons_pending_session() {
        let spawner = MockSpawner::new();
        let (preloader, listener, sink) = start(
            vec![AssetDescriptor::model("room", "room.glb")],
            MockModelLoader::new(),
            &spawner,
        );

        drop(preloader);
        assert_eq!(
            futures::executor::block_on(listener.wait()),
            PreloadOutcome::Failed(FailureReason::Abandoned)
        );
        assert!(sink.failures().is_empty());
    }

    #[test]
    fn test_restart_starts_fresh_session() {
        let spawner = MockSpawner::blocking();
        let (preloader, _listener, sink) = start(
            vec![AssetDescriptor::model("broken", "broken.glb")],
            MockModelLoader::new().failing("broken.glb"),
            &spawner,
        );
        assert!(preloader.is_failed());
        let first_id = preloader.session_id();

        let (restarted, mut listener) = preloader.restart(&spawner);
        assert_ne!(restarted.session_id(), first_id);
        assert_eq!(restarted.descriptors().len(), 1);
        assert!(restarted.is_failed());
        assert!(matches!(listener.try_outcome(), Some(PreloadOutcome::Failed(_))));
        assert_eq!(sink.failures().len(), 2);
    }

    #[test]
    fn test_start_rejects_empty_list() {
        let spawner = MockSpawner::new();
        let result = AssetPreloader::start(
            Vec::new(),
            mock_loaders(MockModelLoader::new()),
            Sinks::default(),
            PreloadConfig::default(),
            &spawner,
        );
        assert!(matches!(result, Err(crate::PreloadError::EmptyManifest)));
    }
}
