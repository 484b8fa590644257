use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Tracks load timings of one preload session
#[derive(Debug)]
pub struct PreloadMetrics {
    started_at: Instant,
    load_times: RwLock<HashMap<String, Duration>>,
    failures: AtomicU64,
    ignored_callbacks: AtomicU64,
}

impl Default for PreloadMetrics {
    fn default() -> Self {
        Self {
            started_at: Instant::now(),
            load_times: RwLock::new(HashMap::new()),
            failures: AtomicU64::new(0),
            ignored_callbacks: AtomicU64::new(0),
        }
    }
}

impl PreloadMetrics {
    /// Create metrics with the session clock starting now
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an asset finished, timed from session start
    pub fn record_loaded(&self, name: &str) {
        self.load_times
            .write()
            .insert(name.to_string(), self.started_at.elapsed());
    }

    /// Record a failed asset load
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completion callback that arrived too late or twice
    pub fn record_ignored(&self) {
        self.ignored_callbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Time from session start until the asset finished loading
    pub fn load_time(&self, name: &str) -> Option<Duration> {
        self.load_times.read().get(name).copied()
    }

    /// All recorded load times
    pub fn all_load_times(&self) -> HashMap<String, Duration> {
        self.load_times.read().clone()
    }

    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn ignored_count(&self) -> u64 {
        self.ignored_callbacks.load(Ordering::Relaxed)
    }

    /// Time since the session started
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// A thread-safe wrapper around PreloadMetrics
#[derive(Debug, Clone, Default)]
pub struct PreloadMetricsHandle(Arc<PreloadMetrics>);

impl PreloadMetricsHandle {
    /// Create a new metrics handle
    pub fn new() -> Self {
        Self(Arc::new(PreloadMetrics::new()))
    }
}

impl std::ops::Deref for PreloadMetricsHandle {
    type Target = PreloadMetrics;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
