//! Progress and failure presentation
//!
//! The preloader never touches a UI directly. It writes progress to a
//! [`ProgressSink`] and reports a terminal failure to an [`ErrorSink`];
//! the embedding application decides what those look like.

pub mod mock;

pub use mock::RecordingSink;

use crate::session::FailureReason;
use std::sync::Arc;

/// Receives overall load progress
///
/// Both writes happen for every progress update, text first.
/// Implementations must not call back into the preloader.
pub trait ProgressSink: Send + Sync {
    /// Percentage label, formatted as `"<rounded int>%"`
    fn set_percentage_text(&self, text: &str);

    /// Progress bar fill in percent (`0.0..=100.0`)
    fn set_bar_width(&self, percent: f32);
}

/// Receives the terminal failure of a session
///
/// Called at most once per session. Recovery is done by the embedding
/// application through [`crate::AssetPreloader::restart`].
pub trait ErrorSink: Send + Sync {
    fn show_failure(&self, reason: &FailureReason);
}

/// Progress and error sinks used by one session
#[derive(Clone)]
pub struct Sinks {
    pub progress: Arc<dyn ProgressSink>,
    pub error: Arc<dyn ErrorSink>,
}

impl Sinks {
    pub fn new(progress: Arc<dyn ProgressSink>, error: Arc<dyn ErrorSink>) -> Self {
        Self { progress, error }
    }

    /// Use one value for both progress and errors
    pub fn shared<T: ProgressSink + ErrorSink + 'static>(sink: Arc<T>) -> Self {
        Self {
            progress: sink.clone(),
            error: sink,
        }
    }

    /// Push a percentage to the progress sink
    pub(crate) fn push_percent(&self, percent: f32) {
        self.progress.set_percentage_text(&format_percent(percent));
        self.progress.set_bar_width(percent);
    }
}

impl Default for Sinks {
    fn default() -> Self {
        Self::shared(Arc::new(LogSink))
    }
}

impl std::fmt::Debug for Sinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sinks").finish_non_exhaustive()
    }
}

/// Format a percentage label
pub fn format_percent(percent: f32) -> String {
    format!("{}%", percent.round() as i64)
}

/// Writes progress and failures to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn set_percentage_text(&self, text: &str) {
        log::info!("Loading scene: {text}");
    }

    fn set_bar_width(&self, _percent: f32) {}
}

impl ErrorSink for LogSink {
    fn show_failure(&self, reason: &FailureReason) {
        log::error!("Unable to load 3D scene ({reason}); restart the preloader to retry");
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn set_percentage_text(&self, _text: &str) {}

    fn set_bar_width(&self, _percent: f32) {}
}

impl ErrorSink for NullSink {
    fn show_failure(&self, _reason: &FailureReason) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_rounds() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(33.333), "33%");
        assert_eq!(format_percent(66.5), "67%");
        assert_eq!(format_percent(100.0), "100%");
    }

    #[test]
    fn test_push_percent_writes_both() {
        let sink = Arc::new(RecordingSink::new());
        let sinks = Sinks::shared(sink.clone());

        sinks.push_percent(50.0);

        assert_eq!(sink.texts(), vec!["50%".to_string()]);
        assert_eq!(sink.widths(), vec![50.0]);
    }
}
