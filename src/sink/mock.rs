//! Recording sink for testing

use super::{ErrorSink, ProgressSink};
use crate::session::FailureReason;
use parking_lot::Mutex;

/// Records every write it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    texts: Mutex<Vec<String>>,
    widths: Mutex<Vec<f32>>,
    failures: Mutex<Vec<FailureReason>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage labels in write order
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().clone()
    }

    /// Bar widths in write order
    pub fn widths(&self) -> Vec<f32> {
        self.widths.lock().clone()
    }

    /// Failures shown so far
    pub fn failures(&self) -> Vec<FailureReason> {
        self.failures.lock().clone()
    }

    /// Most recent bar width
    pub fn last_width(&self) -> Option<f32> {
        self.widths.lock().last().copied()
    }
}

impl ProgressSink for RecordingSink {
    fn set_percentage_text(&self, text: &str) {
        self.texts.lock().push(text.to_string());
    }

    fn set_bar_width(&self, percent: f32) {
        self.widths.lock().push(percent);
    }
}

impl ErrorSink for RecordingSink {
    fn show_failure(&self, reason: &FailureReason) {
        self.failures.lock().push(reason.clone());
    }
}
