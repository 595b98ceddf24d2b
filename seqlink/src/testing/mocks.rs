//! Recording collaborators for testing.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::HitCoordinates;
use crate::observability::WarningSink;
use crate::render::StandardLinkBuilder;

/// A warning sink that keeps every message it receives.
#[derive(Debug, Default)]
pub struct RecordingWarningSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingWarningSink {
    /// Creates a new recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Returns the number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Clears all recorded messages.
    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl WarningSink for RecordingWarningSink {
    fn warn(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// A standard-link builder that returns `<prefix><sequence_id>` and counts calls.
#[derive(Debug)]
pub struct FixedStandardLink {
    prefix: String,
    call_count: AtomicUsize,
}

impl FixedStandardLink {
    /// Creates a builder with the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Returns the number of links built.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl StandardLinkBuilder for FixedStandardLink {
    fn standard_link(&self, sequence_id: &str, _coordinates: HitCoordinates) -> String {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        format!("{}{sequence_id}", self.prefix)
    }
}
