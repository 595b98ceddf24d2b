//! Testing utilities for code that renders hit links.
//!
//! This module provides:
//! - Recording collaborators for warnings and standard links
//! - Assertions over rendered hit lines

mod assertions;
mod mocks;

pub use assertions::{assert_single_anchor, assert_two_anchors, count_anchors};
pub use mocks::{FixedStandardLink, RecordingWarningSink};
