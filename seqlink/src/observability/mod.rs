//! Diagnostic output for link resolution.

mod sink;

pub use sink::{NoOpWarningSink, TracingWarningSink, WarningSink, WARNING_TARGET};
