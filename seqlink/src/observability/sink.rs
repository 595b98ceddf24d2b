//! Warning sink trait and implementations.

use tracing::warn;

/// Tracing target used for resolver diagnostics.
pub const WARNING_TARGET: &str = "seqlink::resolver";

/// Trait for sinks that receive resolver diagnostics.
///
/// The resolver calls [`WarningSink::warn`] once for every identifier it
/// cannot parse. Implementations must not block and must not panic; the
/// call has no way to report failure back to the resolver.
pub trait WarningSink: Send + Sync {
    /// Records a diagnostic message.
    fn warn(&self, message: &str);
}

/// A no-op sink that discards all warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpWarningSink;

impl WarningSink for NoOpWarningSink {
    fn warn(&self, _message: &str) {}
}

/// A sink that forwards warnings to the tracing framework.
///
/// This is the default sink of [`crate::resolver::LinkResolver`]. Whether the
/// message is shown depends on the subscriber the host installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarningSink;

impl WarningSink for TracingWarningSink {
    fn warn(&self, message: &str) {
        warn!(target: WARNING_TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            if *meta.level() == tracing::Level::WARN && meta.target() == WARNING_TARGET {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_noop_sink() {
        let sink = NoOpWarningSink;
        sink.warn("ignored");
        // Should not panic
    }

    #[test]
    fn test_tracing_sink_emits_warn_event() {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&counter)));

        tracing::subscriber::with_default(subscriber, || {
            TracingWarningSink.warn("Unable to parse sequence id 'x'");
        });

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        TracingWarningSink.warn("nobody listening");
        // Should not panic
    }
}
