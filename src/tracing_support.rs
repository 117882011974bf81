//! Tracing support.
//!
//! With the `tracing` feature enabled, algorithms open spans and mutations
//! emit `debug!` events through the `tracing` crate, and [`init_tracing`]
//! installs a subscriber that prints events (filtered by `RUST_LOG`) and
//! accumulates the wall time spent in each span.  Without the feature the
//! macros compile to nothing and the functions are no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        collections::BTreeMap,
        sync::{Mutex, Once},
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        EnvFilter, Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    static SPAN_TIMINGS: Mutex<BTreeMap<&'static str, SpanTiming>> = Mutex::new(BTreeMap::new());

    /// Total time spent in, and number of closes of, spans with one name.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(start) = span.extensions().get::<Instant>().copied() else {
                return;
            };
            if let Ok(mut timings) = SPAN_TIMINGS.lock() {
                let entry = timings.entry(span.metadata().name()).or_default();
                entry.total += start.elapsed();
                entry.count += 1;
            }
        }
    }

    /// Installs the global subscriber.  Safe to call more than once; only the
    /// first call has an effect, and a subscriber installed by someone else
    /// is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let fmt = tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_filter(EnvFilter::from_default_env());
            let _ = Registry::default().with(fmt).with(TimingLayer).try_init();
        });
    }

    /// A snapshot of the accumulated span timings, keyed by span name.
    pub fn span_timings() -> BTreeMap<&'static str, SpanTiming> {
        SPAN_TIMINGS
            .lock()
            .map(|timings| timings.clone())
            .unwrap_or_default()
    }

    pub fn reset_span_timings() {
        init_tracing();
        if let Ok(mut timings) = SPAN_TIMINGS.lock() {
            timings.clear();
        }
    }

    /// Prints the accumulated timings to stderr, slowest first.
    pub fn dump_span_timings() {
        let mut entries: Vec<_> = span_timings().into_iter().collect();
        entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        eprintln!("span timings (desc):");
        for (name, timing) in entries {
            eprintln!("  {name}: {:?} ({}x)", timing.total, timing.count);
        }
    }

    pub use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::{collections::BTreeMap, time::Duration};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    pub fn init_tracing() {}

    pub fn span_timings() -> BTreeMap<&'static str, SpanTiming> {
        BTreeMap::new()
    }

    pub fn reset_span_timings() {}

    pub fn dump_span_timings() {}

    macro_rules! info_span {
        ($($args:tt)*) => {
            $crate::tracing_support::NoOpSpan
        };
    }

    macro_rules! debug {
        ($($args:tt)*) => {};
    }

    #[allow(unused_imports)]
    pub(crate) use {debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
        reset_span_timings();
        let _ = span_timings();
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_spans_are_timed() {
        init_tracing();
        {
            let _span = info_span!("tracing_support_test_span").entered();
        }
        // Another subscriber may already be installed by the test harness, in
        // which case nothing is recorded; only check the shape when it is.
        if let Some(timing) = span_timings().get("tracing_support_test_span") {
            assert!(timing.count >= 1);
        }
    }
}
