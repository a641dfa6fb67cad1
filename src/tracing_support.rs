//! Tracing support for logging and performance monitoring.
//!
//! With the `tracing` feature enabled every search runs inside an
//! `info_span!` named after the algorithm and reports its progress through
//! `debug!` and `trace!` events.  [`init_tracing`] installs a subscriber
//! that accumulates the wall time of each span name, and prints the events
//! to stderr when the `GRAPHSEARCH_LOG` environment variable holds an
//! `EnvFilter` directive such as `graphsearch=trace`.
//!
//! Without the feature the same macros expand to nothing and the timing
//! functions are no-ops.

use std::time::Duration;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "GRAPHSEARCH_LOG";

/// Groups span timings so that setup work can be told apart from the
/// searches being measured.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimingScope {
    #[default]
    Search,
    Setup,
}

/// Accumulated wall time of all closed spans with one name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SpanTiming {
    pub total: Duration,
    pub count: usize,
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::{BTreeMap, HashMap},
        sync::Once,
        time::Instant,
    };

    use tracing_subscriber::{
        EnvFilter, Layer, Registry, fmt, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    use super::{LOG_ENV, SpanTiming, TimingScope};

    thread_local! {
        static TIMING_SCOPES: RefCell<HashMap<TimingScope, BTreeMap<&'static str, SpanTiming>>> =
            RefCell::new(HashMap::new());
        static TIMING_SCOPE: RefCell<TimingScope> = const { RefCell::new(TimingScope::Search) };
    }

    pub struct TimingScopeGuard {
        previous: TimingScope,
    }

    impl Drop for TimingScopeGuard {
        fn drop(&mut self) {
            TIMING_SCOPE.with(|scope| {
                *scope.borrow_mut() = self.previous;
            });
        }
    }

    /// Attributes spans closed on this thread to `scope` until the returned
    /// guard is dropped.
    pub fn set_timing_scope(scope: TimingScope) -> TimingScopeGuard {
        let previous = TIMING_SCOPE.with(|current| current.replace(scope));
        TimingScopeGuard { previous }
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
            let name = span.metadata().name();
            if let Some(start) = span.extensions().get::<Instant>() {
                let elapsed = start.elapsed();
                let scope = TIMING_SCOPE.with(|scope| *scope.borrow());
                TIMING_SCOPES.with(|totals| {
                    let mut totals = totals.borrow_mut();
                    let entry = totals.entry(scope).or_default().entry(name).or_default();
                    entry.total += elapsed;
                    entry.count += 1;
                });
            }
        }
    }

    /// Installs the global subscriber once per process.  Later calls, or
    /// calls after another subscriber was installed, do nothing.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let fmt_layer = EnvFilter::try_from_env(LOG_ENV).ok().map(|filter| {
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(filter)
            });
            let _ = Registry::default()
                .with(TimingLayer)
                .with(fmt_layer)
                .try_init();
        });
    }

    pub fn reset_span_timings() {
        init_tracing();
        TIMING_SCOPES.with(|totals| totals.borrow_mut().clear());
    }

    /// Timings recorded on this thread for `scope`, keyed by span name.
    pub fn span_timings(scope: TimingScope) -> BTreeMap<&'static str, SpanTiming> {
        TIMING_SCOPES.with(|totals| totals.borrow().get(&scope).cloned().unwrap_or_default())
    }

    pub use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::collections::BTreeMap;

    use super::{SpanTiming, TimingScope};

    pub struct TimingScopeGuard;

    pub fn set_timing_scope(_scope: TimingScope) -> TimingScopeGuard {
        TimingScopeGuard
    }

    pub fn init_tracing() {}

    pub fn reset_span_timings() {}

    pub fn span_timings(_scope: TimingScope) -> BTreeMap<&'static str, SpanTiming> {
        BTreeMap::new()
    }

    #[macro_export]
    macro_rules! info_span {
        ($($arg:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    pub use crate::{debug, info_span, trace};

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

/// Prints the timings of both scopes to stderr, slowest span first.
pub fn dump_span_timings() {
    for scope in [TimingScope::Search, TimingScope::Setup] {
        eprintln!("{scope:?} timings (desc):");
        let mut entries: Vec<(&'static str, SpanTiming)> = span_timings(scope).into_iter().collect();
        entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        for (name, timing) in entries {
            eprintln!("  {name}: {:?} ({}x)", timing.total, timing.count);
        }
    }
}

/// Total time spent in spans named `name` within `scope`.
pub fn total_time(scope: TimingScope, name: &str) -> Duration {
    span_timings(scope)
        .get(name)
        .map(|timing| timing.total)
        .unwrap_or_default()
}
