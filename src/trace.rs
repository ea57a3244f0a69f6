//! Logging hooks for the sampling and ascent stages.
//!
//! Three levels are used: a span per stage, one summary event when a stage
//! finishes, and a debug event per climbed candidate. The `tracing` feature
//! turns them on; builds without it log nothing.

/// Opens an `info` span named after the stage, e.g. `"ascend_candidates"`.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Logs a stage summary such as the candidate count.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

/// Logs the winner of one ascent step at `debug`.
#[cfg(feature = "tracing")]
macro_rules! trace_candidate {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_candidate {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_candidate;
pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span returned by `trace_span!` in builds without `tracing`.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Same shape as `tracing::Span::entered`; does nothing.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
