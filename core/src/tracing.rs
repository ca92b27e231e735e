//! Tracing utilities for type resolution observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event for a load lifecycle step.
///
/// ```ignore
/// typeres_trace_load!("start", dialect, base = 12);
/// ```
macro_rules! typeres_trace_load {
    ($stage:literal, $dialect:expr $(, $key:ident = $value:expr)* $(,)?) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(stage = $stage, dialect = %$dialect $(, $key = $value)*, "typeres.load");
    };
}

/// Emit a debug-level event with the discovery SQL text and parameter count.
macro_rules! typeres_trace_query {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(sql = %$sql, params = $param_count, "typeres.discovery.query");
    };
}

/// Emit an event when discovery is skipped or fails.
///
/// Skips are debug-level; recovered failures are warnings.
macro_rules! typeres_trace_discovery {
    (skip, $dialect:expr, $reason:literal) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(dialect = %$dialect, reason = $reason, "typeres.discovery.skipped");
    };
    (failed, $dialect:expr, $error:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(dialect = %$dialect, error = %&$error, "typeres.discovery.failed");
    };
}

/// Emit a warning for a configuration value that was replaced by its default.
macro_rules! typeres_trace_config {
    ($error:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(error = %&$error, "typeres.config.fallback");
    };
}

pub(crate) use typeres_trace_config;
pub(crate) use typeres_trace_discovery;
pub(crate) use typeres_trace_load;
pub(crate) use typeres_trace_query;
