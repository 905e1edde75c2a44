//! Tracing support for ctmap
//!
//! Structured tracing for the runtime construction paths. Const lookups
//! never log. It wraps the `tracing` crate and works in both std and no_std
//! environments.

#![cfg(feature = "tracing")]

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, trace_span, Level, Span};

/// Trace spans for map construction
#[derive(Debug, Clone)]
pub struct MapTrace;

impl MapTrace {
    /// Create a span for building a map from runtime data
    #[inline]
    #[must_use]
    pub fn constructing(len: usize, supplied: usize) -> Span {
        debug_span!("const_map_construct", len = %len, supplied = %supplied)
    }

    /// Create a span for checking key uniqueness
    #[inline]
    #[must_use]
    pub fn validating(len: usize) -> Span {
        trace_span!("const_map_validate", len = %len)
    }
}
