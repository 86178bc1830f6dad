#![forbid(unsafe_code)]

//! Logging support.
//!
//! With the `tracing` feature the macros below are re-exports of the
//! `tracing` macros. Without it they expand to nothing, so call sites in the
//! engine and renderer never need their own `cfg` guards.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}

/// Span stand-in returned by `debug_span!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the span by value (does nothing).
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan`].
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn noop_macros_accept_arguments() {
        let rows = 3usize;
        crate::trace!(rows, "moved");
        crate::debug!("normalized {} rows", rows);
        let _guard = crate::debug_span!("widget_render", widget = "Table").entered();
    }
}
