//! Debug-only diagnostics
//!
//! [`warning!`](crate::warning) emits a `tracing` warning event under the
//! [`TARGET`] target when the calling crate is built with debug assertions.
//! In release builds the call sits behind a constant-false `cfg!` branch: the
//! arguments are still type-checked but never evaluated or formatted, and the
//! optimizer drops the branch. Nothing routed through this module may
//! influence a return value.

/// Target used for every diagnostic event
pub const TARGET: &str = "untabify::diagnostics";

/// Emit a formatted warning in debug builds only.
///
/// Accepts the same arguments as [`format!`].
///
/// ```rust
/// untabify_core::warning!("tab size {} rejected", 12);
/// ```
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::__private::tracing::warn!(
                target: "untabify::diagnostics",
                $($arg)+
            );
        }
    };
}

/// Whether [`warning!`](crate::warning) is active in this build
pub const fn enabled() -> bool {
    cfg!(debug_assertions)
}
