//! Tracing utilities for the case scanner.
//!
//! Enable with `--features scan-trace` to see boundary and token decisions.

/// Trace scanner decisions to stderr.
///
/// Only active when `scan-trace` feature is enabled.
/// Usage: `cargo test --features scan-trace 2>&1 | grep SNAKER`
#[cfg(feature = "scan-trace")]
macro_rules! trace {
    ($phase:expr, $msg:expr) => {
        eprintln!("[SNAKER:{}] {}", $phase, $msg);
    };
    ($phase:expr, $msg:expr, $val:expr) => {
        eprintln!("[SNAKER:{}] {}: {:?}", $phase, $msg, $val);
    };
}

/// No-op when scan-trace feature is disabled.
#[cfg(not(feature = "scan-trace"))]
macro_rules! trace {
    ($phase:expr, $msg:expr) => {};
    ($phase:expr, $msg:expr, $val:expr) => {};
}

pub(crate) use trace;
