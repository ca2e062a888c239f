//! Tracing and logging setup shared by hosts embedding the rules.

/// Tracing subscriber configuration.
pub mod tracing;

/// Initialize process-wide logging with the `info` default.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize logging with a host-chosen default directive (used when `RUST_LOG` is unset).
pub fn init_with_default(default_directive: &str) {
    tracing::init(default_directive);
}
