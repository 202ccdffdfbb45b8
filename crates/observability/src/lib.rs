//! Tracing and logging (shared setup).

/// Initialize process-wide observability.
///
/// The output format comes from `LIBRIS_LOG_FORMAT` (JSON unless set to
/// `pretty`). This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

/// Initialize logging for test binaries (output captured by libtest).
pub fn init_for_tests() {
    tracing::init_test();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::LogFormat;
