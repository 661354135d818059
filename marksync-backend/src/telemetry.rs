//! Logger bootstrap for the orchestrator binary and tests.

use env_logger::Env;

/// Initialize env_logger from `RUST_LOG` (default "info").
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
