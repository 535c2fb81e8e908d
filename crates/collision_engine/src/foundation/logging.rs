//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Library code never calls this; applications and test harnesses do.
pub fn init() {
    env_logger::init();
}

/// Initialize logging for tests, ignoring repeated initialization
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
