use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under the storefront target.
pub struct TracingLogger;

const TARGET: &str = "storefront";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
