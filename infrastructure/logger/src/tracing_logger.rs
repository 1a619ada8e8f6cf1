use business::domain::cart::events::{CartEvent, CartListener};
use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "Cart -- ";

pub struct TracingLogger;

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

/// Emits each cart event as a structured trace record.
impl CartListener for TracingLogger {
    fn on_event(&self, event: &CartEvent) {
        let product_id = event.product_id().map(|id| id.as_str()).unwrap_or("-");
        debug!(
            target: TARGET,
            kind = %event,
            product_id,
            occurred_at = %event.occurred_at(),
            "cart event"
        );
    }
}
