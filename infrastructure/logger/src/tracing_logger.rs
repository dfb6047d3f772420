use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "SecondShelf -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "SecondShelf -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "SecondShelf -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "SecondShelf -- ", "{}", message);
    }
}
