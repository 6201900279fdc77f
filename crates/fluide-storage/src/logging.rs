//! Injectable logging capability.
//!
//! The gateway and dispatcher receive a [`Log`] at construction instead of
//! reaching for a global logger, so tests can observe what was logged.

use tracing::{debug, error, info, warn};

/// Leveled logging methods.
pub trait Log: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Logger that emits `tracing` events tagged with a component name.
#[derive(Debug, Clone)]
pub struct TracingLog {
    component: String,
}

impl TracingLog {
    /// Create a logger for a component (e.g. "album_store", "dispatcher").
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
        }
    }
}

impl Log for TracingLog {
    fn debug(&self, message: &str) {
        debug!(component = %self.component, "{}", message);
    }

    fn info(&self, message: &str) {
        info!(component = %self.component, "{}", message);
    }

    fn warn(&self, message: &str) {
        warn!(component = %self.component, "{}", message);
    }

    fn error(&self, message: &str) {
        error!(component = %self.component, "{}", message);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::Log;

    /// Logger that keeps every line in memory.
    #[derive(Default)]
    pub struct RecordingLog {
        lines: Mutex<Vec<(&'static str, String)>>,
    }

    impl RecordingLog {
        pub fn lines(&self, level: &str) -> Vec<String> {
            self.lines
                .lock()
                .unwrap()
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, m)| m.clone())
                .collect()
        }

        fn push(&self, level: &'static str, message: &str) {
            self.lines.lock().unwrap().push((level, message.to_string()));
        }
    }

    impl Log for RecordingLog {
        fn debug(&self, message: &str) {
            self.push("debug", message);
        }

        fn info(&self, message: &str) {
            self.push("info", message);
        }

        fn warn(&self, message: &str) {
            self.push("warn", message);
        }

        fn error(&self, message: &str) {
            self.push("error", message);
        }
    }
}
