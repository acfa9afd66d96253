// Diagnostics logging for adb handles.
// Each handle owns a Logger that routes leveled messages through the
// `log` facade under its own target; `env_logger` is the optional
// subscriber and is never required by the library itself.

use log::Level;
use std::sync::Once;

/// Target used by default-constructed loggers.
pub const DEFAULT_LOG_TARGET: &str = "simple_adb";

static INIT: Once = Once::new();

/// Install an `env_logger` subscriber once, defaulting the filter to
/// `info` when `RUST_LOG` is unset. Fail-soft: repeated calls and an
/// already-installed subscriber are both fine.
pub fn init() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    });
}

/// Leveled diagnostic sink owned by each adb handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Logger {
    target: String,
}

impl Logger {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn log(&self, level: Level, message: &str) {
        log::log!(target: &self.target, level, "{message}");
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_TARGET)
    }
}
