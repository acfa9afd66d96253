// simple-adb - configurable handle for the Android Debug Bridge executable.
// Construction resolves an optional set of options into a complete
// configuration and attaches a diagnostics logger; both live for the
// lifetime of the handle.

pub mod config;
pub mod logger;

pub use config::{AdbConfig, AdbOptions, DEFAULT_ADB_PATH};
pub use logger::Logger;

/// Handle for an external `adb` executable.
///
/// Construction always succeeds: omitted options fall back to defaults
/// and a logger is attached whether or not one was supplied.
#[derive(Debug, Clone)]
pub struct SimpleAdb {
    pub config: AdbConfig,
    pub logger: Logger,
}

impl SimpleAdb {
    /// Construct with default configuration and a default logger.
    pub fn new() -> Self {
        Self::with_options(AdbOptions::default())
    }

    /// Construct with caller-supplied options; unset fields are defaulted.
    pub fn with_options(options: AdbOptions) -> Self {
        Self::with_logger(options, Logger::default())
    }

    /// Construct with caller-supplied options and an injected logger.
    /// The handle owns the logger from here on.
    pub fn with_logger(options: AdbOptions, logger: Logger) -> Self {
        let config = AdbConfig::resolve(options);
        logger.debug(&format!(
            "using adb executable at {}",
            config.path.display()
        ));
        Self { config, logger }
    }
}

impl Default for SimpleAdb {
    fn default() -> Self {
        Self::new()
    }
}
