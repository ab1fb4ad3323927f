//! Runtime configuration.
//!
//! Everything has a sensible default; only two environment variables are
//! read:
//!
//! - `CONTENTHUB_LOG` - tracing filter directive (default `info`)
//! - `CONTENTHUB_NO_MOUSE` - when set, mouse capture stays off

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "CONTENTHUB_LOG";

/// Environment variable that disables mouse capture.
pub const NO_MOUSE_ENV_VAR: &str = "CONTENTHUB_NO_MOUSE";

/// How long the "Copied to Clipboard!" indicator stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Application configuration.
///
/// Use the builder methods to customize.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use contenthub::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_copy_feedback(Duration::from_millis(500))
///     .with_mouse_capture(false);
/// assert!(!config.mouse_capture);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Delay before the copied indicator clears itself
    pub copy_feedback: Duration,
    /// Idle wake-up interval of the event loop
    pub tick_rate: Duration,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Override for the log directory (defaults to the user data dir)
    pub log_dir: Option<PathBuf>,
    /// Capture mouse events for click and wheel support
    pub mouse_capture: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            copy_feedback: COPY_FEEDBACK,
            tick_rate: Duration::from_millis(250),
            log_filter: "info".to_string(),
            log_dir: None,
            mouse_capture: true,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copy_feedback(mut self, delay: Duration) -> Self {
        self.copy_feedback = delay;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    /// Defaults overlaid with `CONTENTHUB_LOG` and `CONTENTHUB_NO_MOUSE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_ENV_VAR).filter(|f| !f.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }
        if lookup(NO_MOUSE_ENV_VAR).is_some() {
            config = config.with_mouse_capture(false);
        }
        config
    }
}
