// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

/// Runtime log level, user selectable via STYLEJS_LOG_LEVEL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warning),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Minimum level emitted to the console sink
    pub min_log_level: LogLevel,

    /// Whether to emit events as JSON instead of plain text
    pub use_structured_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            // Warning keeps plain runs silent apart from the CSS output itself
            min_log_level: env::var("STYLEJS_LOG_LEVEL")
                .ok()
                .and_then(|v| LogLevel::from_str(&v))
                .unwrap_or(LogLevel::Warning),
            use_structured_logging: env::var("STYLEJS_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePreferences {
    /// Whether explicitly listed inputs must carry the dialect suffix
    pub require_dialect_suffix: bool,

    /// Whether to log debug information for inputs without the dialect suffix
    pub log_foreign_sources: bool,
}

impl Default for SourcePreferences {
    fn default() -> Self {
        Self {
            require_dialect_suffix: env::var("STYLEJS_REQUIRE_SUFFIX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_foreign_sources: env::var("STYLEJS_LOG_FOREIGN_SOURCES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("WARN"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_str("warning"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_str("nope"), None);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Debug.to_events_log_level(),
            crate::logging::LogLevel::Debug
        );
        assert_eq!(
            LogLevel::Error.to_events_log_level(),
            crate::logging::LogLevel::Error
        );
    }
}
