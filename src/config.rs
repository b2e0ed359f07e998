use crate::logging::{LogLevel, Logger};

pub const MOUNT_POINT_ID: &str = "app";
pub const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_level: LogLevel,
    pub scroll_motion: ScrollMotion,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            scroll_motion: ScrollMotion::Smooth,
        }
    }
}

impl RuntimeConfig {
    /// `log_level_attr` is the raw mount-point attribute, if present.
    pub fn from_sources(log_level_attr: Option<&str>, prefers_reduced_motion: bool) -> Self {
        Self {
            log_level: parse_log_level(log_level_attr, DEFAULT_LOG_LEVEL),
            scroll_motion: if prefers_reduced_motion {
                ScrollMotion::Instant
            } else {
                ScrollMotion::Smooth
            },
        }
    }

    pub fn logger(self) -> Logger {
        Logger::new(self.log_level)
    }
}

pub fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    value.and_then(LogLevel::parse).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_uses_default_level() {
        assert_eq!(parse_log_level(None, DEFAULT_LOG_LEVEL), LogLevel::Info);
    }

    #[test]
    fn unknown_attribute_uses_default_level() {
        assert_eq!(parse_log_level(Some("verbose"), LogLevel::Warn), LogLevel::Warn);
        assert_eq!(parse_log_level(Some("   "), LogLevel::Info), LogLevel::Info);
    }

    #[test]
    fn attribute_is_trimmed_and_case_insensitive() {
        let config = RuntimeConfig::from_sources(Some(" Debug "), false);

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.logger().enabled(LogLevel::Debug));
    }

    #[test]
    fn reduced_motion_switches_to_instant_scroll() {
        assert_eq!(
            RuntimeConfig::from_sources(None, true).scroll_motion,
            ScrollMotion::Instant
        );
        assert_eq!(
            RuntimeConfig::from_sources(None, false),
            RuntimeConfig::default()
        );
    }
}
