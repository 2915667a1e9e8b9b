use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// Only debug logging is configurable; the report location is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging to a file
    #[serde(default)]
    pub debug: bool,

    /// Log file or directory (defaults next to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_path: Option<String>,

    /// How debug log files are rotated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_rotation: Option<DebugLogRotation>,

    /// Number of rotated log files to keep (0 keeps everything)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_keep: Option<usize>,
}

/// Debug log rotation strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DebugLogRotation {
    /// Append to a single file forever
    None,
    /// One file per calendar day
    Daily,
    /// One file per program run
    Session,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.debug);
        assert_eq!(config.debug_log_rotation, None);
    }

    #[test]
    fn test_rotation_parsing() {
        let config: Config = toml::from_str(
            r#"
            debug = true
            debug_log_rotation = "daily"
            debug_log_keep = 3
            "#,
        )
        .unwrap();
        assert!(config.debug);
        assert_eq!(config.debug_log_rotation, Some(DebugLogRotation::Daily));
        assert_eq!(config.debug_log_keep, Some(3));
    }

    #[test]
    fn test_report_path_is_not_a_setting() {
        let config: Config = toml::from_str(r#"report_path = "elsewhere.csv""#).unwrap();
        assert_eq!(config, Config::default());
        assert!(!toml::to_string(&config).unwrap().contains("report_path"));
    }

    #[test]
    fn test_unknown_rotation_rejected() {
        let result = toml::from_str::<Config>(r#"debug_log_rotation = "hourly""#);
        assert!(result.is_err());
    }
}
