use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetUtilConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub interfaces: InterfaceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for file-based logging; console output when unset
    #[serde(default)]
    pub dir: Option<String>,

    #[serde(default = "default_log_file")]
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceConfig {
    #[serde(default = "default_include_loopback")]
    pub include_loopback: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "netutil.log".to_string()
}

fn default_include_loopback() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
            file: default_log_file(),
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            include_loopback: default_include_loopback(),
        }
    }
}

impl NetUtilConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NetUtilConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`NetUtilConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommonError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_full_config() {
        let content = r#"
[logging]
level = "debug"
dir = "logs"
file = "rudp.log"

[interfaces]
include_loopback = false
"#;
        let file = create_temp_file(content);
        let config = NetUtilConfig::load(file.path()).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.dir.as_deref(), Some("logs"));
        assert_eq!(config.logging.file, "rudp.log");
        assert!(!config.interfaces.include_loopback);
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let file = create_temp_file("");
        let config = NetUtilConfig::load(file.path()).unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.dir, None);
        assert_eq!(config.logging.file, "netutil.log");
        assert!(config.interfaces.include_loopback);
    }

    #[test]
    fn parse_partial_section_fills_defaults() {
        let file = create_temp_file("[logging]\nlevel = \"warn\"\n");
        let config = NetUtilConfig::load(file.path()).unwrap();

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.file, "netutil.log");
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let result = NetUtilConfig::load("/nonexistent/path/netutil.toml");
        assert!(matches!(result, Err(CommonError::Io(_))));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let config = NetUtilConfig::load_or_default("/nonexistent/path/netutil.toml").unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let file = create_temp_file("this is not valid toml {{{");
        let result = NetUtilConfig::load(file.path());
        assert!(matches!(result, Err(CommonError::Config(_))));
    }

    #[test]
    fn parse_wrong_field_type_returns_error() {
        let file = create_temp_file("[interfaces]\ninclude_loopback = \"yes\"\n");
        assert!(NetUtilConfig::load(file.path()).is_err());
    }
}
