/// Config file loading and creation for the testlet CLI.
///
/// Config lives at ~/.config/testlet/config.toml.
/// All fields are optional. CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TestletConfig {
    pub seed: Option<u64>,
    pub json: Option<bool>,
    pub log_level: Option<String>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# testlet configuration
# All values here can be overridden by CLI flags.

# Fixed seed for reproducible orderings. Leave unset to draw a fresh seed per run.
# seed = 42

# Print JSON instead of a table by default
# json = false

# Log filter used when RUST_LOG is not set (e.g. \"warn\", \"debug\", \"testlet_core=trace\")
# log_level = \"warn\"
";

/// Returns the default config path: ~/.config/testlet/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("testlet").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> TestletConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => TestletConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

fn parse_config(content: &str) -> Result<TestletConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_empty_config() {
        let cfg = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(cfg, TestletConfig::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let cfg = parse_config("seed = 7\njson = true\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.json, Some(true));
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_config("rounds = 10\n").is_err());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = std::env::temp_dir().join("testlet-config-does-not-exist.toml");
        assert_eq!(load_config(&path), TestletConfig::default());
    }
}
