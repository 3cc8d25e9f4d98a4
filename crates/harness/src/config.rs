//! Run configuration.
//!
//! Precedence, lowest to highest: built-in defaults, the `e2e.toml` config
//! file, `ARGUS_*` environment variables, CLI flags (applied by the entry
//! binaries after loading).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::check::ValidationMode;
use crate::error::{Error, Result};
use crate::wait::WaitPolicy;

pub const DEFAULT_CONFIG_FILE: &str = "e2e.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Base URL of the dashboard under test.
    pub base_url: String,

    /// Browser window dimensions.
    pub viewport: Viewport,

    /// Run the browser headless.
    pub headless: bool,

    /// Default polling policy for DOM expectations.
    pub timeouts: Timeouts,

    /// Allow-list validation policy for the whole run.
    pub validation: ValidationMode,

    /// Credential fixture location (overridable via `ARGUS_CREDENTIALS`).
    pub credentials: PathBuf,

    /// Where run summaries are written.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Timeouts {
    pub default_ms: u64,
    pub poll_ms: u64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 900,
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            default_ms: 4000,
            poll_ms: 100,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:4200".to_string(),
            viewport: Viewport::default(),
            headless: true,
            timeouts: Timeouts::default(),
            validation: ValidationMode::default(),
            credentials: PathBuf::from("crates/e2e/fixtures/credentials.json"),
            output_dir: PathBuf::from("test-results"),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from a TOML file, then apply `ARGUS_*` overrides.
    ///
    /// With `path = None` the default `e2e.toml` is used when present and
    /// silently skipped when absent; an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                Self::parse(&std::fs::read_to_string(p)?)?
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::parse(&std::fs::read_to_string(default)?)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply environment overrides through a lookup function (injectable for
    /// tests; process env in production).
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ARGUS_BASE_URL") {
            self.base_url = url;
        }
        if let Some(raw) = lookup("ARGUS_HEADLESS") {
            self.headless = parse_bool("ARGUS_HEADLESS", &raw)?;
        }
        if let Some(raw) = lookup("ARGUS_VALIDATION") {
            self.validation = raw
                .parse()
                .map_err(|e: String| Error::Config(format!("ARGUS_VALIDATION: {e}")))?;
        }
        if let Some(raw) = lookup("ARGUS_TIMEOUT_MS") {
            self.timeouts.default_ms = parse_u64("ARGUS_TIMEOUT_MS", &raw)?;
        }
        if let Some(raw) = lookup("ARGUS_POLL_MS") {
            self.timeouts.poll_ms = parse_u64("ARGUS_POLL_MS", &raw)?;
        }
        if let Some(dir) = lookup("ARGUS_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy::from_millis(self.timeouts.default_ms, self.timeouts.poll_ms)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(Error::Config(format!(
            "{key}: expected a boolean, got {other:?}"
        ))),
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| Error::Config(format!("{key}: expected an integer, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_viewport() {
        let config = HarnessConfig::default();
        assert_eq!(config.viewport, Viewport { width: 1440, height: 900 });
        assert!(config.headless);
        assert_eq!(config.validation, ValidationMode::Lenient);
    }

    #[test]
    fn file_values_override_defaults() {
        let config = HarnessConfig::parse(
            r#"
            base_url = "https://dash.example.com"
            headless = false
            validation = "strict"

            [viewport]
            width = 1920
            height = 1080

            [timeouts]
            default_ms = 8000
            poll_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://dash.example.com");
        assert!(!config.headless);
        assert_eq!(config.validation, ValidationMode::Strict);
        assert_eq!(config.viewport.width, 1920);
        assert_eq!(config.wait_policy(), WaitPolicy::from_millis(8000, 250));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(HarnessConfig::parse("base_url = \"x\"\nviewporty = 3\n").is_err());
    }

    #[test]
    fn env_overrides_beat_file_values() {
        let mut config = HarnessConfig::parse("base_url = \"https://file.example.com\"").unwrap();
        config
            .apply_env_with(|key| match key {
                "ARGUS_BASE_URL" => Some("https://env.example.com".to_string()),
                "ARGUS_HEADLESS" => Some("0".to_string()),
                "ARGUS_VALIDATION" => Some("strict".to_string()),
                "ARGUS_TIMEOUT_MS" => Some("9000".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.base_url, "https://env.example.com");
        assert!(!config.headless);
        assert_eq!(config.validation, ValidationMode::Strict);
        assert_eq!(config.timeouts.default_ms, 9000);
    }

    #[test]
    fn malformed_env_values_are_config_errors() {
        let mut config = HarnessConfig::default();
        let err = config
            .apply_env_with(|key| {
                (key == "ARGUS_HEADLESS").then(|| "maybe".to_string())
            })
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
