//! Configuration management for simplemark.
//!
//! Parses `simplemark.toml` files with serde and provides auto-discovery
//! of config files in parent directories. CLI settings can be applied
//! during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `output.dir` supports `${VAR}` references and a leading `~`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "simplemark.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the rendered page title.
    pub title: Option<String>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
    /// Disable all inline substitutions when `Some(false)`.
    pub substitutions_enabled: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Inline substitution toggles.
    pub substitutions: SubstitutionsConfig,
    /// Output configuration as parsed from TOML (path as string).
    output: Option<OutputConfigRaw>,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            substitutions: SubstitutionsConfig::default(),
            output: None,
            output_resolved: OutputConfig::default(),
            config_path: None,
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Page title for the rendered document head.
    pub title: Option<String>,
    /// Output format name. Only `html` is currently supported.
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: None,
            format: "html".to_owned(),
        }
    }
}

/// Inline substitution toggles; all enabled by default.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SubstitutionsConfig {
    /// Rewrite `http(s)://` addresses as links.
    pub url: bool,
    /// Rewrite bare mail addresses as mailto links.
    pub mail: bool,
    /// Rewrite `*text*` as emphasis.
    pub emphasis: bool,
}

impl Default for SubstitutionsConfig {
    fn default() -> Self {
        Self {
            url: true,
            mail: true,
            emphasis: true,
        }
    }
}

impl SubstitutionsConfig {
    /// Whether any substitution is enabled.
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.url || self.mail || self.emphasis
    }

    /// Disable every substitution.
    pub fn disable_all(&mut self) {
        self.url = false;
        self.mail = false;
        self.emphasis = false;
    }
}

/// Raw output configuration as parsed from TOML (path as string).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Resolved output configuration with an absolute-or-cwd-relative path.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory rendered files are written into; `None` means the
    /// current directory (or stdout, for CLI use without `-o`).
    pub dir: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `output.dir`).
        field: String,
        /// Error message.
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `simplemark.toml` in the current directory and its
    /// parents, falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing, expansion, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.resolve_output()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Search for a config file in the current directory and its parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Expand and resolve the output directory.
    fn resolve_output(&mut self) -> Result<(), ConfigError> {
        self.output_resolved = match &self.output {
            Some(raw) => match raw.dir.as_deref() {
                Some(dir) => OutputConfig {
                    dir: Some(PathBuf::from(expand::expand_str(dir, "output.dir")?)),
                },
                None => OutputConfig::default(),
            },
            None => OutputConfig::default(),
        };
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.render.title = Some(title.clone());
        }
        if let Some(dir) = &settings.output_dir {
            self.output_resolved.dir = Some(dir.clone());
        }
        if settings.substitutions_enabled == Some(false) {
            self.substitutions.disable_all();
        }
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.format != "html" {
            return Err(ConfigError::Validation(format!(
                "render.format must be \"html\", got \"{}\"",
                self.render.format
            )));
        }
        if let Some(title) = &self.render.title
            && title.is_empty()
        {
            return Err(ConfigError::Validation(
                "render.title cannot be empty".to_owned(),
            ));
        }
        if let Some(dir) = &self.output_resolved.dir
            && dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "output.dir cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.format, "html");
        assert_eq!(config.render.title, None);
        assert!(config.substitutions.url);
        assert!(config.substitutions.mail);
        assert!(config.substitutions.emphasis);
        assert!(config.output_resolved.dir.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.format, "html");
        assert!(config.substitutions.any_enabled());
    }

    #[test]
    fn test_parse_render_section() {
        let toml = r#"
[render]
title = "Field Notes"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.title, Some("Field Notes".to_owned()));
        assert_eq!(config.render.format, "html");
    }

    #[test]
    fn test_parse_substitutions_section() {
        let toml = r"
[substitutions]
emphasis = false
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.substitutions.url);
        assert!(!config.substitutions.emphasis);
    }

    #[test]
    fn test_resolve_output_dir() {
        let toml = r#"
[output]
dir = "rendered"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_output().unwrap();
        assert_eq!(config.output_resolved.dir, Some(PathBuf::from("rendered")));
    }

    #[test]
    fn test_resolve_output_dir_expands_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SM_TEST_RENDER_DIR", "/srv/www");
        }
        let toml = r#"
[output]
dir = "${SM_TEST_RENDER_DIR}/pages"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_output().unwrap();
        assert_eq!(
            config.output_resolved.dir,
            Some(PathBuf::from("/srv/www/pages"))
        );
        unsafe {
            std::env::remove_var("SM_TEST_RENDER_DIR");
        }
    }

    #[test]
    fn test_apply_cli_settings_title() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            title: Some("Override".to_owned()),
            ..Default::default()
        });
        assert_eq!(config.render.title, Some("Override".to_owned()));
    }

    #[test]
    fn test_apply_cli_settings_disable_substitutions() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            substitutions_enabled: Some(false),
            ..Default::default()
        });
        assert!(!config.substitutions.any_enabled());
    }

    #[test]
    fn test_apply_cli_settings_empty_is_noop() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.render.title, None);
        assert!(config.substitutions.any_enabled());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let mut config = Config::default();
        config.render.format = "latex".to_owned();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("render.format"));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut config = Config::default();
        config.render.title = Some(String::new());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("render.title"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/simplemark.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simplemark.toml");
        std::fs::write(&path, "[render]\ntitle = \"From Disk\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.render.title, Some("From Disk".to_owned()));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_applies_cli_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simplemark.toml");
        std::fs::write(&path, "[render]\ntitle = \"From Disk\"\n").unwrap();

        let settings = CliSettings {
            title: Some("From CLI".to_owned()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.render.title, Some("From CLI".to_owned()));
    }

    #[test]
    fn test_load_invalid_format_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simplemark.toml");
        std::fs::write(&path, "[render]\nformat = \"pdf\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
