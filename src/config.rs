use std::path::Path;

use error_stack::{Report, ResultExt};
use serde::Deserialize;

use crate::error::ConfigError;

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "text".into()
}

fn default_header_title() -> String {
    "Market Signal Alert".into()
}

fn default_product_name() -> String {
    "Market Signal System".into()
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Accepted values: `"text"` | `"json"`
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

/// Branding applied to the rendered email.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Heading shown in the header bar and the document `<title>`.
    #[serde(default = "default_header_title")]
    pub header_title: String,
    /// Name used in the copyright footer.
    #[serde(default = "default_product_name")]
    pub product_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            header_title: default_header_title(),
            product_name: default_product_name(),
        }
    }
}

/// Load and validate an `AppConfig` from a TOML file at `path`.
pub fn load(path: &Path) -> Result<AppConfig, Report<ConfigError>> {
    let content = std::fs::read_to_string(path)
        .change_context(ConfigError::ReadFile)
        .attach_with(|| format!("path: {}", path.display()))?;

    let config: AppConfig = toml::from_str(&content).change_context(ConfigError::Parse {
        reason: "invalid TOML syntax or schema mismatch".into(),
    })?;

    validate(&config)?;

    Ok(config)
}

const VALID_LOG_FORMATS: &[&str] = &["text", "json"];

fn validate(config: &AppConfig) -> Result<(), Report<ConfigError>> {
    validate_log_format(config)?;
    validate_email(config)?;
    Ok(())
}

fn validate_log_format(config: &AppConfig) -> Result<(), Report<ConfigError>> {
    if !VALID_LOG_FORMATS.contains(&config.general.log_format.as_str()) {
        return Err(Report::new(ConfigError::Validation {
            field: format!(
                "general.log_format \"{}\" is not valid",
                config.general.log_format
            ),
        }));
    }
    Ok(())
}

fn validate_email(config: &AppConfig) -> Result<(), Report<ConfigError>> {
    if config.email.header_title.trim().is_empty() {
        return Err(Report::new(ConfigError::Validation {
            field: "email.header_title must not be empty".into(),
        }));
    }
    if config.email.product_name.trim().is_empty() {
        return Err(Report::new(ConfigError::Validation {
            field: "email.product_name must not be empty".into(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        toml::from_str(toml).expect("parse failed")
    }

    #[test]
    fn valid_full_config_parses() {
        let toml = r#"
[general]
log_level = "debug"
log_format = "json"

[email]
header_title = "Desk Alerts"
product_name = "Acme Trading"
"#;
        let config = parse(toml);
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.log_format, "json");
        assert_eq!(config.email.header_title, "Desk Alerts");
        assert_eq!(config.email.product_name, "Acme Trading");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn defaults_applied_when_fields_omitted() {
        let toml = r#"
[general]
"#;
        let config = parse(toml);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.log_format, "text");
        assert_eq!(config.email.header_title, "Market Signal Alert");
        assert_eq!(config.email.product_name, "Market Signal System");
    }

    #[test]
    fn invalid_log_format_rejected() {
        let toml = r#"
[general]
log_format = "yaml"
"#;
        let config = parse(toml);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn blank_header_title_rejected() {
        let toml = r#"
[general]

[email]
header_title = "   "
"#;
        let config = parse(toml);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn blank_product_name_rejected() {
        let toml = r#"
[general]

[email]
product_name = ""
"#;
        let config = parse(toml);
        assert!(validate(&config).is_err());
    }
}
