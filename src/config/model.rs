//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::component::form::FormOptions;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Content of the registration form and its simulated round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    /// Delay before the simulated server answers, in milliseconds.
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            submit_label: default_submit_label(),
            submit_delay_ms: default_submit_delay(),
        }
    }
}

impl FormConfig {
    pub fn options(&self) -> FormOptions {
        FormOptions {
            title: self.title.clone(),
            submit_label: self.submit_label.clone(),
            submit_delay: Duration::from_millis(self.submit_delay_ms),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            mask_char: default_mask_char(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "Sign Up".to_string()
}
fn default_submit_label() -> String {
    "Register".to_string()
}
fn default_submit_delay() -> u64 {
    2000
}
fn default_tick_rate() -> u64 {
    50
}
fn default_mask_char() -> char {
    '•'
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/regform/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.form.title, "Sign Up");
        assert_eq!(config.form.submit_label, "Register");
        assert_eq!(config.form.submit_delay_ms, 2000);
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.mask_char, '•');
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [form]
            submit_label = "登録"

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.form.submit_label, "登録");
        assert_eq!(config.form.title, "Sign Up");
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.log_dir, "~/.local/share/regform/logs");
    }

    #[test]
    fn test_form_options_carry_delay() {
        let form = FormConfig {
            submit_delay_ms: 250,
            ..FormConfig::default()
        };
        let options = form.options();
        assert_eq!(options.submit_delay, Duration::from_millis(250));
        assert_eq!(options.title, "Sign Up");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.form.submit_delay_ms, config.form.submit_delay_ms);
        assert_eq!(back.ui.timestamp_format, config.ui.timestamp_format);
    }
}
