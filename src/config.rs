//! Dashboard configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The resolved record is immutable: it is read
//! once at process start and handed to the UI untouched.

use std::env;
use std::fmt;

use thiserror::Error;

/// Default client id for the storm report provider account.
const DEFAULT_CLIENT_ID: &str = "JWxIiaNWCkCjS3r6ODPD6";
/// Default client secret paired with the default client id.
const DEFAULT_CLIENT_SECRET: &str = "LDn8C2fr2175vxw1XLDp3Hr9jKSqAhhZuOCKJIVR";
/// Default place name the storm report widget opens on.
const DEFAULT_LOCATION: &str = "Detroit, MI";
/// Default lookback window token understood by the report provider.
const DEFAULT_TIME_FILTER: &str = "48H";
/// Default event categories shown by the report widget, in display order.
const DEFAULT_EVENT_TYPES: &[&str] = &["wind", "flood"];

/// Errors produced while resolving the dashboard configuration.
///
/// Unset variables are not errors (they fall back to defaults); a variable
/// that is set but unusable is, so a misconfigured environment fails at
/// startup instead of being silently ignored.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An override variable was set to a blank value.
    #[error("environment variable {0} is set but blank")]
    BlankVar(&'static str),

    /// An event type list contained no usable entries.
    #[error("environment variable {0} must list at least one event type")]
    NoEventTypes(&'static str),
}

/// Immutable configuration for the storm report widget.
///
/// Owned exclusively by the application shell, which forwards it to the
/// widget by reference on every render pass without reading or rewriting
/// any field.
#[derive(Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Client id for the storm report provider account.
    pub client_id: String,
    /// Client secret paired with `client_id`. Authenticates the widget's
    /// provider session; never logged and never rendered.
    pub client_secret: String,
    /// Human-readable place name the widget opens on.
    pub default_location: String,
    /// Lookback window token (e.g. `48H`).
    pub default_time_filter: String,
    /// Event categories to display, in order.
    pub default_event_types: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            client_secret: DEFAULT_CLIENT_SECRET.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            default_time_filter: DEFAULT_TIME_FILTER.to_string(),
            default_event_types: DEFAULT_EVENT_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Recognized variables: `STORM_CLIENT_ID`, `STORM_CLIENT_SECRET`,
    /// `STORM_DEFAULT_LOCATION`, `STORM_DEFAULT_TIME_FILTER`, and
    /// `STORM_DEFAULT_EVENT_TYPES` (comma-separated).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: string_var("STORM_CLIENT_ID", DEFAULT_CLIENT_ID)?,
            client_secret: string_var("STORM_CLIENT_SECRET", DEFAULT_CLIENT_SECRET)?,
            default_location: string_var("STORM_DEFAULT_LOCATION", DEFAULT_LOCATION)?,
            default_time_filter: string_var("STORM_DEFAULT_TIME_FILTER", DEFAULT_TIME_FILTER)?,
            default_event_types: match env::var("STORM_DEFAULT_EVENT_TYPES") {
                Ok(raw) => parse_event_types("STORM_DEFAULT_EVENT_TYPES", &raw)?,
                Err(_) => DEFAULT_EVENT_TYPES.iter().map(|t| t.to_string()).collect(),
            },
        })
    }
}

// The startup log prints this form; the secret must never appear in it.
impl fmt::Debug for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("default_location", &self.default_location)
            .field("default_time_filter", &self.default_time_filter)
            .field("default_event_types", &self.default_event_types)
            .finish()
    }
}

/// Read a single-valued variable, falling back to `default` when unset.
fn string_var(name: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) => {
            let value = value.trim();
            if value.is_empty() {
                Err(ConfigError::BlankVar(name))
            } else {
                Ok(value.to_string())
            }
        }
        Err(_) => Ok(default.to_string()),
    }
}

/// Split a comma-separated event type list, dropping surrounding whitespace.
fn parse_event_types(name: &'static str, raw: &str) -> Result<Vec<String>, ConfigError> {
    let types: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if types.is_empty() {
        return Err(ConfigError::NoEventTypes(name));
    }
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_storm_env() {
        for var in [
            "STORM_CLIENT_ID",
            "STORM_CLIENT_SECRET",
            "STORM_DEFAULT_LOCATION",
            "STORM_DEFAULT_TIME_FILTER",
            "STORM_DEFAULT_EVENT_TYPES",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_match_documented_values() {
        clear_storm_env();
        let config = DashboardConfig::from_env().unwrap();

        assert_eq!(config.client_id, "JWxIiaNWCkCjS3r6ODPD6");
        assert_eq!(
            config.client_secret,
            "LDn8C2fr2175vxw1XLDp3Hr9jKSqAhhZuOCKJIVR"
        );
        assert_eq!(config.default_location, "Detroit, MI");
        assert_eq!(config.default_time_filter, "48H");
        assert_eq!(config.default_event_types, ["wind", "flood"]);
    }

    #[test]
    #[serial]
    fn test_default_trait_matches_env_resolution_without_overrides() {
        clear_storm_env();
        assert_eq!(
            DashboardConfig::from_env().unwrap(),
            DashboardConfig::default()
        );
    }

    #[test]
    #[serial]
    fn test_env_override_replaces_only_the_set_field() {
        clear_storm_env();
        env::set_var("STORM_DEFAULT_LOCATION", "Duluth, MN");

        let config = DashboardConfig::from_env().unwrap();
        assert_eq!(config.default_location, "Duluth, MN");
        assert_eq!(config.default_time_filter, "48H");
        assert_eq!(config.default_event_types, ["wind", "flood"]);

        clear_storm_env();
    }

    #[test]
    #[serial]
    fn test_blank_override_is_rejected() {
        clear_storm_env();
        env::set_var("STORM_CLIENT_SECRET", "   ");

        let err = DashboardConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::BlankVar("STORM_CLIENT_SECRET")));

        clear_storm_env();
    }

    #[test]
    #[serial]
    fn test_event_type_list_is_split_and_trimmed() {
        clear_storm_env();
        env::set_var("STORM_DEFAULT_EVENT_TYPES", " hail,tornado , wind ");

        let config = DashboardConfig::from_env().unwrap();
        assert_eq!(config.default_event_types, ["hail", "tornado", "wind"]);

        clear_storm_env();
    }

    #[test]
    fn test_event_type_list_must_not_be_empty() {
        let err = parse_event_types("STORM_DEFAULT_EVENT_TYPES", " , ,").unwrap_err();
        assert!(matches!(err, ConfigError::NoEventTypes(_)));
    }

    #[test]
    fn test_debug_output_redacts_the_secret() {
        let printed = format!("{:?}", DashboardConfig::default());

        assert!(!printed.contains("LDn8C2fr2175vxw1XLDp3Hr9jKSqAhhZuOCKJIVR"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("Detroit, MI"));
    }
}
