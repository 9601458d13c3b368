use std::env;

use crate::app::{GradeScale, DEFAULT_MAX_GRADE, DEFAULT_MIN_GRADE};
use crate::error::ConfigError;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,gradebook=debug";

/// How the demo binary prints its report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Accepted grade range
    pub scale: GradeScale,
    pub output: OutputFormat,
    /// Fallback tracing filter
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min = parse_or(&lookup, "GRADEBOOK_MIN_GRADE", DEFAULT_MIN_GRADE)?;
        let max = parse_or(&lookup, "GRADEBOOK_MAX_GRADE", DEFAULT_MAX_GRADE)?;
        let output = parse_or(&lookup, "GRADEBOOK_OUTPUT", OutputFormat::Text)?;

        Ok(Self {
            scale: GradeScale::new(min, max)?,
            output,
            log_filter: lookup("GRADEBOOK_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.scale, GradeScale::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("GRADEBOOK_MIN_GRADE", "0"),
            ("GRADEBOOK_MAX_GRADE", " 5 "),
            ("GRADEBOOK_OUTPUT", "JSON"),
            ("GRADEBOOK_LOG", "warn"),
        ])
        .unwrap();

        assert_eq!(config.scale.min(), 0);
        assert_eq!(config.scale.max(), 5);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn non_numeric_bound_is_invalid() {
        let err = config_from(&[("GRADEBOOK_MAX_GRADE", "ten")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "GRADEBOOK_MAX_GRADE".to_string(),
                value: "ten".to_string(),
            }
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = config_from(&[("GRADEBOOK_MIN_GRADE", "11")]).unwrap_err();
        assert_eq!(err, ConfigError::EmptyScale { min: 11, max: 10 });
    }

    #[test]
    fn unknown_output_format_is_invalid() {
        assert!(config_from(&[("GRADEBOOK_OUTPUT", "yaml")]).is_err());
    }
}
