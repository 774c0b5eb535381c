//! Configuration validation
//!
//! Validates config consistency:
//! - Destination host is present (only once the CLI had its say)
//! - Port, worker count, record count and message length are non-zero
//! - The run's total record count fits in a `u64`
//! - Transport can actually be dialed
//! - Priority names a known facility and severity
//! - A configured record hostname is a single non-empty token

use crate::Config;
use crate::error::{ConfigError, Result};

/// Whether a missing destination host is an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequirement {
    /// Config file alone; the CLI may still supply the host
    Optional,
    /// Final merged configuration
    Required,
}

/// Validate the entire configuration
pub fn validate_config(config: &Config, host: HostRequirement) -> Result<()> {
    validate_target(config, host)?;
    validate_record(config)?;
    validate_load(config)?;
    Ok(())
}

fn validate_target(config: &Config, host: HostRequirement) -> Result<()> {
    let target = &config.target;

    match target.host.as_deref() {
        Some(h) if h.trim().is_empty() => {
            return Err(ConfigError::invalid_value("target", "host", "must not be empty"));
        }
        None if host == HostRequirement::Required => {
            return Err(ConfigError::missing_field("target", "host"));
        }
        _ => {}
    }

    if target.port == 0 {
        return Err(ConfigError::invalid_value(
            "target",
            "port",
            "must be between 1 and 65535",
        ));
    }

    if !target.transport.is_supported() {
        return Err(ConfigError::UnsupportedTransport(target.transport.as_str()));
    }

    Ok(())
}

fn validate_record(config: &Config) -> Result<()> {
    let record = &config.record;

    record.priority()?;

    if record.message_length == 0 {
        return Err(ConfigError::invalid_value(
            "record",
            "message_length",
            "must be greater than zero",
        ));
    }

    if let Some(hostname) = record.hostname.as_deref() {
        if hostname.is_empty() {
            return Err(ConfigError::invalid_value(
                "record",
                "hostname",
                "must not be empty",
            ));
        }
        if hostname.contains(char::is_whitespace) {
            return Err(ConfigError::invalid_value(
                "record",
                "hostname",
                "must not contain whitespace",
            ));
        }
    }

    Ok(())
}

fn validate_load(config: &Config) -> Result<()> {
    if config.load.workers == 0 {
        return Err(ConfigError::invalid_value(
            "load",
            "workers",
            "must be greater than zero",
        ));
    }

    if config.load.count == 0 {
        return Err(ConfigError::invalid_value(
            "load",
            "count",
            "must be greater than zero",
        ));
    }

    if config.load.count.checked_mul(config.load.workers as u64).is_none() {
        return Err(ConfigError::invalid_value(
            "load",
            "count",
            format!(
                "{} workers x {} records overflows the total record count",
                config.load.workers, config.load.count
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn with_host() -> Config {
        let mut config = Config::default();
        config.target.host = Some("127.0.0.1".into());
        config
    }

    #[test]
    fn test_defaults_valid_once_host_is_set() {
        assert!(validate_config(&with_host(), HostRequirement::Required).is_ok());
    }

    #[test]
    fn test_missing_host() {
        let config = Config::default();
        assert!(validate_config(&config, HostRequirement::Optional).is_ok());

        let err = validate_config(&config, HostRequirement::Required).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                section: "target",
                field: "host"
            }
        ));
    }

    #[test]
    fn test_empty_host() {
        let mut config = Config::default();
        config.target.host = Some("  ".into());
        assert!(validate_config(&config, HostRequirement::Optional).is_err());
    }

    #[test]
    fn test_zero_port() {
        let mut config = with_host();
        config.target.port = 0;
        let err = validate_config(&config, HostRequirement::Required).unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_tls_rejected() {
        let err = Config::from_str("[target]\ntransport = \"tls\"").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedTransport("tls")));
    }

    #[test]
    fn test_bad_priorities() {
        for priority in ["local9.info", "local0.loud", "local0", "a.b.c"] {
            let mut config = with_host();
            config.record.priority = priority.into();
            let err = validate_config(&config, HostRequirement::Required).unwrap_err();
            assert!(matches!(err, ConfigError::Priority(_)), "{priority}");
        }
    }

    #[test]
    fn test_zero_message_length() {
        let mut config = with_host();
        config.record.message_length = 0;
        assert!(validate_config(&config, HostRequirement::Required).is_err());
    }

    #[test]
    fn test_hostname_with_space() {
        let mut config = with_host();
        config.record.hostname = Some("web 01".into());
        assert!(validate_config(&config, HostRequirement::Required).is_err());
    }

    #[test]
    fn test_empty_hostname() {
        let mut config = with_host();
        config.record.hostname = Some(String::new());
        let err = validate_config(&config, HostRequirement::Required).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                section: "record",
                field: "hostname",
                ..
            }
        ));
    }

    #[test]
    fn test_total_overflow() {
        let mut config = with_host();
        config.load.workers = 2;
        config.load.count = u64::MAX;
        let err = validate_config(&config, HostRequirement::Required).unwrap_err();
        assert!(err.to_string().contains("overflows"));

        config.load.workers = 1;
        assert!(validate_config(&config, HostRequirement::Required).is_ok());
    }

    #[test]
    fn test_zero_workers_and_count() {
        let mut config = with_host();
        config.load.workers = 0;
        let err = validate_config(&config, HostRequirement::Required).unwrap_err();
        assert!(err.to_string().contains("workers"));

        let mut config = with_host();
        config.load.count = 0;
        let err = validate_config(&config, HostRequirement::Required).unwrap_err();
        assert!(err.to_string().contains("count"));
    }
}
