//! Configuration validation.

use crate::config::Config;
use crate::constants::confidence;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_store(config)?;
    validate_defaults(config)?;
    Ok(())
}

/// Validate store locations.
fn validate_store(config: &Config) -> Result<()> {
    let store = &config.store;

    if store.data_dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "data_dir must be specified".to_string(),
        });
    }

    if store.audio_dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "audio_dir must be specified".to_string(),
        });
    }

    if store.detection_file.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "detection_file must be specified".to_string(),
        });
    }

    Ok(())
}

/// Validate default settings.
fn validate_defaults(config: &Config) -> Result<()> {
    let min_confidence = config.defaults.min_confidence;

    if !(confidence::MIN..=confidence::MAX).contains(&min_confidence) {
        return Err(Error::ConfigValidation {
            message: format!(
                "min_confidence must be between {} and {}, got {}",
                confidence::MIN,
                confidence::MAX,
                min_confidence
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_invalid_confidence() {
        let mut config = Config::default();
        config.defaults.min_confidence = 1.5;
        assert!(validate_config(&config).is_err());

        config.defaults.min_confidence = -0.1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_nan_confidence() {
        let mut config = Config::default();
        config.defaults.min_confidence = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_data_dir() {
        let mut config = Config::default();
        config.store.data_dir = PathBuf::new();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_validate_empty_audio_dir() {
        let mut config = Config::default();
        config.store.audio_dir = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_blank_detection_file() {
        let mut config = Config::default();
        config.store.detection_file = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
