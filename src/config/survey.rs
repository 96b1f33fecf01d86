//! Survey scheme source configuration.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

use crate::domain::scheme::SurveyScheme;

use super::error::ConfigError;

/// Where the survey scheme comes from. Without a file the built-in standard
/// scheme is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Optional YAML file overriding the standard scheme.
    pub scheme_file: Option<PathBuf>,
}

impl SurveyConfig {
    /// Loads and validates the survey scheme.
    pub fn load_scheme(&self) -> Result<SurveyScheme, ConfigError> {
        match &self.scheme_file {
            None => Ok(SurveyScheme::standard()),
            Some(path) => {
                let yaml = std::fs::read_to_string(path).map_err(|source| {
                    ConfigError::SchemeFile {
                        path: path.display().to_string(),
                        source,
                    }
                })?;
                let scheme = SurveyScheme::from_yaml(&yaml)
                    .map_err(|e| ConfigError::InvalidScheme(e.to_string()))?;
                info!(path = %path.display(), counters = scheme.counter_count(), "survey scheme loaded");
                Ok(scheme)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_the_standard_scheme() {
        let scheme = SurveyConfig::default().load_scheme().unwrap();
        assert_eq!(scheme.counter_count(), 23);
        assert_eq!(scheme.question_count(), 9);
    }

    #[test]
    fn loads_scheme_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let yaml = serde_yaml::to_string(&SurveyScheme::standard()).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = SurveyConfig {
            scheme_file: Some(file.path().to_path_buf()),
        };
        let scheme = config.load_scheme().unwrap();
        assert_eq!(scheme, SurveyScheme::standard());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let config = SurveyConfig {
            scheme_file: Some(PathBuf::from("/nonexistent/scheme.yaml")),
        };
        assert!(matches!(
            config.load_scheme(),
            Err(ConfigError::SchemeFile { .. })
        ));
    }

    #[test]
    fn invalid_scheme_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"counters: []").unwrap();
        let config = SurveyConfig {
            scheme_file: Some(file.path().to_path_buf()),
        };
        assert!(config.load_scheme().is_err());
    }
}
