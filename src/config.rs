use std::fs;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };
use tracing::debug;

use crate::errors::ConfigError;
use crate::generators::ClassSet;
use crate::password::validate_length;

/// Defaults applied before command line flags.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub length: Option<u32>,
    pub classes: ClassSet,
    pub copy: bool,
}

impl Config {
    const APP_DIR: &str = "pwgen-form";
    const FILE_NAME: &str = "config.json";

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Loads an explicitly named file, or the default one if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(length) = self.length {
            validate_length(&length.to_string()).map_err(ConfigError::InvalidDefaultLength)?;
        }

        Ok(())
    }

    pub fn length_input(&self) -> Option<String> {
        self.length.map(|length| length.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "classes": { "numbers": true } }"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.length, None);
        assert!(config.classes.numbers);
        assert!(!config.classes.lowercase);
        assert!(!config.copy);
    }

    #[test]
    fn full_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let expected = Config {
            length: Some(12),
            classes: ClassSet::all(),
            copy: true,
        };
        fs::write(&path, serde_json::to_string_pretty(&expected).unwrap()).unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), expected);
        assert_eq!(expected.length_input().as_deref(), Some("12"));
    }

    #[test]
    fn named_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ length: ").unwrap();

        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn default_length_must_be_in_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "length": 40 }"#).unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::InvalidDefaultLength(ValidationError::OutOfRange(v))) if v == 40.0
        ));
    }
}
