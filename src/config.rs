/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Bounds, Error, TieBreak};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub stepper: StepperConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub min_floor: i32,
    pub max_floor: i32,
    pub initial_floor: Option<i32>,
    pub tie_break: TieBreak,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            min_floor: 1,
            max_floor: 10,
            initial_floor: None,
            tie_break: TieBreak::Above,
        }
    }
}

impl ElevatorConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_floor: self.min_floor,
            max_floor: self.max_floor,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StepperConfig {
    pub tick_interval_ms: u64,
}

impl Default for StepperConfig {
    fn default() -> Self {
        StepperConfig {
            tick_interval_ms: 700,
        }
    }
}

impl Config {
    /// Rejects values that parse fine but cannot drive a simulation.
    pub fn validate(&self) -> Result<(), Error> {
        if self.stepper.tick_interval_ms == 0 {
            return Err(Error::ZeroTickInterval);
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str, path: &Path) -> Result<Config, Error> {
    let config: Config = toml::from_str(config_str).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Reads the configuration at `path`.
///
/// When `allow_missing` is set, a file that does not exist yields the
/// default configuration instead of an error.
pub fn load_config(path: &Path, allow_missing: bool) -> Result<Config, Error> {
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str, path),
        Err(e) if allow_missing && e.kind() == ErrorKind::NotFound => {
            log::debug!("No configuration at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(source) => Err(Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_full_config() {
        // Arrange
        let config_str = r#"
            [elevator]
            min_floor = -2
            max_floor = 12
            initial_floor = 0
            tie_break = "below"

            [stepper]
            tick_interval_ms = 500
        "#;

        // Act
        let config = parse_config(config_str, Path::new("config.toml")).unwrap();

        // Assert
        assert_eq!(config.elevator.min_floor, -2);
        assert_eq!(config.elevator.max_floor, 12);
        assert_eq!(config.elevator.initial_floor, Some(0));
        assert_eq!(config.elevator.tie_break, TieBreak::Below);
        assert_eq!(config.stepper.tick_interval_ms, 500);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        // Arrange
        let config_str = "[elevator]\nmax_floor = 4\n";

        // Act
        let config = parse_config(config_str, Path::new("config.toml")).unwrap();

        // Assert
        assert_eq!(config.elevator.min_floor, 1);
        assert_eq!(config.elevator.max_floor, 4);
        assert_eq!(config.elevator.initial_floor, None);
        assert_eq!(config.elevator.tie_break, TieBreak::Above);
        assert_eq!(config.stepper, StepperConfig::default());
    }

    #[test]
    fn test_parse_malformed_config() {
        let result = parse_config("[elevator]\nmin_floor = \"one\"\n", Path::new("bad.toml"));

        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_parse_zero_tick_interval() {
        // Arrange
        let config_str = "[stepper]\ntick_interval_ms = 0\n";

        // Act
        let result = parse_config(config_str, Path::new("config.toml"));

        // Assert
        assert!(matches!(result, Err(Error::ZeroTickInterval)));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        // Arrange
        let path = PathBuf::from("this/path/does/not/exist.toml");

        // Act + Assert
        assert_eq!(load_config(&path, true).unwrap(), Config::default());
        assert!(matches!(
            load_config(&path, false),
            Err(Error::ConfigRead { .. })
        ));
    }
}
