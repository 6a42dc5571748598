//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct: default box options plus
//! the settings that control how boxes are rendered.

use boxen_protocol::BoxOptions;
use serde::{Deserialize, Serialize};

use crate::color_mode::ColorMode;
use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Narrowest usable render width: two border columns.
pub const MIN_WIDTH: u16 = 2;

/// The boxen configuration.
///
/// # Examples
///
/// ```
/// use boxen_config::{ColorMode, Config};
/// use boxen_protocol::BoxOptions;
///
/// let config = Config::default();
/// assert_eq!(config.box_options, BoxOptions::default());
/// assert_eq!(config.width, None);
///
/// let config = Config {
///     box_options: BoxOptions::new().with_style("double"),
///     width: Some(60),
///     color_mode: ColorMode::Never,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Defaults for every box option, stored under the `box` key.
    #[serde(default, rename = "box")]
    pub box_options: BoxOptions,

    /// Render width in columns.
    ///
    /// When unset, the terminal width is detected at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,

    /// When to emit ANSI color sequences.
    #[serde(default)]
    pub color_mode: ColorMode,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations and applies
    /// environment overrides.
    ///
    /// If no configuration file is found, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, if an environment override is malformed, or if the
    /// result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use boxen_config::Config;
    ///
    /// # fn example() -> boxen_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Default style: {}", config.box_options.style);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        crate::env::apply_env(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file and applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// result fails validation.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let mut config: Config = read_config_file(path)?;
        crate::env::apply_env(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// result fails validation.
    pub fn read_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the default box options and the render width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptions`] or
    /// [`ConfigError::InvalidWidth`].
    ///
    /// # Examples
    ///
    /// ```
    /// use boxen_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.box_options.style = "wavy".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.box_options.validate()?;
        if let Some(width) = self.width.filter(|w| *w < MIN_WIDTH) {
            return Err(ConfigError::InvalidWidth {
                width,
                min: MIN_WIDTH,
            });
        }
        Ok(())
    }
}
