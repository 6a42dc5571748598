//! Environment variable overrides.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `BOXEN_STYLE` | Default border style |
//! | `BOXEN_COLOR` | Default border color |
//! | `BOXEN_WIDTH` | Render width in columns |
//! | `BOXEN_COLOR_MODE` | `auto`, `always` or `never` |
//! | `NO_COLOR` | Any non-empty value forces `never` |
//!
//! Empty values are ignored.

use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, Result};

pub const STYLE_VAR: &str = "BOXEN_STYLE";
pub const COLOR_VAR: &str = "BOXEN_COLOR";
pub const WIDTH_VAR: &str = "BOXEN_WIDTH";
pub const COLOR_MODE_VAR: &str = "BOXEN_COLOR_MODE";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Applies overrides read through `lookup` to `config`.
///
/// `NO_COLOR` is applied after `BOXEN_COLOR_MODE` so that it wins.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] if `BOXEN_WIDTH` or
/// `BOXEN_COLOR_MODE` cannot be parsed.
///
/// # Examples
///
/// ```
/// use boxen_config::{ColorMode, Config, env::apply_env_with};
///
/// let mut config = Config::default();
/// apply_env_with(&mut config, |name| match name {
///     "BOXEN_STYLE" => Some("double".to_string()),
///     "NO_COLOR" => Some("1".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.box_options.style, "double");
/// assert_eq!(config.color_mode, ColorMode::Never);
/// ```
pub fn apply_env_with<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

    if let Some(style) = get(STYLE_VAR) {
        debug!(%style, "style overridden from environment");
        config.box_options.style = style;
    }
    if let Some(color) = get(COLOR_VAR) {
        debug!(%color, "color overridden from environment");
        config.box_options.color = color;
    }
    if let Some(width) = get(WIDTH_VAR) {
        let parsed = width.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnv {
            name: WIDTH_VAR,
            value: width.clone(),
            reason: e.to_string(),
        })?;
        config.width = Some(parsed);
    }
    if let Some(mode) = get(COLOR_MODE_VAR) {
        config.color_mode = mode.parse().map_err(|reason| ConfigError::InvalidEnv {
            name: COLOR_MODE_VAR,
            value: mode.clone(),
            reason,
        })?;
    }
    if get(NO_COLOR_VAR).is_some() {
        config.color_mode = crate::ColorMode::Never;
    }

    Ok(())
}

/// Applies overrides from the process environment.
///
/// # Errors
///
/// See [`apply_env_with`].
pub fn apply_env(config: &mut Config) -> Result<()> {
    apply_env_with(config, |name| std::env::var(name).ok())
}
