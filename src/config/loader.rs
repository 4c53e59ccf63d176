//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AnimationConfig, EngineConfig, TickerConfig};

/// Loads and validates engine configuration.
///
/// # File Format
///
/// ```text
/// ticker:
///   interval_ms: 1000
/// animation:
///   duration_ms: 1000
///   easing: ease_out_expo   # or: linear
/// ```
///
/// # Example
///
/// ```no_run
/// use earnings_ticker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ticker.yaml").unwrap();
/// println!("Tick every {:?}", loader.ticker().interval());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// Returns an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for this schema (`ConfigParseError`)
    /// - A duration is zero (`InvalidConfig`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use earnings_ticker::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ticker.yaml")?;
    /// # Ok::<(), earnings_ticker::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_ticker::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml("ticker:\n  interval_ms: 250\n")?;
    /// assert_eq!(loader.ticker().interval_ms, 250);
    /// assert_eq!(loader.animation().duration_ms, 1000);
    /// # Ok::<(), earnings_ticker::error::EngineError>(())
    /// ```
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        let config = if content.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str::<EngineConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.ticker.interval_ms == 0 {
            return Err(EngineError::InvalidConfig {
                field: "ticker.interval_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if config.animation.duration_ms == 0 {
            return Err(EngineError::InvalidConfig {
                field: "animation.duration_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the ticker settings.
    pub fn ticker(&self) -> &TickerConfig {
        &self.config.ticker
    }

    /// Returns the animation settings.
    pub fn animation(&self) -> &AnimationConfig {
        &self.config.animation
    }
}
