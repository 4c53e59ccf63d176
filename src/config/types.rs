//! Configuration types for the earnings ticker.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML. Every field has a default, so an empty
//! document is a valid configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::display::Easing;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Default animation duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 1000;

/// Recomputation loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    /// Milliseconds between two published ticks.
    pub interval_ms: u64,
}

impl TickerConfig {
    /// Returns the tick interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// Displayed-value animation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds one transition takes to reach its target.
    pub duration_ms: u64,
    /// Easing curve applied to transition progress.
    pub easing: Easing,
}

impl AnimationConfig {
    /// Returns the transition duration as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Recomputation loop settings.
    pub ticker: TickerConfig,
    /// Animation settings.
    pub animation: AnimationConfig,
}
