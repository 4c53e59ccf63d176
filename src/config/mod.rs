//! Configuration loading and management for the earnings ticker.
//!
//! This module provides functionality to load the tick interval and the
//! animation settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use earnings_ticker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ticker.yaml").unwrap();
//! println!("Animating over {} ms", config.animation().duration_ms);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnimationConfig, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_TICK_INTERVAL_MS, EngineConfig,
    TickerConfig,
};
