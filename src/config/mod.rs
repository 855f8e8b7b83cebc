//! Configuration loading and management for the earnings estimator.
//!
//! This module provides functionality to load the formula constants and
//! share settings from a YAML file, falling back to the built-in London
//! figures for anything the file leaves out.
//!
//! # Example
//!
//! ```no_run
//! use driver_earnings::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/london.yaml").unwrap();
//! println!("Weekend multiplier: {}", config.rate_card().weekend_multiplier);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CarRate, CarRates, EstimatorConfig, RateCard, ShareConfig};
