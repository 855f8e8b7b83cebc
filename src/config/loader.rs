//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the estimator
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EstimatorError, EstimatorResult};

use super::types::{EstimatorConfig, RateCard, ShareConfig};

/// Loads and provides access to the estimator configuration.
///
/// The configuration lives in a single YAML file. Every key is optional;
/// anything left out keeps its built-in London value:
///
/// ```text
/// rates:
///   base_rate: "18.0"
///   fuel_rate_per_hour: "2.5"
///   other_weekly_cost: "40"
///   weekend_multiplier: "1.1"
///   weeks_per_month: "4.33"
///   cars:
///     normal: { multiplier: "1.0", weekly_cost: "230" }
///     executive: { multiplier: "1.25", weekly_cost: "300" }
///     seven_seater: { multiplier: "1.2", weekly_cost: "270" }
/// share:
///   page_url: "https://example.com/"
///   email_subject: "My London Uber Driver Earnings Estimate"
/// ```
///
/// # Example
///
/// ```no_run
/// use driver_earnings::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/london.yaml").unwrap();
/// println!("Base rate: £{}", loader.rate_card().base_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EstimatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed values (`ConfigParseError`)
    /// - A rate or cost cannot be used by the formula (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EstimatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EstimatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(path = %path_str, "Loaded estimator configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// `source` names the text in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use driver_earnings::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("rates:\n  base_rate: \"20\"\n", "inline").unwrap();
    /// assert_eq!(loader.rate_card().base_rate, Decimal::from(20));
    /// assert_eq!(loader.rate_card().fuel_rate_per_hour, Decimal::new(25, 1));
    /// ```
    pub fn from_yaml_str(content: &str, source: &str) -> EstimatorResult<Self> {
        // An empty document deserializes as null, which means "all defaults".
        let config = if content.trim().is_empty() {
            EstimatorConfig::default()
        } else {
            serde_yaml::from_str::<EstimatorConfig>(content).map_err(|e| {
                EstimatorError::ConfigParseError {
                    path: source.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        config.rates.validate()?;
        Ok(Self { config })
    }

    /// Creates a loader around an already-built configuration.
    pub fn from_config(config: EstimatorConfig) -> EstimatorResult<Self> {
        config.rates.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Returns the formula constants.
    pub fn rate_card(&self) -> &RateCard {
        &self.config.rates
    }

    /// Returns the share link settings.
    pub fn share(&self) -> &ShareConfig {
        &self.config.share
    }
}
