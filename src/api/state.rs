//! Application state for the earnings estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration. It is never mutated after start-up, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded estimator configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_built_in_rates() {
        let state = AppState::default();
        assert_eq!(state.config().rate_card().base_rate, Decimal::from(18));
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::default();
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
