// Application state module
// Holds the loaded configuration and the explorer root shared by all connections

use super::types::Config;
use crate::explorer::Explorer;

/// Application state
pub struct AppState {
    pub config: Config,
    pub explorer: Explorer,
}

impl AppState {
    pub fn new(config: &Config, explorer: Explorer) -> Self {
        Self {
            config: config.clone(),
            explorer,
        }
    }

    pub fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_log_flag_follows_config() {
        let mut config = Config::default();
        assert!(AppState::new(&config, Explorer::new(".")).access_log_enabled());

        config.logging.access_log = false;
        assert!(!AppState::new(&config, Explorer::new(".")).access_log_enabled());
    }
}
