// Configuration module entry point
// Loads application configuration and holds per-process runtime state

mod state;
mod types;

use std::net::{Ipv4Addr, SocketAddr};

pub use state::AppState;
pub use types::Config;

/// Fixed listening port
pub const LISTEN_PORT: u16 = 8080;

/// Directory served by the root listing (the process working directory)
pub const ROOT_DIR: &str = ".";

/// Default config file name (without extension)
const CONFIG_FILE: &str = "config";

/// Prefix for environment overrides, e.g. `WEXPLORER_LOGGING__LEVEL=warn`
const ENV_PREFIX: &str = "WEXPLORER";

impl Config {
    /// Load configuration from `config.toml` (optional) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let chunk_size = i64::try_from(defaults.performance.download_chunk_size).unwrap_or(65_536);

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.access_log", defaults.logging.access_log)?
            .set_default("logging.access_log_format", defaults.logging.access_log_format)?
            .set_default("performance.keep_alive", defaults.performance.keep_alive)?
            .set_default("performance.download_chunk_size", chunk_size)?
            .build()?;

        settings.try_deserialize()
    }

    /// Socket address the server binds to; not configurable
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let cfg = Config::load_from(missing.to_str().unwrap()).unwrap();

        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.logging.access_log_file.is_none());
        assert!(cfg.performance.keep_alive);
        assert_eq!(cfg.performance.download_chunk_size, 65_536);
        assert!(cfg.performance.workers.is_none());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explorer.toml");
        std::fs::write(
            &path,
            "[logging]\nlevel = \"warn\"\naccess_log = false\n\n[performance]\nworkers = 2\nmax_connections = 16\n",
        )
        .unwrap();

        let base = dir.path().join("explorer");
        let cfg = Config::load_from(base.to_str().unwrap()).unwrap();

        assert_eq!(cfg.logging.level, "warn");
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.performance.workers, Some(2));
        assert_eq!(cfg.performance.max_connections, Some(16));
        // Untouched keys keep their defaults
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn test_socket_addr_is_fixed() {
        let addr = Config::default().socket_addr();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }
}
