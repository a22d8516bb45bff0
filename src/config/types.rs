// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// One of `info`, `warn`, `error`
    pub level: String,
    pub access_log: bool,
    /// `combined`, `common`, `json` or a custom `$variable` pattern
    pub access_log_format: String,
    pub access_log_file: Option<String>,
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            access_log: true,
            access_log_format: "combined".to_string(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Runtime and connection tuning
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Tokio worker threads, CPU cores when unset
    pub workers: Option<usize>,
    pub keep_alive: bool,
    pub max_connections: Option<u64>,
    /// Read buffer size used when streaming downloads
    pub download_chunk_size: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            workers: None,
            keep_alive: true,
            max_connections: None,
            download_chunk_size: 64 * 1024,
        }
    }
}
