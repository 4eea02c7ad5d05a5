//! Host configuration loaded from environment variables.

/// Seeding host configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `SEED_SYNTHETIC_ENTRIES` — extra `Stock {i}` catalog entries to
///   append to the demo dataset for load testing (default: `0`)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub synthetic_entries: usize,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            synthetic_entries: std::env::var("SEED_SYNTHETIC_ENTRIES")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            synthetic_entries: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.synthetic_entries, 0);
    }
}
