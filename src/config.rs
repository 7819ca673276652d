use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

/// Implementation name announced to MCP clients when none is configured.
pub const DEFAULT_SERVER_NAME: &str = "DocumentMCP";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the document server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON seed file replacing the built-in document set.
    pub seed_file: Option<PathBuf>,
    /// Optional override for the HTTP server port.
    pub server_port: Option<u16>,
    /// Optional log file path; defaults to `logs/docmcp.log`.
    pub log_file: Option<PathBuf>,
    /// Implementation name reported during MCP initialization.
    pub server_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            server_port: None,
            log_file: None,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            seed_file: load_env_optional("DOCMCP_SEED_FILE").map(PathBuf::from),
            server_port: load_env_optional("SERVER_PORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
                })
                .transpose()?,
            log_file: load_env_optional("DOCMCP_LOG_FILE").map(PathBuf::from),
            server_name: load_env_optional("DOCMCP_SERVER_NAME")
                .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string()),
        })
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Retrieve the loaded configuration, falling back to defaults when none was installed.
///
/// Library surfaces use this so they stay usable in tests that never call [`init_config`].
pub fn config_or_default() -> &'static Config {
    static FALLBACK: OnceLock<Config> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| FALLBACK.get_or_init(Config::default))
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        seed_file = ?config.seed_file,
        server_port = ?config.server_port,
        server_name = %config.server_name,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_builtin_name_and_no_overrides() {
        let config = Config::default();
        assert_eq!(config.server_name, DEFAULT_SERVER_NAME);
        assert!(config.seed_file.is_none());
        assert!(config.server_port.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn unset_variables_are_absent() {
        assert!(load_env_optional("DOCMCP_TEST_VARIABLE_THAT_IS_NEVER_SET").is_none());
    }

    #[test]
    fn config_or_default_never_panics() {
        let config = config_or_default();
        assert!(!config.server_name.is_empty());
    }
}
