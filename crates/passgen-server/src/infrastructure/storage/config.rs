//! TOML-based configuration persistence for the server.
//!
//! Reads and writes [`AppConfig`] at the platform-appropriate location:
//! - Windows:  `%APPDATA%\PassGen\config.toml`
//! - Linux:    `~/.config/passgen/config.toml`
//! - macOS:    `~/Library/Application Support/PassGen/config.toml`
//!
//! Every field carries a serde default, so a missing file, a partial file,
//! and a file written by an older version all load cleanly.  The protocol
//! constants live here as *defaults*, not as compile-time limits: the length
//! bounds and the listen address are plain config values handed to the
//! session and listener at startup.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use passgen_core::PasswordPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level server configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub network: NetworkSettings,
    /// Length bounds enforced by the validator (defaults 6–32).
    #[serde(default)]
    pub password: PasswordPolicy,
}

/// General server behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` overrides this when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Listen address settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSettings {
    /// IP address to bind the listener to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Pending-connection queue depth for `listen(2)`.
    #[serde(default = "default_backlog")]
    pub backlog: u32,
}

impl NetworkSettings {
    /// Resolves the configured address and port into a socket address.
    ///
    /// # Errors
    ///
    /// Returns the address parse error when `bind_address` is not an IP
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        Ok(SocketAddr::new(self.bind_address.parse()?, self.port))
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_backlog() -> u32 {
    5
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            backlog: default_backlog(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads [`AppConfig`] from the platform config path, returning
/// `AppConfig::default()` if the file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_from(&config_file_path()?)
}

/// Persists `config` to the platform config path, creating the directory if
/// needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_to(&config_file_path()?, config)
}

/// Loads [`AppConfig`] from an explicit path; a missing file yields defaults.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to an explicit path, creating parent directories.
///
/// # Errors
///
/// See [`save_config`].
pub fn save_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config base directory, including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("PassGen"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("passgen"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/PassGen
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("PassGen")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_matches_the_protocol_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.network.bind_address, "127.0.0.1");
        assert_eq!(cfg.network.port, 8080);
        assert_eq!(cfg.network.backlog, 5);
        assert_eq!(cfg.password.min_length, 6);
        assert_eq!(cfg.password.max_length, 32);
        assert_eq!(cfg.server.log_level, "info");
    }

    #[test]
    fn test_socket_addr_resolves_the_default_loopback() {
        let addr = NetworkSettings::default().socket_addr().expect("parse");
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_socket_addr_rejects_a_non_ip_bind_address() {
        let settings = NetworkSettings {
            bind_address: "not-an-ip".to_string(),
            ..NetworkSettings::default()
        };
        assert!(settings.socket_addr().is_err());
    }

    #[test]
    fn test_app_config_serializes_and_deserializes_round_trip() {
        let mut cfg = AppConfig::default();
        cfg.network.port = 9000;
        cfg.password.max_length = 24;

        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: AppConfig = toml::from_str(&toml_str).expect("deserialize");

        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_partial_toml_fills_missing_fields_with_defaults() {
        let cfg: AppConfig = toml::from_str("[network]\nport = 9999\n").expect("parse");
        assert_eq!(cfg.network.port, 9999);
        assert_eq!(cfg.network.bind_address, "127.0.0.1");
        assert_eq!(cfg.password.min_length, 6);
        assert_eq!(cfg.server.log_level, "info");
    }

    #[test]
    fn test_empty_toml_is_the_default_config() {
        let cfg: AppConfig = toml::from_str("").expect("parse");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_from(&dir.path().join("does-not-exist.toml")).expect("load");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_save_to_then_load_from_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.network.bind_address = "0.0.0.0".to_string();
        cfg.network.backlog = 16;
        cfg.server.log_level = "debug".to_string();

        save_to(&path, &cfg).expect("save");
        let restored = load_from(&path).expect("load");
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "network = \"oops").expect("write");

        assert!(matches!(load_from(&path), Err(ConfigError::Parse(_))));
    }
}
