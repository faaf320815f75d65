//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Verbose logging when no RUST_LOG filter is set
    pub debug: bool,
    /// Path to the question dataset document
    pub questions_file: PathBuf,
    /// Directory holding the static pages
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            debug: false,
            questions_file: PathBuf::from("questions.json"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults; an empty string
    /// counts as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.host);

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.port);

        let debug = std::env::var("DEBUG")
            .map(|v| v != "0" && v.to_lowercase() != "false")
            .unwrap_or(false);

        let questions_file = std::env::var("QUESTIONS_FILE")
            .ok()
            .and_then(|v| {
                let trimmed = v.trim();
                (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
            })
            .unwrap_or(defaults.questions_file);

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .and_then(|v| {
                let trimmed = v.trim();
                (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
            })
            .unwrap_or(defaults.static_dir);

        Self {
            host,
            port,
            debug,
            questions_file,
            static_dir,
        }
    }

    /// Socket address to bind the listener to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in ["HOST", "PORT", "DEBUG", "QUESTIONS_FILE", "STATIC_DIR"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        clear_env();
        let config = ServerConfig::from_env();

        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert_eq!(config.questions_file, PathBuf::from("questions.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
        std::env::set_var("QUESTIONS_FILE", "/data/prompts.json");
        std::env::set_var("STATIC_DIR", "/srv/pages");

        let config = ServerConfig::from_env();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 8080);
        assert_eq!(config.questions_file, PathBuf::from("/data/prompts.json"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/pages"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_values_fall_back() {
        clear_env();
        std::env::set_var("HOST", "not-an-address");
        std::env::set_var("PORT", "not-a-port");

        let config = ServerConfig::from_env();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 5000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_debug_truthiness() {
        clear_env();

        std::env::set_var("DEBUG", "1");
        assert!(ServerConfig::from_env().debug);

        std::env::set_var("DEBUG", "true");
        assert!(ServerConfig::from_env().debug);

        std::env::set_var("DEBUG", "0");
        assert!(!ServerConfig::from_env().debug);

        std::env::set_var("DEBUG", "FALSE");
        assert!(!ServerConfig::from_env().debug);

        clear_env();
    }
}
