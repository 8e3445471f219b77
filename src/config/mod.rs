//! Configuration management
//!
//! Configuration is loaded from `config.yml` with every field defaulted, so
//! a missing or empty file yields a runnable default configuration.
//! Environment variables override file settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Graph store configuration
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origin
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

/// Graph store (Neo4j) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Bolt URI
    #[serde(default = "default_graph_uri")]
    pub uri: String,
    /// Store user
    #[serde(default = "default_graph_user")]
    pub user: String,
    /// Store password
    #[serde(default)]
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: default_graph_uri(),
            user: default_graph_user(),
            password: String::new(),
        }
    }
}

fn default_graph_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_graph_user() -> String {
    "neo4j".to_string()
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Load configuration and apply environment variable overrides
    pub fn load_with_env(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("TASTEIT_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("TASTEIT_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(cors_origin) = std::env::var("TASTEIT_CORS_ORIGIN") {
            self.server.cors_origin = cors_origin;
        }
        if let Ok(uri) = std::env::var("TASTEIT_GRAPH_URI") {
            self.graph.uri = uri;
        }
        if let Ok(user) = std::env::var("TASTEIT_GRAPH_USER") {
            self.graph.user = user;
        }
        if let Ok(password) = std::env::var("TASTEIT_GRAPH_PASSWORD") {
            self.graph.password = password;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Path::new("does-not-exist.yml")).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.graph.uri, "bolt://localhost:7687");
        assert_eq!(config.graph.user, "neo4j");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.graph.user, "neo4j");
    }

    #[test]
    fn test_full_yaml_parsed() {
        let yaml = r#"
server:
  host: 127.0.0.1
  port: 3001
  cors_origin: "https://tasteit.example"
graph:
  uri: "bolt://graph:7687"
  user: "tasteit"
  password: "secret"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.graph.uri, "bolt://graph:7687");
        assert_eq!(config.graph.password, "secret");
    }
}
