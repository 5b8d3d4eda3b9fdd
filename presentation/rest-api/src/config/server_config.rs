use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8080";

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = lookup("SERVICE_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: "3000".to_string(),
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "0.0.0.0:3000");
    }

    #[test]
    fn should_default_to_localhost_8080_when_unset() {
        // Arrange
        let lookup = |_: &str| None;

        // Act
        let config = ServerConfig::from_lookup(lookup);

        // Assert
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_prefer_values_from_environment() {
        // Arrange
        let lookup = |key: &str| match key {
            "SERVICE_PORT" => Some("9090".to_string()),
            _ => None,
        };

        // Act
        let config = ServerConfig::from_lookup(lookup);

        // Assert
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    }
}
