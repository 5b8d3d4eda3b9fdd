use super::server_config::ServerConfig;

pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
        }
    }
}
