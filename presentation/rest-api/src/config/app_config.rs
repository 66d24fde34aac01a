use super::{
    admin_config::AdminConfig, cors_config, error::ConfigError, server_config::ServerConfig,
    session_config::SessionConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub session: SessionConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            session: SessionConfig::from_env()?,
            admin: AdminConfig::from_env(),
        })
    }
}
