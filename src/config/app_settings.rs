use serde::Deserialize;

use super::traits::Env;

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub http_host: String,
    pub http_port: u16,
    pub ai_config_path: String,
    pub auth_secret: String,
    pub auth_issuer: String,
    pub auth_audience: String,
}

impl Env for AppSettings {
    fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("http_host", "0.0.0.0")?
            .set_default("http_port", 8080)?
            .set_default("ai_config_path", "ai_config.json")?
            .set_default("auth_issuer", "prompt-gate")?
            .set_default("auth_audience", "dashboard")?
            .add_source(config::Environment::default())
            .build()?;

        settings.try_deserialize()
    }
}
