use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    pub ai: AiSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AiSettings {
    /// Enable/disable the external description service. When disabled the
    /// offline template connector is used instead.
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// API key for the description service (from env: AI_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?;

    let mut config: Settings = settings.try_deserialize()?;

    // Secrets only come from the environment, never from the file
    config.ai.api_key = std::env::var("AI_API_KEY").ok();

    Ok(config)
}
