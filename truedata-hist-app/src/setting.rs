use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct Setting {
    // Credentials come from the environment (TD_USERNAME, TD_PASSWORD,
    // TD_APP_KEY), never from a checked-in file.
    pub username: String,
    pub password: String,
    pub app_key: String,

    pub host: String,
    pub port: u16,
    pub heartbeat_secs: u64,

    pub symbol: String,
    pub timeframe: String,
    // IST wall-clock bounds, "YYYY-MM-DD HH:MM:SS", inclusive.
    pub from_local: String,
    pub to_local: String,
}

impl Setting {
    pub fn try_new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("dev".to_string());

        let config = Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default.toml"))
            // Add in the current environment file, optional
            .add_source(File::with_name(&format!("config/{}.toml", run_mode)).required(false))
            // Add in a local configuration file, not checked in to git
            .add_source(File::with_name("config/local.toml").required(false))
            // Add in settings from the environment (with a prefix of TD)
            .add_source(Environment::with_prefix("td"))
            .build()?;

        config.try_deserialize()
    }
}
