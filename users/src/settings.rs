use anyhow::Result;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::sqlite;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub sqlite: sqlite::Settings,
}

impl Settings {
    /// Reads `.env`, then `config/default.{toml,json,json5}` if present, then
    /// `USERS__*` environment variables, later sources winning.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("USERS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_config(builder)
    }

    pub fn from_config(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
