//! Application configuration.
//!
//! The agent, user and room identifiers are fixed configuration values,
//! not session state; they are read once at startup and handed to the
//! HTTP client explicitly.

use crate::theme::ThemeVariant;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;

const DEFAULT_AGENT_ID: &str = "e0e10e6f-ff2b-0d4c-8011-1fc1eee7cb32";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
    /// Base URL of the agent server, scheme included.
    pub base_url: String,
    pub agent_id: String,
    pub user_id: String,
    pub room_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            base_url: "http://localhost:3000".to_string(),
            agent_id: DEFAULT_AGENT_ID.to_string(),
            user_id: "user".to_string(),
            room_id: format!("default-room-{DEFAULT_AGENT_ID}"),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // This will create a default config if it doesn't exist
        let config_path = "config.toml";
        let figment = Figment::new().merge(Toml::file(config_path));

        match figment.extract() {
            Ok(settings) => Ok(settings),
            Err(_) => {
                let default_settings = Settings::default();
                default_settings.save().unwrap_or_default();
                Ok(default_settings)
            }
        }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write("config.toml", toml_string)
    }
}
