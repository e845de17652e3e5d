//! Configuration handling for the RSVP client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default RSVP endpoint address
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080";

/// Environment variable overriding the endpoint address
const ENDPOINT_ENV: &str = "RSVP_ENDPOINT";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MESSAGE_TIMEOUT_SECS: u64 = 5;

const DEFAULT_FOOD: &[&str] = &["meat", "fish", "vegetarian"];
const DEFAULT_DRINKS: &[&str] = &["wine", "champagne", "whisky", "vodka", "non-alcoholic"];

/// User configuration for the client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RsvpConfig {
    /// Base URL of the RSVP endpoint
    pub endpoint_url: Option<String>,
    /// Timeout applied to every HTTP request
    pub request_timeout_secs: Option<u64>,
    /// How long a response message stays on screen
    pub message_timeout_secs: Option<u64>,
    /// Key for the map provider; without it venues show static cards
    pub map_api_key: Option<String>,
    /// Food options offered on the form
    pub food_options: Option<Vec<String>>,
    /// Drink options offered on the form
    pub drink_options: Option<Vec<String>>,
}

/// Food and drink options offered on the RSVP form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub food: Vec<String>,
    pub drinks: Vec<String>,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            food: DEFAULT_FOOD.iter().map(|s| s.to_string()).collect(),
            drinks: DEFAULT_DRINKS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RsvpConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "rsvp", "rsvp-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: RsvpConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint address, with the environment taking precedence over the file
    pub fn endpoint_url(&self) -> String {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint_url.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(
            self.message_timeout_secs
                .unwrap_or(DEFAULT_MESSAGE_TIMEOUT_SECS),
        )
    }

    /// Menu built from the configured options, falling back per list to the defaults
    pub fn menu(&self) -> Menu {
        let defaults = Menu::default();
        let pick = |configured: &Option<Vec<String>>, fallback: Vec<String>| match configured {
            Some(options) if !options.is_empty() => options.clone(),
            _ => fallback,
        };
        Menu {
            food: pick(&self.food_options, defaults.food),
            drinks: pick(&self.drink_options, defaults.drinks),
        }
    }
}
