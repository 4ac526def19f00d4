use std::{fs::read_to_string, path::Path};

use anyhow::anyhow;
use serde::Deserialize;

use crate::{
    handler::HandlerOptions,
    sheet::{
        coordinates::CoordinateMode,
        fetch::{HttpCellFeedSource, DEFAULT_FEED_URL_TEMPLATE, DEFAULT_USER_AGENT},
    },
};

/// YAML configuration. Every field is optional.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub cors: bool,
    pub coordinate_mode: CoordinateMode,
    /// Cell feed URL, `{id}` is replaced with the spreadsheet id.
    pub feed_url_template: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            cors: true,
            coordinate_mode: CoordinateMode::default(),
            feed_url_template: DEFAULT_FEED_URL_TEMPLATE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(contents)?;
        if !config.feed_url_template.contains("{id}") {
            return Err(anyhow!(
                "feed_url_template '{}' has no {{id}} placeholder",
                config.feed_url_template
            ));
        }
        Ok(config)
    }

    pub fn handler_options(&self) -> HandlerOptions {
        HandlerOptions {
            cors: self.cors,
            coordinate_mode: self.coordinate_mode,
        }
    }

    pub fn feed_source(&self) -> HttpCellFeedSource {
        HttpCellFeedSource {
            url_template: self.feed_url_template.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Load the config file if one is given, otherwise use the defaults.
pub fn load_config(config_filepath: Option<&Path>) -> anyhow::Result<Config> {
    match config_filepath {
        Some(config_filepath) => {
            if !config_filepath.exists() {
                return Err(anyhow!("Config file {:?} not found", config_filepath));
            }
            log::info!("Reading config from {:?}", config_filepath);
            Config::from_yaml(&read_to_string(config_filepath)?)
        }
        None => Ok(Config::default()),
    }
}
