use crate::config::toml_config::ClientConfig;
use crate::domain::model::Position;
use crate::utils::error::{HereError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "here-search")]
#[command(about = "Query the HERE Search API from the command line")]
pub struct CliConfig {
    #[arg(long, env = "HERE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, help = "Response language, e.g. en-US")]
    pub lang: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Send every request to {base-url}/v1/{method}")]
    pub base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Free-form search for places around a position
    Discover {
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        at: Position,
        #[arg(long, default_value = "20")]
        limit: u32,
        #[arg(long)]
        query: String,
        #[arg(long = "in", help = "Area filter, e.g. countryCode:USA")]
        in_filter: String,
    },
    /// Resolve an address or place name to coordinates
    Geocode { query: String },
    /// Completions for partially typed input
    Autosuggest {
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        at: Position,
        #[arg(long, default_value = "5")]
        limit: u32,
        #[arg(long)]
        query: String,
    },
    /// Places around a position, optionally filtered by category
    Browse {
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        at: Position,
        #[arg(long, default_value = "20")]
        limit: u32,
        #[arg(long, value_delimiter = ',')]
        categories: Vec<String>,
    },
    /// Fetch one item by its HERE id
    Lookup { id: String },
    /// Addresses and places at a position
    ReverseGeocode {
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        at: Position,
    },
}

impl CliConfig {
    /// Merges the optional config file with flags; flags win.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::new(String::new()),
        };

        if let Some(key) = &self.api_key {
            config.client.api_key = key.clone();
        }
        if let Some(lang) = &self.lang {
            config.client.language = Some(lang.clone());
        }
        if let Some(base) = &self.base_url {
            config.endpoints.base_url = Some(base.clone());
        }

        Ok(config)
    }
}

/// Parses `lat,lng`.
pub fn parse_position(value: &str) -> Result<Position> {
    let invalid = |reason: &str| HereError::InvalidArgument {
        field: "position".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| invalid("expected LAT,LNG"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| invalid("latitude is not a number"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| invalid("longitude is not a number"))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(invalid("latitude must be within -90..=90"));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(invalid("longitude must be within -180..=180"));
    }

    Ok(Position::new(lat, lng))
}
