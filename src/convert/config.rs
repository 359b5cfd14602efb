use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub country: CountryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CountryConfig {
    /// ISO 3166-1 alpha-2 code
    pub code: Option<String>,
    /// Overrides the built-in country name
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    pub generator: Option<String>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
