use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE_NAME: &str = "prnotifier.yaml";

const DEFAULT_API_URL: &str = "https://api.github.com";
const POLL_DEFAULT_MAX_ATTEMPTS: u32 = 5;
const POLL_DEFAULT_DELAY_SECS: u64 = 30;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub repository: RepositoryConfig,
    pub target_label: String,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub poll: PollConfig,
    pub artifacts_dir: Option<PathBuf>,
}

impl Config {
    pub async fn load() -> Result<Config> {
        Config::load_from(DEFAULT_CONFIG_FILE_NAME).await
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let config_string = tokio::fs::read_to_string(path).await?;

        let config = serde_yaml::from_str::<Config>(&config_string)?;

        Ok(config)
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(default = "PollConfig::default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "PollConfig::default_delay_secs")]
    pub delay_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            max_attempts: PollConfig::default_max_attempts(),
            delay_secs: PollConfig::default_delay_secs(),
        }
    }
}

impl PollConfig {
    fn default_max_attempts() -> u32 {
        POLL_DEFAULT_MAX_ATTEMPTS
    }

    fn default_delay_secs() -> u64 {
        POLL_DEFAULT_DELAY_SECS
    }
}
