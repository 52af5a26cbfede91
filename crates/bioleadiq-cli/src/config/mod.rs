//! Configuration loading for BioLeadIQ.
//! Reads bioleadiq.toml from the current directory, the path in BIOLEADIQ_CONFIG,
//! or the path given with --config. Every section is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use bioleadiq_common::intent_config::{default_keywords, ESEARCH_URL, DEFAULT_TIMEOUT_SECS};
use bioleadiq_common::IntentConfig;
use bioleadiq_ranker::WeightVector;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "BIOLEADIQ_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "bioleadiq.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub intent: IntentSettings,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_linkedin_path")]
    pub linkedin: PathBuf,
    #[serde(default = "default_funding_path")]
    pub funding: PathBuf,
    #[serde(default = "default_out_csv")]
    pub out_csv: PathBuf,
}

fn default_linkedin_path() -> PathBuf { PathBuf::from("data/linkedin_profiles.csv") }
fn default_funding_path()  -> PathBuf { PathBuf::from("data/funding_data.json") }
fn default_out_csv()       -> PathBuf { PathBuf::from("output.csv") }

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            linkedin: default_linkedin_path(),
            funding: default_funding_path(),
            out_csv: default_out_csv(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentSettings {
    #[serde(default)]
    pub live: bool,
    /// Prefer NCBI_API_KEY in the environment over storing the key here.
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub allowed_hosts: Vec<String>,
}

fn default_endpoint()     -> String { ESEARCH_URL.to_string() }
fn default_timeout_secs() -> u64    { DEFAULT_TIMEOUT_SECS }

impl Default for IntentSettings {
    fn default() -> Self {
        Self {
            live: false,
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            keywords: default_keywords(),
            allowed_hosts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: WeightVector,
}


impl Config {
    /// Load configuration. An explicit or BIOLEADIQ_CONFIG path must exist;
    /// a missing default bioleadiq.toml falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let path = match requested {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.scoring.weights.validate() {
            anyhow::bail!(
                "scoring.weights must be non-negative and sum to 100 (got {:?})",
                self.scoring.weights.as_array()
            );
        }
        if self.intent.timeout_secs == 0 {
            anyhow::bail!("intent.timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Build the intent-stage configuration: file values, then environment overrides.
    pub fn intent_config<F>(&self, env: F) -> IntentConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        IntentConfig {
            live_lookup: self.intent.live,
            api_key: self.intent.api_key.clone().map(SecretString::from),
            endpoint: self.intent.endpoint.clone(),
            timeout: Duration::from_secs(self.intent.timeout_secs),
            keywords: self.intent.keywords.clone(),
            allowed_hosts: self.intent.allowed_hosts.clone(),
        }
        .with_env_overrides(env)
    }
}
