use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

const ENV_CONFIG_PATH: &str = "BAILCHECK_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_API_KEY: &str = "OPENAI_API_KEY";
const ENV_MODEL: &str = "LLM_MODEL";
const ENV_TIMEOUT_SECS: &str = "LLM_TIMEOUT_SECS";

/// Default model for extraction and drafting
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default upper bound for a single provider call
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Overrides the built-in statute catalogue as the set of recognized sections.
    #[serde(default)]
    pub reference_sections: Option<Vec<String>>,
    /// Appends a known-bad citation to every generated draft (demo only).
    #[serde(default)]
    pub inject_hallucination: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    /// Provider API key. Not validated here; a bad key surfaces on the first call.
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub reference_sections: Option<Vec<String>>,
    pub inject_hallucination: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            reference_sections: None,
            inject_hallucination: false,
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("{} is not set, provider calls will fail", ENV_API_KEY);
        }

        let model = std::env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let env_timeout = std::env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|t| t.parse().ok());

        // Load config file
        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self::merge(port, host, api_key, model, env_timeout, file)
    }

    /// Environment wins over the file for the timeout; everything else file-only.
    fn merge(
        port: u16,
        host: String,
        api_key: String,
        model: String,
        env_timeout: Option<u64>,
        file: ConfigFile,
    ) -> Self {
        let timeout_secs = env_timeout
            .or(file.timeout_secs)
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            port,
            host,
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
            reference_sections: file.reference_sections,
            inject_hallucination: file.inject_hallucination,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config_file(path, &contents),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config_file(path: &Path, contents: &str) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str(contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
