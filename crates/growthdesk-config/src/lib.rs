use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notion_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub substack_feed_url: String,
    pub databases: Databases,
}

/// Workspace database ids, one per dashboard section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Databases {
    pub experiments: Option<String>,
    pub reviews: Option<String>,
    pub newsletter: Option<String>,
    pub knowledge: Option<String>,
    pub tools: Option<String>,
    pub prompts: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            notion_api_key: None,
            gemini_api_key: None,
            substack_feed_url: "https://ellen1889.substack.com/feed".to_string(),
            databases: Databases::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/growthdesk");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Environment variables override file values, using the names the
    /// hosted deployment already uses.
    pub fn with_env_overrides(mut self) -> Config {
        if let Ok(key) = env::var("NOTION_API_KEY") {
            self.notion_api_key = Some(key);
        }
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(key);
        }
        if let Ok(url) = env::var("SUBSTACK_FEED_URL") {
            self.substack_feed_url = url;
        }

        let overrides = [
            ("NOTION_DATABASE_ID_EXPERIMENTS", &mut self.databases.experiments),
            ("NOTION_DATABASE_ID_REVIEWS", &mut self.databases.reviews),
            ("NOTION_DATABASE_ID_NEWSLETTER", &mut self.databases.newsletter),
            ("NOTION_DATABASE_ID_KNOWLEDGE", &mut self.databases.knowledge),
            ("NOTION_DATABASE_ID_TOOLS", &mut self.databases.tools),
            ("NOTION_DATABASE_ID_PROMPTS", &mut self.databases.prompts),
        ];
        for (name, slot) in overrides {
            if let Ok(value) = env::var(name) {
                *slot = Some(value);
            }
        }

        self
    }
}
