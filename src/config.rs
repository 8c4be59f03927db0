use crate::query::PAGE_SIZE_CHOICES;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Rows per page every list view starts with.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Support line shown on the dashboard and offered to SMS templates.
    #[serde(default = "default_support_number")]
    pub support_number: String,
}

fn default_page_size() -> usize {
    PAGE_SIZE_CHOICES[0]
}

fn default_support_number() -> String {
    "1700".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            support_number: default_support_number(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".care-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Page size sanitized against the offered choices.
    pub fn page_size(&self) -> usize {
        if PAGE_SIZE_CHOICES.contains(&self.default_page_size) {
            self.default_page_size
        } else {
            PAGE_SIZE_CHOICES[0]
        }
    }
}
