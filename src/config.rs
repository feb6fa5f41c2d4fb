use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub properties: PropertiesConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Target database id, recorded in the request's parent field.
    pub id: String,
}

/// Property names of the target database. These vary per database, so
/// they are configuration rather than constants.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PropertiesConfig {
    pub title: String,
    pub category: String,
    pub keywords: String,
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            title: "Topic".to_string(),
            category: "Category".to_string(),
            keywords: "Keywords".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
