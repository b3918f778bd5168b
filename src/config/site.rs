//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Head
    pub title: String,
    pub description: String,
    pub favicon: String,
    pub language: String,

    // Page
    pub heading: String,

    // URL
    pub root: String,

    // Directory
    pub collection: String,
    pub static_dir: String,
    pub out_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Create Next App".to_string(),
            description: "Generated by create next app".to_string(),
            favicon: "/favicon.ico".to_string(),
            language: "en".to_string(),

            heading: "Welcome To Contentlayer".to_string(),

            root: "/".to_string(),

            collection: ".contentlayer/generated/Post/_index.json".to_string(),
            static_dir: "public".to_string(),
            out_dir: "out".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}
