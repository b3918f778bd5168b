//! postgrid: render a generated content collection as a page of post cards
//!
//! The collection (an ordered list of posts produced by an external content
//! tool) is loaded as-is and rendered through embedded Tera templates into a
//! single static `index.html`.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod page;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Generated collection (file or directory)
    pub collection_path: PathBuf,
    /// Static assets directory
    pub static_dir: PathBuf,
    /// Output directory
    pub out_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let collection_path = base_dir.join(&config.collection);
        let static_dir = base_dir.join(&config.static_dir);
        let out_dir = base_dir.join(&config.out_dir);

        Self {
            config,
            base_dir,
            collection_path,
            static_dir,
            out_dir,
        }
    }

    /// Build the static page
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
