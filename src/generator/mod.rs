//! Generator module - writes the rendered page and static assets

use anyhow::Result;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::content::Post;
use crate::page::PostListPage;
use crate::Site;

/// Static output generator
pub struct Generator {
    site: Site,
    page: PostListPage,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let page = PostListPage::new(&site.config)?;

        Ok(Self {
            site: site.clone(),
            page,
        })
    }

    /// Render the page without writing anything
    pub fn render(&self, posts: &[Post]) -> Result<String> {
        self.page.render(posts)
    }

    /// Generate the output directory
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.site.out_dir)?;

        self.copy_static_assets()?;

        let html = self.page.render(posts)?;
        let output_path = self.site.out_dir.join("index.html");
        fs::write(&output_path, html)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;

        tracing::info!("Generated {:?} with {} cards", output_path, posts.len());

        Ok(())
    }

    /// Copy static assets (favicon, images, etc.) to the output directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            tracing::debug!("No static directory at {:?}", static_dir);
            return Ok(());
        }

        let mut copied = 0;

        for entry in WalkDir::new(static_dir).follow_links(true) {
            let entry = entry
                .map_err(|e| anyhow::anyhow!("Failed to scan {:?}: {}", static_dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            if is_hidden(relative) {
                continue;
            }

            let dest = self.site.out_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);

        Ok(())
    }
}

/// Check if any component of a relative path is a dotfile
fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
    })
}
