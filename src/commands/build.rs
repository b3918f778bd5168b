//! Build the static page

use anyhow::{Context, Result};

use crate::content::{CollectionLoader, Post};
use crate::generator::Generator;
use crate::Site;

/// Load the collection and write the output directory
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = load_posts(site)?;
    let generator = Generator::new(site)?;
    generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Built in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Load the collection and render the page to a string
pub fn render(site: &Site) -> Result<String> {
    let posts = load_posts(site)?;
    Generator::new(site)?.render(&posts)
}

fn load_posts(site: &Site) -> Result<Vec<Post>> {
    let loader = CollectionLoader::new(site);
    let posts = loader
        .load_posts()
        .with_context(|| format!("Failed to load collection {:?}", loader.path()))?;

    tracing::info!("Loaded {} posts", posts.len());

    Ok(posts)
}
