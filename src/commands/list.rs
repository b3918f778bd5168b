//! List the posts of the collection

use anyhow::Result;

use crate::content::{CollectionLoader, Post};
use crate::Site;

/// Print every post in collection order
pub fn run(site: &Site) -> Result<()> {
    let posts = CollectionLoader::new(site).load_posts()?;

    for line in listing(&posts) {
        println!("{}", line);
    }

    Ok(())
}

/// Format the listing, one header line followed by one line per post
pub fn listing(posts: &[Post]) -> Vec<String> {
    let mut lines = Vec::with_capacity(posts.len() + 1);
    lines.push(format!("Posts ({}):", posts.len()));
    lines.extend(
        posts
            .iter()
            .map(|post| format!("  {} [{}]", post.title, post.url)),
    );
    lines
}
