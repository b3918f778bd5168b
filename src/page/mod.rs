//! Post list page - renders the collection as a grid of link cards

use anyhow::Result;
use indexmap::IndexSet;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::url_for;
use crate::templates::{CardData, HeadData, TemplateRenderer};

/// Marker appended to every card heading
pub const ARROW_MARKER: &str = "→";

/// The post list page
///
/// Head metadata and heading text come from the site configuration and are
/// the same for every render; only the card grid depends on the posts.
pub struct PostListPage {
    renderer: TemplateRenderer,
    head: HeadData,
    heading: String,
}

impl PostListPage {
    /// Create the page for a site configuration
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let head = HeadData {
            title: config.title.clone(),
            description: config.description.clone(),
            favicon: url_for(config, &config.favicon),
            language: config.language.clone(),
        };

        Ok(Self {
            renderer: TemplateRenderer::new()?,
            head,
            heading: config.heading.clone(),
        })
    }

    /// Page head metadata
    pub fn head(&self) -> &HeadData {
        &self.head
    }

    /// Render the page with one card per post, in input order
    pub fn render(&self, posts: &[Post]) -> Result<String> {
        let cards = post_cards(posts);

        let mut context = Context::new();
        context.insert("head", &self.head);
        context.insert("heading", &self.heading);
        context.insert("cards", &cards);
        context.insert("arrow", ARROW_MARKER);

        self.renderer.render("index.html", &context)
    }
}

/// Build the card for each post, keyed by [`card_keys`]
pub fn post_cards(posts: &[Post]) -> Vec<CardData> {
    posts
        .iter()
        .zip(card_keys(posts))
        .map(|(post, key)| CardData {
            key,
            url: post.url.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
        })
        .collect()
}

/// Stable identity for each card
///
/// Keys are the post URLs when every URL in the sequence is distinct, and the
/// position in the sequence otherwise.
pub fn card_keys(posts: &[Post]) -> Vec<String> {
    let urls: IndexSet<&str> = posts.iter().map(|p| p.url.as_str()).collect();

    if urls.len() == posts.len() {
        urls.into_iter().map(str::to_string).collect()
    } else {
        tracing::debug!("Duplicate post URLs, keying cards by position");
        (0..posts.len()).map(|i| i.to_string()).collect()
    }
}
