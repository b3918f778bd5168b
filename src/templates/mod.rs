//! Built-in page templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off; every value
//! that reaches the output goes through the `escape_html` filter instead, so
//! URLs keep their slashes.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::html_escape;

/// Template renderer with the embedded default theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("index.html", include_str!("default/index.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("default/partials/head.html"),
            ),
            (
                "partials/post_card.html",
                include_str!("default/partials/post_card.html"),
            ),
        ])?;

        tera.register_filter("escape_html", escape_html_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape HTML special characters (leaves `/` alone)
fn escape_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_html", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadData {
    pub title: String,
    pub description: String,
    pub favicon: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardData {
    pub key: String,
    pub url: String,
    pub title: String,
    pub description: String,
}
