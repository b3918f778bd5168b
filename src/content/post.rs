//! Post model

use serde::{Deserialize, Serialize};

/// A content entry from the generated collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Link target for the card
    pub url: String,

    /// Display heading
    pub title: String,

    /// Display subtext, empty when the document has none
    #[serde(default)]
    pub description: String,
}

impl Post {
    /// Create a new post
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}
