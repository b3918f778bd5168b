//! Collection loader - reads the post collection generated by the content tool

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::Post;
use crate::Site;

/// Name of the index file the content tool writes next to each document
const INDEX_FILE: &str = "_index.json";

/// Collection loading errors
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Collection not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan collection: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads posts from a generated collection
///
/// The collection is either a JSON array file, a directory holding an
/// `_index.json` array, or a directory of one-document JSON files. Order is
/// taken as-is from the collection; nothing is sorted or filtered here.
pub struct CollectionLoader {
    path: PathBuf,
}

impl CollectionLoader {
    /// Create a loader for the collection configured for a site
    pub fn new(site: &Site) -> Self {
        Self::with_path(site.collection_path.clone())
    }

    /// Create a loader for an explicit collection path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the collection
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all posts, in collection order
    pub fn load_posts(&self) -> Result<Vec<Post>, CollectionError> {
        if self.path.is_file() {
            return load_index(&self.path);
        }

        if !self.path.is_dir() {
            return Err(CollectionError::NotFound(self.path.clone()));
        }

        let index = self.path.join(INDEX_FILE);
        if index.is_file() {
            return load_index(&index);
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !is_document_file(path) {
                continue;
            }
            posts.push(load_document(path)?);
        }

        tracing::debug!("Loaded {} documents from {:?}", posts.len(), self.path);

        Ok(posts)
    }
}

/// Load a JSON array of documents
fn load_index(path: &Path) -> Result<Vec<Post>, CollectionError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| CollectionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a single JSON document
fn load_document(path: &Path) -> Result<Post, CollectionError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| CollectionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, CollectionError> {
    fs::read_to_string(path).map_err(|source| CollectionError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Check if a file is a generated document (`*.json`, not `_`-prefixed)
fn is_document_file(path: &Path) -> bool {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "json")
        .unwrap_or(false);
    let is_private = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('_'))
        .unwrap_or(true);

    is_json && !is_private
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_index_file_keeps_order() {
        let dir = TempDir::new().unwrap();
        let index = dir.path().join("posts.json");
        fs::write(
            &index,
            r#"[
                {"url": "/z", "title": "Zeta", "description": "last letter"},
                {"url": "/a", "title": "Alpha", "description": ""},
                {"url": "/z", "title": "Zeta again"}
            ]"#,
        )
        .unwrap();

        let posts = CollectionLoader::with_path(&index).load_posts().unwrap();
        let urls: Vec<_> = posts.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["/z", "/a", "/z"]);
        assert_eq!(posts[2].description, "");
    }

    #[test]
    fn test_load_directory_with_index() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(INDEX_FILE),
            r#"[{"url": "/a", "title": "Hello", "description": "World"}]"#,
        )
        .unwrap();
        // Ignored when an index is present
        fs::write(
            dir.path().join("posts__b.md.json"),
            r#"{"url": "/b", "title": "B"}"#,
        )
        .unwrap();

        let posts = CollectionLoader::with_path(dir.path()).load_posts().unwrap();
        assert_eq!(posts, vec![Post::new("/a", "Hello", "World")]);
    }

    #[test]
    fn test_load_directory_of_documents() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("posts__b.md.json"),
            r#"{"url": "/b", "title": "B"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("posts__a.md.json"),
            r#"{"url": "/a", "title": "A"}"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a document").unwrap();
        fs::write(dir.path().join("_meta.json"), r#"{"count": 2}"#).unwrap();

        let posts = CollectionLoader::with_path(dir.path()).load_posts().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_entry_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("posts__a.md.json"),
            r#"{"url": "/a", "title": "A"}"#,
        )
        .unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("missing.json"),
            dir.path().join("posts__b.md.json"),
        )
        .unwrap();

        let err = CollectionLoader::with_path(dir.path())
            .load_posts()
            .unwrap_err();
        assert!(matches!(err, CollectionError::Walk(_)));
    }

    #[test]
    fn test_empty_collection() {
        let dir = TempDir::new().unwrap();
        let index = dir.path().join("posts.json");
        fs::write(&index, "[]").unwrap();

        assert!(CollectionLoader::with_path(&index)
            .load_posts()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_missing_collection() {
        let dir = TempDir::new().unwrap();
        let err = CollectionLoader::with_path(dir.path().join("nope.json"))
            .load_posts()
            .unwrap_err();
        assert!(matches!(err, CollectionError::NotFound(_)));
    }

    #[test]
    fn test_malformed_collection() {
        let dir = TempDir::new().unwrap();
        let index = dir.path().join("posts.json");
        fs::write(&index, r#"[{"title": "no url"}]"#).unwrap();

        let err = CollectionLoader::with_path(&index).load_posts().unwrap_err();
        assert!(matches!(err, CollectionError::Parse { .. }));
        assert!(err.to_string().contains("posts.json"));
    }
}
