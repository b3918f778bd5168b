//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// Absolute URLs (`http://`, `https://`, `//`) are returned untouched.
///
/// # Examples
/// ```ignore
/// url_for(&config, "/favicon.ico") // -> "/blog/favicon.ico"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/blog/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/favicon.ico"), "/blog/favicon.ico");
        assert_eq!(url_for(&config, "img/icon.png"), "/blog/img/icon.png");
        assert_eq!(url_for(&config, ""), "/blog/");
    }

    #[test]
    fn test_url_for_default_root() {
        let config = SiteConfig::default();
        assert_eq!(url_for(&config, "/favicon.ico"), "/favicon.ico");
    }

    #[test]
    fn test_url_for_absolute() {
        let config = test_config();
        assert_eq!(
            url_for(&config, "https://cdn.example.com/icon.png"),
            "https://cdn.example.com/icon.png"
        );
    }
}
