//! Content module - consumes the generated post collection

pub mod loader;
mod post;

pub use loader::{CollectionError, CollectionLoader};
pub use post::Post;
