//! Content configuration for the CLI

pub mod loader;

pub use loader::{ContentLoader, ContentSource, LoadedContent};
