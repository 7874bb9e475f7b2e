//! # folio Core
//!
//! Core library for folio - an academic research portfolio.
//!
//! This library holds everything that does not depend on a display: the
//! portfolio content, page documents built from it, the menu dispatch, the
//! decorative field plot, chart series, image lookup and the contact form
//! stub. Front-ends turn a [`page::Page`] into something visible.

// Core modules
pub mod assets;
pub mod chart;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod field;
pub mod page;

// Re-export commonly used types
pub use assets::{AssetResolver, ImageSlot};
pub use config::{Layout, SidebarState, SiteConfig};
pub use content::PortfolioContent;
pub use error::{AssetError, ContentError, Error, Result};
pub use page::{route, route_label, MenuItem, Page, PageSource, Portfolio};
