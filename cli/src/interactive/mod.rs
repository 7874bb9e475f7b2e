//! Interactive terminal UI
//!
//! Everything iocraft-specific lives here; page content comes from
//! `folio_core` as render-agnostic documents.

pub mod app;
pub mod blocks;
pub mod components;
pub mod pages;
pub mod router;
pub mod text_utils;

pub use app::App;
