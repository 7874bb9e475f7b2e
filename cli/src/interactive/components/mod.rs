//! UI components for interactive mode

pub mod charts;
pub mod contact_form;
pub mod heatmap;
pub mod image;
pub mod sidebar;
pub mod top_bar;

pub use contact_form::ContactFormView;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
