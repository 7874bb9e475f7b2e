//! CLI command implementations

pub mod interactive;
pub mod render;

pub use interactive::interactive_command;
pub use render::render_command;
