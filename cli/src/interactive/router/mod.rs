//! Router module for managing page navigation and routing
//!
//! One route per menu entry, with history so the reader can step back
//! through the pages they visited.

pub mod integration;
pub mod route;
pub mod router;

// Re-export commonly used types
pub use route::{Route, RouteId};
pub use router::{Router, RouterConfig, RouterError, RouterResult, RouterState};

// Re-export UI integration
pub use integration::{
    PageContext, PageRenderer, RouterHandle, UIRouter, UIRouterBuildResult, UIRouterBuilder,
    UIRouterProps,
};
