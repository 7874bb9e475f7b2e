//! UI framework integration for the router system
//!
//! Bridges the core router with iocraft components: a shareable handle for
//! navigation and a component that renders the page of the current route.

use super::{Route, RouteId, Router as CoreRouter, RouterConfig, RouterResult};
use folio_core::MenuItem;
use iocraft::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What a page needs to know about where it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageContext {
    /// Whether key events are routed to the page
    pub has_focus: bool,
    /// Columns available to the page body
    pub width: u16,
    /// Open every card
    pub expand_all: bool,
}

/// Type alias for page render functions
pub type PageRenderer = Box<dyn Fn(&PageContext) -> AnyElement<'static> + Send + Sync>;

/// A shareable, UI-friendly handle to control the router
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<CoreRouter>>);

impl RouterHandle {
    pub fn new(router: CoreRouter) -> Self {
        Self(Arc::new(Mutex::new(router)))
    }

    // A panic while holding the lock leaves the router itself consistent
    fn lock(&self) -> MutexGuard<'_, CoreRouter> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Navigate to a route
    pub fn navigate(&self, id: impl Into<RouteId>) -> RouterResult<()> {
        self.lock().navigate(id)
    }

    pub fn current_route_id(&self) -> RouteId {
        self.lock().current_route_id().clone()
    }

    /// Menu entry currently shown
    pub fn current_item(&self) -> Option<MenuItem> {
        self.lock().current_item()
    }

    /// Routes in menu order
    pub fn routes(&self) -> Vec<Route> {
        self.lock().config().routes().to_vec()
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().can_go_back()
    }

    pub fn go_back(&self) -> bool {
        self.lock().go_back()
    }
}

impl Default for RouterHandle {
    fn default() -> Self {
        Self::new(CoreRouter::for_menu(MenuItem::default()))
    }
}

/// UI router component properties
#[derive(Props, Default)]
pub struct UIRouterProps {
    /// Router handle for navigation control
    pub handle: RouterHandle,
    /// Route IDs mapped to their page renderers
    pub pages: Arc<HashMap<RouteId, PageRenderer>>,
    /// Passed through to the page renderer
    pub context: PageContext,
}

/// Renders the page of the current route; unknown routes render nothing
#[component]
pub fn UIRouter(props: &UIRouterProps) -> impl Into<AnyElement<'static>> {
    let current_route_id = props.handle.current_route_id();
    let page_element = props
        .pages
        .get(&current_route_id)
        .map(|renderer| renderer(&props.context));

    element! {
        View(
            key: format!("route-{}", current_route_id),
            flex_direction: FlexDirection::Column,
            width: 100pct,
        ) {
            #(page_element)
        }
    }
}

/// Builder for creating UI router configurations with pages
#[derive(Default)]
pub struct UIRouterBuilder {
    config: RouterConfig,
    pages: HashMap<RouteId, PageRenderer>,
}

impl UIRouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu route with its page renderer
    pub fn route<F>(mut self, item: MenuItem, page_renderer: F) -> Self
    where
        F: Fn(&PageContext) -> AnyElement<'static> + Send + Sync + 'static,
    {
        let route = Route::new(item);
        self.pages.insert(route.id.clone(), Box::new(page_renderer));
        self.config = self.config.add_route(route);
        self
    }

    /// Set the route shown first
    pub fn initial(mut self, item: MenuItem) -> Self {
        self.config = self.config.with_default_route(item.into());
        self
    }

    /// Build the UI router props with a handle
    pub fn build(self) -> RouterResult<UIRouterBuildResult> {
        let router = CoreRouter::new(self.config)?;
        let handle = RouterHandle::new(router);

        Ok(UIRouterBuildResult {
            handle,
            pages: Arc::new(self.pages),
        })
    }
}

/// Result of building a UI router
#[derive(Clone, Default)]
pub struct UIRouterBuildResult {
    /// Router handle for navigation control
    pub handle: RouterHandle,
    /// Page renderers keyed by route
    pub pages: Arc<HashMap<RouteId, PageRenderer>>,
}
