//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! state management, navigation, and route resolution.

use super::route::{Route, RouteId};
use folio_core::MenuItem;

/// History entries kept for going back
pub const MAX_HISTORY: usize = 50;

/// Structured error type for router operations
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    #[error("Initial route '{0}' not found in configuration")]
    InitialRouteMissing(String),
}

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// Current state of the router
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Currently active route ID
    pub current_route: RouteId,
    /// Navigation history (most recent first)
    pub history: Vec<RouteId>,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl RouterState {
    pub fn new(initial_route: RouteId) -> Self {
        Self {
            current_route: initial_route,
            history: Vec::new(),
            max_history: MAX_HISTORY,
        }
    }

    /// Navigate to a new route, remembering the previous one
    pub fn navigate_to(&mut self, route_id: RouteId) {
        if self.current_route != route_id {
            self.history.insert(0, self.current_route.clone());
            self.history.truncate(self.max_history);
        }

        self.current_route = route_id;
    }

    /// Go back to the previous route in history
    pub fn go_back(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.current_route = self.history.remove(0);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn current_route(&self) -> &RouteId {
        &self.current_route
    }

    pub fn history(&self) -> &[RouteId] {
        &self.history
    }
}

/// Configuration for the router
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Available routes in menu order
    pub routes: Vec<Route>,
    /// Route shown first
    pub default_route: Option<RouteId>,
}

impl RouterConfig {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            default_route: None,
        }
    }

    /// One route per menu entry, in menu order
    pub fn menu() -> Self {
        MenuItem::ALL
            .into_iter()
            .fold(Self::new(), |config, item| config.add_route(Route::new(item)))
    }

    /// Add a route; a route with an existing id replaces it in place
    pub fn add_route(mut self, route: Route) -> Self {
        match self.routes.iter_mut().find(|r| r.id == route.id) {
            Some(existing) => *existing = route,
            None => self.routes.push(route),
        }
        self
    }

    pub fn with_default_route(mut self, route_id: RouteId) -> Self {
        self.default_route = Some(route_id);
        self
    }

    pub fn get_route(&self, route_id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| &r.id == route_id)
    }

    pub fn default_route(&self) -> Option<&RouteId> {
        self.default_route.as_ref()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation state plus the routes it may visit
#[derive(Debug, Clone)]
pub struct Router {
    config: RouterConfig,
    state: RouterState,
}

impl Router {
    /// Create a router; the default route, or else the first one, is shown first
    pub fn new(config: RouterConfig) -> RouterResult<Self> {
        let initial_route = match (config.default_route(), config.routes().first()) {
            (Some(id), _) => id.clone(),
            (None, Some(route)) => route.id.clone(),
            (None, None) => return Err(RouterError::NoRoutes),
        };

        if config.get_route(&initial_route).is_none() {
            return Err(RouterError::InitialRouteMissing(initial_route.0));
        }

        let state = RouterState::new(initial_route);
        Ok(Self { config, state })
    }

    /// Router over the full menu starting at `initial`
    pub fn for_menu(initial: MenuItem) -> Self {
        Self {
            config: RouterConfig::menu(),
            state: RouterState::new(initial.into()),
        }
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Navigate to a route by ID
    pub fn navigate(&mut self, id: impl Into<RouteId>) -> RouterResult<()> {
        let route_id = id.into();
        if self.config.get_route(&route_id).is_none() {
            return Err(RouterError::RouteNotFound(route_id.0));
        }

        self.state.navigate_to(route_id);
        Ok(())
    }

    pub fn go_back(&mut self) -> bool {
        self.state.go_back()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.config.get_route(self.state.current_route())
    }

    pub fn current_route_id(&self) -> &RouteId {
        self.state.current_route()
    }

    /// Menu entry of the current route
    pub fn current_item(&self) -> Option<MenuItem> {
        self.current_route().map(|route| route.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_rejected() {
        assert!(matches!(
            Router::new(RouterConfig::new()),
            Err(RouterError::NoRoutes)
        ));
    }

    #[test]
    fn test_missing_default_is_rejected() {
        let config = RouterConfig::menu().with_default_route("blog".into());
        assert!(matches!(
            Router::new(config),
            Err(RouterError::InitialRouteMissing(id)) if id == "blog"
        ));
    }

    #[test]
    fn test_first_route_is_initial_without_default() {
        let router = Router::new(RouterConfig::menu()).unwrap();
        assert_eq!(router.current_item(), Some(MenuItem::Home));
    }

    #[test]
    fn test_navigation_and_history() {
        let mut router = Router::for_menu(MenuItem::Home);
        assert!(!router.can_go_back());

        router.navigate(MenuItem::Projects).unwrap();
        router.navigate(MenuItem::Contact).unwrap();
        assert_eq!(router.current_item(), Some(MenuItem::Contact));
        assert_eq!(
            router.state().history(),
            &[RouteId::from(MenuItem::Projects), RouteId::from(MenuItem::Home)]
        );

        assert!(router.go_back());
        assert_eq!(router.current_item(), Some(MenuItem::Projects));
        assert!(router.go_back());
        assert!(!router.go_back());
        assert_eq!(router.current_item(), Some(MenuItem::Home));
    }

    #[test]
    fn test_same_route_is_not_recorded() {
        let mut router = Router::for_menu(MenuItem::Interests);
        router.navigate(MenuItem::Interests).unwrap();
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_unknown_route_leaves_state_untouched() {
        let mut router = Router::for_menu(MenuItem::Home);
        let err = router.navigate("blog").unwrap_err();
        assert_eq!(err.to_string(), "Route 'blog' not found");
        assert_eq!(router.current_item(), Some(MenuItem::Home));
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut state = RouterState {
            max_history: 2,
            ..RouterState::new(MenuItem::Home.into())
        };
        for item in MenuItem::ALL {
            state.navigate_to(item.into());
        }
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current_route(), &RouteId::from(MenuItem::Contact));

        let mut router = Router::for_menu(MenuItem::Home);
        for _ in 0..MAX_HISTORY {
            router.navigate(MenuItem::Projects).unwrap();
            router.navigate(MenuItem::Home).unwrap();
        }
        assert_eq!(router.state().history().len(), MAX_HISTORY);
    }

    #[test]
    fn test_menu_routes_keep_menu_order() {
        let config = RouterConfig::menu();
        let items: Vec<_> = config.routes().iter().map(|r| r.item).collect();
        assert_eq!(items, MenuItem::ALL.to_vec());
    }
}
