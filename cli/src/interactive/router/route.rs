//! Route definitions and utilities
//!
//! Routes are the UI-side view of the menu: one per [`MenuItem`], keyed by
//! a string id so renderers can be looked up by name.

use folio_core::MenuItem;
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(pub String);

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<MenuItem> for RouteId {
    fn from(item: MenuItem) -> Self {
        Self(item.label().to_ascii_lowercase())
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Route definition: a menu entry and its display name
#[derive(Debug, Clone)]
pub struct Route {
    /// Unique identifier for this route
    pub id: RouteId,
    /// Menu entry this route shows
    pub item: MenuItem,
    /// Name shown in the sidebar
    pub name: String,
}

impl Route {
    /// Route for a menu entry, named by its label
    pub fn new(item: MenuItem) -> Self {
        Self {
            id: item.into(),
            item,
            name: item.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_for_menu_item() {
        let route = Route::new(MenuItem::Achievements);
        assert_eq!(route.id, RouteId::from("achievements"));
        assert_eq!(route.name, "Achievements");
    }

    #[test]
    fn test_route_id_traits() {
        let route_id = RouteId::from("test");

        assert_eq!(format!("{}", route_id), "test");

        let s: &str = route_id.as_ref();
        assert_eq!(s, "test");

        let s: &str = route_id.borrow();
        assert_eq!(s, "test");
    }
}
