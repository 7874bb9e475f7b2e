//! Page builders and menu dispatch
//!
//! Each menu entry maps to exactly one builder. Builders are pure apart
//! from best-effort image lookups, and return a fresh [`Page`] each call.

pub mod achievements;
pub mod contact;
pub mod document;
pub mod home;
pub mod interests;
pub mod projects;

pub use document::{Block, Bullet, Card, Column, Page};

use crate::assets::AssetResolver;
use crate::config::SiteConfig;
use crate::content::PortfolioContent;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Entries of the navigation menu. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuItem {
    #[default]
    Home,
    Achievements,
    Interests,
    Projects,
    Contact,
}

impl MenuItem {
    /// All entries in menu order
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Home,
        MenuItem::Achievements,
        MenuItem::Interests,
        MenuItem::Projects,
        MenuItem::Contact,
    ];

    /// Label shown in the menu
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Home => "Home",
            MenuItem::Achievements => "Achievements",
            MenuItem::Interests => "Interests",
            MenuItem::Projects => "Projects",
            MenuItem::Contact => "Contact",
        }
    }

    /// Entry for an exact menu label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.label() == label)
    }

    /// Position in the menu
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|item| item == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a page name outside the menu
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown page '{0}' (expected one of: home, achievements, interests, projects, contact)")]
pub struct UnknownPage(pub String);

impl FromStr for MenuItem {
    type Err = UnknownPage;

    /// Case-insensitive, for command-line use
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|item| item.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// One builder per menu entry
pub trait PageSource {
    fn home(&self) -> Page;
    fn achievements(&self) -> Page;
    fn interests(&self) -> Page;
    fn projects(&self) -> Page;
    fn contact(&self) -> Page;
}

/// Invoke exactly the builder for `item`
pub fn route<S: PageSource + ?Sized>(source: &S, item: MenuItem) -> Page {
    debug!(page = %item, "rendering page");
    match item {
        MenuItem::Home => source.home(),
        MenuItem::Achievements => source.achievements(),
        MenuItem::Interests => source.interests(),
        MenuItem::Projects => source.projects(),
        MenuItem::Contact => source.contact(),
    }
}

/// Dispatch on a raw menu label; an unrecognized label renders nothing
pub fn route_label<S: PageSource + ?Sized>(source: &S, label: &str) -> Option<Page> {
    MenuItem::from_label(label).map(|item| route(source, item))
}

/// Content plus the place its images live
#[derive(Debug, Clone)]
pub struct Portfolio {
    content: PortfolioContent,
    assets: AssetResolver,
}

impl Portfolio {
    pub fn new(content: PortfolioContent, assets: AssetResolver) -> Self {
        Self { content, assets }
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn site(&self) -> &SiteConfig {
        &self.content.site
    }

    pub fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    /// Build the page for a menu entry
    pub fn render(&self, item: MenuItem) -> Page {
        route(self, item)
    }
}

impl PageSource for Portfolio {
    fn home(&self) -> Page {
        home::build(&self.content, &self.assets)
    }

    fn achievements(&self) -> Page {
        achievements::build(&self.content)
    }

    fn interests(&self) -> Page {
        interests::build(&self.content, &self.assets)
    }

    fn projects(&self) -> Page {
        projects::build(&self.content, &self.assets)
    }

    fn contact(&self) -> Page {
        contact::build(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records which builders ran
    #[derive(Default)]
    struct RecordingSource {
        calls: RefCell<Vec<MenuItem>>,
    }

    impl RecordingSource {
        fn record(&self, item: MenuItem) -> Page {
            self.calls.borrow_mut().push(item);
            Page::new(item, Vec::new())
        }
    }

    impl PageSource for RecordingSource {
        fn home(&self) -> Page {
            self.record(MenuItem::Home)
        }
        fn achievements(&self) -> Page {
            self.record(MenuItem::Achievements)
        }
        fn interests(&self) -> Page {
            self.record(MenuItem::Interests)
        }
        fn projects(&self) -> Page {
            self.record(MenuItem::Projects)
        }
        fn contact(&self) -> Page {
            self.record(MenuItem::Contact)
        }
    }

    #[test]
    fn test_each_label_runs_exactly_one_builder() {
        for item in MenuItem::ALL {
            let source = RecordingSource::default();
            let page = route_label(&source, item.label()).expect("menu label should route");
            assert_eq!(page.item, item);
            assert_eq!(*source.calls.borrow(), vec![item]);
        }
    }

    #[test]
    fn test_unknown_label_renders_nothing() {
        let source = RecordingSource::default();
        assert!(route_label(&source, "Blog").is_none());
        assert!(route_label(&source, "home").is_none());
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_menu_order_and_labels() {
        let labels: Vec<_> = MenuItem::ALL.iter().map(MenuItem::label).collect();
        assert_eq!(
            labels,
            vec!["Home", "Achievements", "Interests", "Projects", "Contact"]
        );
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            assert_eq!(item.index(), i);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("projects".parse::<MenuItem>(), Ok(MenuItem::Projects));
        assert_eq!(" CONTACT ".parse::<MenuItem>(), Ok(MenuItem::Contact));
        assert_eq!(
            "blog".parse::<MenuItem>(),
            Err(UnknownPage("blog".to_string()))
        );
    }

    #[test]
    fn test_portfolio_renders_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let portfolio = Portfolio::new(PortfolioContent::default(), AssetResolver::new(dir.path()));
        for item in MenuItem::ALL {
            let page = portfolio.render(item);
            assert_eq!(page.item, item);
            assert!(!page.blocks.is_empty());
        }
    }
}
