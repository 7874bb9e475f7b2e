//! Presentation settings
//!
//! Pure display configuration: nothing here changes what a page contains.

use serde::{Deserialize, Serialize};

/// Content width policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Page content uses the full terminal width
    #[default]
    Wide,
    /// Page content is capped to a readable column
    Centered,
}

impl Layout {
    /// Maximum content width in columns, if any
    pub fn max_width(&self) -> Option<u16> {
        match self {
            Layout::Wide => None,
            Layout::Centered => Some(100),
        }
    }
}

/// Whether the navigation sidebar starts open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

/// Window-level presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in the top bar and as the terminal window title
    pub page_title: String,
    /// Icon displayed next to the title
    pub page_icon: String,
    pub layout: Layout,
    pub initial_sidebar: SidebarState,
    /// Sidebar heading
    pub menu_title: String,
    /// Caption above the page selection control
    pub menu_prompt: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: "Gildong Hong's Research Portfolio".to_string(),
            page_icon: "📡".to_string(),
            layout: Layout::Wide,
            initial_sidebar: SidebarState::Expanded,
            menu_title: "Menu".to_string(),
            menu_prompt: "Select page:".to_string(),
        }
    }
}

impl SiteConfig {
    /// Title with its icon, as shown in the top bar
    pub fn full_title(&self) -> String {
        if self.page_icon.is_empty() {
            self.page_title.clone()
        } else {
            format!("{} {}", self.page_icon, self.page_title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_wide_and_expanded() {
        let site = SiteConfig::default();
        assert_eq!(site.layout, Layout::Wide);
        assert_eq!(site.initial_sidebar, SidebarState::Expanded);
        assert!(site.layout.max_width().is_none());
    }

    #[test]
    fn test_partial_site_config() {
        let site: SiteConfig =
            serde_json::from_str(r#"{"layout": "centered", "page_icon": ""}"#).unwrap();
        assert_eq!(site.layout, Layout::Centered);
        assert_eq!(site.full_title(), site.page_title);
    }
}
