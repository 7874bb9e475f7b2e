//! Full-screen portfolio browser
//!
//! A title bar, the menu sidebar and the page of the chosen entry. Keys go
//! either to the sidebar or to the page; Esc and Tab move between them.

use crate::interactive::components::sidebar::SIDEBAR_WIDTH;
use crate::interactive::components::{Sidebar, TopBar};
use crate::interactive::router::{PageContext, UIRouter, UIRouterBuildResult};
use folio_core::{Layout, MenuItem, SidebarState, SiteConfig};
use iocraft::prelude::*;
use tracing::{debug, warn};

/// Columns left for the page body
pub fn content_width(terminal_width: u16, sidebar_open: bool, layout: Layout) -> u16 {
    let sidebar = if sidebar_open { SIDEBAR_WIDTH + 1 } else { 0 };
    let available = terminal_width.saturating_sub(sidebar + 3).max(20);
    layout
        .max_width()
        .map_or(available, |max| available.min(max))
}

/// Menu index one step up or down, wrapping at the ends
pub fn step_selection(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[derive(Default, Props)]
pub struct AppProps {
    pub site: SiteConfig,
    pub router: UIRouterBuildResult,
    /// Open every card on every page
    pub expand_all: bool,
}

#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let (terminal_width, _terminal_height) = hooks.use_terminal_size();

    let handle = props.router.handle.clone();
    let routes = handle.routes();
    let initial_index = handle.current_item().unwrap_or_default().index();

    let sidebar_open = hooks.use_state(|| props.site.initial_sidebar == SidebarState::Expanded);
    let sidebar_focus = hooks.use_state(|| props.site.initial_sidebar == SidebarState::Expanded);
    let selected = hooks.use_state(|| initial_index);
    let should_exit = hooks.use_state(|| false);

    hooks.use_terminal_events({
        let handle = handle.clone();
        let items: Vec<MenuItem> = routes.iter().map(|r| r.item).collect();
        let mut sidebar_open = sidebar_open;
        let mut sidebar_focus = sidebar_focus;
        let mut selected = selected;
        let mut should_exit = should_exit;
        move |event| {
            let TerminalEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event
            else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }

            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                should_exit.set(true);
                return;
            }

            if !sidebar_focus.get() {
                if code == KeyCode::Esc {
                    sidebar_open.set(true);
                    sidebar_focus.set(true);
                }
                return;
            }

            match code {
                KeyCode::Up | KeyCode::Down => {
                    let index = step_selection(selected.get(), items.len(), code == KeyCode::Down);
                    let Some(&item) = items.get(index) else {
                        return;
                    };
                    match handle.navigate(item) {
                        Ok(()) => selected.set(index),
                        Err(err) => warn!(error = %err, "navigation failed"),
                    }
                }
                KeyCode::Backspace => {
                    if handle.go_back() {
                        let item = handle.current_item().unwrap_or_default();
                        debug!(page = %item, "went back");
                        selected.set(item.index());
                    }
                }
                KeyCode::Enter | KeyCode::Right | KeyCode::Tab => sidebar_focus.set(false),
                KeyCode::Char('[') => {
                    sidebar_open.set(false);
                    sidebar_focus.set(false);
                }
                KeyCode::Char('q') => should_exit.set(true),
                _ => {}
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let open = sidebar_open.get();
    let focus_on_sidebar = sidebar_focus.get();
    let context = PageContext {
        has_focus: !focus_on_sidebar,
        width: content_width(terminal_width, open, props.site.layout),
        expand_all: props.expand_all,
    };
    let labels: Vec<String> = routes.iter().map(|r| r.name.clone()).collect();
    let hints = if focus_on_sidebar {
        "↑↓ choose page · Enter open · Backspace back · [ hide menu · q quit"
    } else {
        "Esc menu · Ctrl+C quit"
    };

    element! {
        View(
            key: "app",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
            padding_left: 1,
            padding_right: 1,
        ) {
            TopBar(title: props.site.full_title(), width: terminal_width.saturating_sub(2))
            View(flex_direction: FlexDirection::Row, flex_grow: 1.0, gap: 1) {
                #(open.then(|| element! {
                    Sidebar(
                        title: props.site.menu_title.clone(),
                        prompt: props.site.menu_prompt.clone(),
                        labels: labels.clone(),
                        selected: selected.get(),
                        has_focus: focus_on_sidebar,
                    )
                }))
                View(
                    flex_direction: FlexDirection::Column,
                    flex_grow: 1.0,
                    padding_left: 1,
                ) {
                    UIRouter(
                        handle: handle.clone(),
                        pages: props.router.pages.clone(),
                        context: context,
                    )
                }
            }
            Text(content: hints, color: Color::DarkGrey)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width_respects_layout() {
        assert_eq!(content_width(200, true, Layout::Wide), 200 - 25 - 3);
        assert_eq!(content_width(200, true, Layout::Centered), 100);
        assert_eq!(content_width(80, false, Layout::Centered), 77);
        assert_eq!(content_width(10, true, Layout::Wide), 20);
    }

    #[test]
    fn test_step_selection_wraps() {
        assert_eq!(step_selection(4, 5, true), 0);
        assert_eq!(step_selection(0, 5, false), 4);
        assert_eq!(step_selection(2, 5, true), 3);
        assert_eq!(step_selection(0, 0, true), 0);
    }
}
