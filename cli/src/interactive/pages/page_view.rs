//! Scrollable view of one page document

use crate::interactive::blocks::BlockRenderer;
use folio_core::page::{Block, Page};
use iocraft::prelude::*;

/// Top-level block holding the `card`-th card, counting in document order
pub fn card_owner(page: &Page, card: usize) -> Option<usize> {
    fn count(block: &Block) -> usize {
        match block {
            Block::Card(_) => 1,
            Block::Columns(columns) => columns
                .iter()
                .flat_map(|c| &c.blocks)
                .map(count)
                .sum(),
            _ => 0,
        }
    }

    let mut seen = 0;
    for (i, block) in page.blocks.iter().enumerate() {
        seen += count(block);
        if card < seen {
            return Some(i);
        }
    }
    None
}

/// Scroll offset keeping the selected card's block on screen
pub fn scroll_for_card(page: &Page, card: usize, scroll: usize) -> usize {
    match card_owner(page, card) {
        Some(owner) if owner < scroll => owner,
        _ => scroll,
    }
}

#[derive(Default, Props)]
pub struct PageViewProps {
    pub page: Page,
    /// Whether key events go to this page
    pub has_focus: bool,
    pub width: u16,
    /// Open every card, ignoring the toggles
    pub expand_all: bool,
}

#[component]
pub fn PageView(mut hooks: Hooks, props: &PageViewProps) -> impl Into<AnyElement<'static>> {
    let card_count = props.page.cards().len();
    let block_count = props.page.blocks.len();
    let navigable = card_count > 0 && !props.page.has_contact_form();

    let selected = hooks.use_state(|| 0usize);
    let expanded = hooks.use_state(|| vec![false; card_count]);
    let scroll = hooks.use_state(|| 0usize);

    hooks.use_terminal_events({
        let has_focus = props.has_focus;
        let page = props.page.clone();
        let mut selected = selected;
        let mut expanded = expanded;
        let mut scroll = scroll;
        move |event| {
            if !has_focus {
                return;
            }
            let TerminalEvent::Key(KeyEvent { code, kind, .. }) = event else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }
            match code {
                KeyCode::PageDown => scroll.set((scroll.get() + 1).min(block_count.saturating_sub(1))),
                KeyCode::PageUp => scroll.set(scroll.get().saturating_sub(1)),
                KeyCode::Home => {
                    scroll.set(0);
                    selected.set(0);
                }
                KeyCode::Up | KeyCode::Char('k') if navigable => {
                    let card = selected.get().saturating_sub(1);
                    selected.set(card);
                    scroll.set(scroll_for_card(&page, card, scroll.get()));
                }
                KeyCode::Down | KeyCode::Char('j') if navigable => {
                    let card = (selected.get() + 1).min(card_count - 1);
                    selected.set(card);
                    scroll.set(scroll_for_card(&page, card, scroll.get()));
                }
                KeyCode::Enter | KeyCode::Char(' ') if navigable => {
                    let card = selected.get();
                    if let Some(open) = expanded.write().get_mut(card) {
                        *open = !*open;
                    }
                }
                _ => {}
            }
        }
    });

    let expanded_cards = expanded.read().clone();
    let selected_card = navigable.then(|| selected.get());
    let visible = &props.page.blocks[scroll.get().min(block_count)..];
    let mut renderer = BlockRenderer::new(
        props.has_focus,
        selected_card,
        &expanded_cards,
        props.expand_all,
    );
    let children = renderer.render_blocks(visible, props.width);

    let hint = match (props.has_focus, navigable) {
        (false, _) => None,
        (true, true) => Some("↑↓ select · Enter expand/collapse · PgUp/PgDn scroll · Esc menu"),
        (true, false) if props.page.has_contact_form() => None,
        (true, false) => Some("PgUp/PgDn scroll · Esc menu"),
    };

    element! {
        View(flex_direction: FlexDirection::Column, width: props.width) {
            #(children)
            #(hint.map(|hint| element! {
                Text(content: hint, color: Color::DarkGrey)
            }))
        }
    }
}
