//! One-shot page rendering to stdout

use crate::interactive::pages::PageView;
use crate::interactive::text_utils::terminal_width;
use anyhow::Result;
use folio_core::{MenuItem, Portfolio};
use iocraft::prelude::*;
use tracing::debug;

/// Print `item` once; `width` defaults to the terminal width
pub fn render_command(
    portfolio: &Portfolio,
    item: MenuItem,
    expand: bool,
    width: Option<u16>,
) -> Result<()> {
    let width = width.unwrap_or_else(terminal_width).max(20);
    let layout_width = portfolio
        .site()
        .layout
        .max_width()
        .map_or(width, |max| width.min(max));
    debug!(page = %item, width = layout_width, expand, "rendering page once");

    let title = portfolio.site().full_title();
    let page = portfolio.render(item);

    element! {
        View(flex_direction: FlexDirection::Column, width: layout_width) {
            Text(content: title, weight: Weight::Bold, color: Color::DarkGrey)
            PageView(page: page, has_focus: false, width: layout_width, expand_all: expand)
        }
    }
    .print();
    Ok(())
}
