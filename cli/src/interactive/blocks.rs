//! Turn page blocks into iocraft elements
//!
//! Cards are numbered in document order, nested ones included, so the page
//! view can select and expand them by index.

use crate::interactive::components::charts::{bar_chart, line_chart};
use crate::interactive::components::contact_form::ContactFormView;
use crate::interactive::components::heatmap::heatmap;
use crate::interactive::components::image::image;
use folio_core::contact::{ContactLine, ContactValue};
use folio_core::page::{Block, Bullet, Card, Column};
use iocraft::prelude::*;

pub const ACCENT: Color = Color::Rgb {
    r: 255,
    g: 75,
    b: 75,
};
pub const LINK_COLOR: Color = Color::Rgb {
    r: 28,
    g: 131,
    b: 225,
};
const COLUMN_GAP: u16 = 2;

/// Split `width` between columns in proportion to their weights
pub fn column_widths(weights: &[u16], width: u16) -> Vec<u16> {
    let gaps = COLUMN_GAP * weights.len().saturating_sub(1) as u16;
    let usable = width.saturating_sub(gaps) as u32;
    let total: u32 = weights.iter().map(|&w| w.max(1) as u32).sum();
    if total == 0 {
        return Vec::new();
    }
    weights
        .iter()
        .map(|&w| (usable * w.max(1) as u32 / total) as u16)
        .collect()
}

/// Rendering state for one page
pub struct BlockRenderer<'a> {
    /// Whether the page currently receives keys
    pub has_focus: bool,
    /// Card under the cursor
    pub selected_card: Option<usize>,
    /// Open cards by index
    pub expanded: &'a [bool],
    pub expand_all: bool,
    next_card: usize,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(
        has_focus: bool,
        selected_card: Option<usize>,
        expanded: &'a [bool],
        expand_all: bool,
    ) -> Self {
        Self {
            has_focus,
            selected_card,
            expanded,
            expand_all,
            next_card: 0,
        }
    }

    pub fn render_blocks(&mut self, blocks: &[Block], width: u16) -> Vec<AnyElement<'static>> {
        blocks
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let inner = self.render_block(block, width);
                element! {
                    View(key: i, flex_direction: FlexDirection::Column, width: width) {
                        #(inner)
                    }
                }
                .into()
            })
            .collect()
    }

    pub fn render_block(&mut self, block: &Block, width: u16) -> AnyElement<'static> {
        match block {
            Block::Banner(title) => banner(title, width),
            Block::Heading(text) => element! {
                View(margin_top: 1, margin_bottom: 1) {
                    Text(content: text.clone(), weight: Weight::Bold, color: ACCENT)
                }
            }
            .into(),
            Block::Paragraph(text) => element! {
                View(margin_bottom: 1) {
                    Text(content: text.clone())
                }
            }
            .into(),
            Block::Field { label, value } => labelled(label, vec![MixedTextContent::new(value)]),
            Block::Link {
                label,
                text,
                target,
            } => labelled(label, link_contents(text, target)),
            Block::Columns(columns) => self.columns(columns, width),
            Block::Highlight { title, body } => element! {
                View(
                    border_style: BorderStyle::Round,
                    border_color: Color::DarkGrey,
                    padding_left: 1,
                    padding_right: 1,
                    flex_direction: FlexDirection::Column,
                    width: width,
                ) {
                    Text(content: title.clone(), weight: Weight::Bold)
                    Text(content: body.clone())
                }
            }
            .into(),
            Block::Image(slot) => image(slot),
            Block::Card(card) => self.card(card, width),
            Block::Bullets(bullets) => element! {
                View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                    #(bullets.iter().enumerate().map(|(i, b)| element! {
                        MixedText(key: i, contents: bullet_contents(b))
                    }))
                }
            }
            .into(),
            Block::BarChart(chart) => bar_chart(chart, width),
            Block::LineChart(chart) => line_chart(chart, width),
            Block::Heatmap(map) => heatmap(map, width),
            Block::ContactList(lines) => element! {
                View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                    #(lines.iter().enumerate().map(|(i, line)| element! {
                        MixedText(key: i, contents: contact_contents(line))
                    }))
                }
            }
            .into(),
            Block::ContactForm => element! {
                ContactFormView(has_focus: self.has_focus, width: width)
            }
            .into(),
        }
    }

    fn columns(&mut self, columns: &[Column], width: u16) -> AnyElement<'static> {
        let weights: Vec<u16> = columns.iter().map(|c| c.weight).collect();
        let widths = column_widths(&weights, width);
        let children: Vec<AnyElement<'static>> = columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (column, col_width))| {
                let inner = self.render_blocks(&column.blocks, col_width);
                element! {
                    View(key: i, flex_direction: FlexDirection::Column, width: col_width) {
                        #(inner)
                    }
                }
                .into()
            })
            .collect();

        element! {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(children)
            }
        }
        .into()
    }

    fn card(&mut self, card: &Card, width: u16) -> AnyElement<'static> {
        let index = self.next_card;
        self.next_card += 1;

        let selected = self.has_focus && self.selected_card == Some(index);
        let open = self.expand_all || self.expanded.get(index).copied().unwrap_or(false);
        let body = open.then(|| self.render_blocks(&card.blocks, width.saturating_sub(4)));

        element! {
            View(
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: if selected { ACCENT } else { Color::DarkGrey },
                padding_left: 1,
                padding_right: 1,
                width: width,
            ) {
                Text(
                    content: format!("{} {}", if open { "▾" } else { "▸" }, card.title),
                    weight: Weight::Bold,
                    color: if selected { ACCENT } else { Color::Reset },
                )
                #(body.map(|children| element! {
                    View(flex_direction: FlexDirection::Column, margin_top: 1) {
                        #(children)
                    }
                }))
            }
        }
        .into()
    }
}

fn banner(title: &str, width: u16) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            Text(content: title.to_string(), weight: Weight::Bold)
            Text(content: "═".repeat(width as usize), color: ACCENT, wrap: TextWrap::NoWrap)
        }
    }
    .into()
}

/// "**label:** contents"
fn labelled(label: &str, mut contents: Vec<MixedTextContent>) -> AnyElement<'static> {
    contents.insert(0, MixedTextContent::new(format!("{label}: ")).weight(Weight::Bold));
    element! {
        MixedText(contents: contents)
    }
    .into()
}

fn link_contents(text: &str, target: &str) -> Vec<MixedTextContent> {
    let mut contents = vec![MixedTextContent::new(text)
        .color(LINK_COLOR)
        .decoration(TextDecoration::Underline)];
    if text != target {
        contents.push(MixedTextContent::new(format!(" ({target})")).color(Color::DarkGrey));
    }
    contents
}

fn bullet_contents(bullet: &Bullet) -> Vec<MixedTextContent> {
    vec![
        MixedTextContent::new("• "),
        MixedTextContent::new(&bullet.strong).weight(Weight::Bold),
        MixedTextContent::new(&bullet.rest),
    ]
}

fn contact_contents(line: &ContactLine) -> Vec<MixedTextContent> {
    let mut contents = vec![MixedTextContent::new(format!("{}: ", line.method)).weight(Weight::Bold)];
    match &line.value {
        ContactValue::Link { text, target } => contents.extend(link_contents(text, target)),
        ContactValue::Text(text) => contents.push(MixedTextContent::new(text)),
    }
    contents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_follow_weights() {
        assert_eq!(column_widths(&[1, 2], 92), vec![30, 60]);
        assert_eq!(column_widths(&[1, 1, 1], 64), vec![20, 20, 20]);
        assert_eq!(column_widths(&[1], 50), vec![50]);
        assert!(column_widths(&[], 50).is_empty());
    }

    #[test]
    fn test_link_contents_hide_duplicate_target() {
        assert_eq!(link_contents("https://a.io", "https://a.io").len(), 1);
        assert_eq!(link_contents("Paper", "https://a.io").len(), 2);
    }
}
