//! Render-agnostic page documents
//!
//! A [`Page`] is an ordered list of [`Block`]s. Front-ends decide how each
//! block looks; builders only decide what is on the page.

use super::MenuItem;
use crate::assets::ImageSlot;
use crate::chart::{BarChart, Heatmap, LineChart};
use crate::contact::ContactLine;

/// A full screen of content
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub item: MenuItem,
    pub blocks: Vec<Block>,
}

/// Share of the row width given to a column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub weight: u16,
    pub blocks: Vec<Block>,
}

impl Column {
    pub fn new(weight: u16, blocks: Vec<Block>) -> Self {
        Self { weight, blocks }
    }
}

/// Collapsed-by-default card revealing the blocks of a single record
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Bullet with a bold lead and trailing plain text
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub strong: String,
    pub rest: String,
}

/// Displayable unit of a page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Page title banner
    Banner(String),
    /// Section heading
    Heading(String),
    Paragraph(String),
    /// "**label:** value"
    Field { label: String, value: String },
    /// Labelled hyperlink
    Link {
        label: String,
        text: String,
        target: String,
    },
    /// Side-by-side columns
    Columns(Vec<Column>),
    /// Boxed highlight with a title
    Highlight { title: String, body: String },
    Image(ImageSlot),
    Card(Card),
    Bullets(Vec<Bullet>),
    BarChart(BarChart),
    LineChart(LineChart),
    Heatmap(Heatmap),
    ContactList(Vec<ContactLine>),
    /// The interactive message form
    ContactForm,
}

impl Block {
    /// Every human-readable string carried by this block and its children
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Block::Banner(s) | Block::Heading(s) | Block::Paragraph(s) => out.push(s),
            Block::Field { label, value } => out.extend([label.as_str(), value.as_str()]),
            Block::Link { label, text, .. } => out.extend([label.as_str(), text.as_str()]),
            Block::Columns(columns) => columns
                .iter()
                .flat_map(|c| &c.blocks)
                .for_each(|b| b.collect_texts(out)),
            Block::Highlight { title, body } => out.extend([title.as_str(), body.as_str()]),
            Block::Image(ImageSlot::Loaded { caption, .. }) => out.push(caption),
            Block::Image(ImageSlot::Missing { notice, .. }) => out.push(notice),
            Block::Card(card) => {
                out.push(&card.title);
                card.blocks.iter().for_each(|b| b.collect_texts(out));
            }
            Block::Bullets(bullets) => bullets
                .iter()
                .for_each(|b| out.extend([b.strong.as_str(), b.rest.as_str()])),
            Block::BarChart(chart) => out.push(&chart.labels.title),
            Block::LineChart(chart) => out.push(&chart.labels.title),
            Block::Heatmap(map) => out.push(&map.labels.title),
            Block::ContactList(lines) => lines
                .iter()
                .for_each(|l| out.extend([l.method.as_str(), l.value.text()])),
            Block::ContactForm => {}
        }
    }
}

impl Page {
    pub fn new(item: MenuItem, blocks: Vec<Block>) -> Self {
        Self { item, blocks }
    }

    /// Cards in document order, including those nested in columns
    pub fn cards(&self) -> Vec<&Card> {
        fn walk<'a>(blocks: &'a [Block], out: &mut Vec<&'a Card>) {
            for block in blocks {
                match block {
                    Block::Card(card) => out.push(card),
                    Block::Columns(columns) => columns.iter().for_each(|c| walk(&c.blocks, out)),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.blocks, &mut out);
        out
    }

    /// Whether any block on the page displays text containing `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks
            .iter()
            .any(|b| b.texts().iter().any(|t| t.contains(needle)))
    }

    /// Whether the page hosts the message form
    pub fn has_contact_form(&self) -> bool {
        fn walk(blocks: &[Block]) -> bool {
            blocks.iter().any(|b| match b {
                Block::ContactForm => true,
                Block::Columns(columns) => columns.iter().any(|c| walk(&c.blocks)),
                _ => false,
            })
        }
        walk(&self.blocks)
    }
}
