//! Home page: banner, photo and bio, specialties, decorative field plot

use super::{Block, Column, MenuItem, Page};
use crate::assets::{missing_photo_notice, AssetResolver};
use crate::chart::{ChartLabels, Heatmap};
use crate::content::PortfolioContent;
use crate::field::decorative_field;

pub fn build(content: &PortfolioContent, assets: &AssetResolver) -> Page {
    let profile = &content.profile;

    let photo_column = match &profile.photo {
        Some(file) => vec![Block::Image(assets.slot(file, &profile.name, missing_photo_notice))],
        None => Vec::new(),
    };

    let specialties = content
        .specialties
        .iter()
        .map(|s| {
            Column::new(
                1,
                vec![Block::Highlight {
                    title: format!("{} {}", s.icon, s.title).trim().to_string(),
                    body: s.description.clone(),
                }],
            )
        })
        .collect();

    let blocks = vec![
        Block::Banner(profile.headline.clone()),
        Block::Columns(vec![
            Column::new(1, photo_column),
            Column::new(2, vec![Block::Paragraph(profile.bio.clone())]),
        ]),
        Block::Heading("Specialties".to_string()),
        Block::Columns(specialties),
        Block::Heading("EM Field Simulation Demo".to_string()),
        Block::Heatmap(field_plot()),
    ];

    Page::new(MenuItem::Home, blocks)
}

/// The decorative heatmap shown at the bottom of the home page
pub fn field_plot() -> Heatmap {
    Heatmap {
        labels: ChartLabels::new("EM Field Simulation (demo)", "X position", "Y position"),
        color_label: "Field intensity".to_string(),
        grid: decorative_field(),
    }
}
