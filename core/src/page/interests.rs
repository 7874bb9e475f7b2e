//! Research interests page: interest cards and the keyword chart

use super::{Block, Card, Column, MenuItem, Page};
use crate::assets::{missing_image_notice, AssetResolver};
use crate::chart::{BarChart, ChartLabels, DataPoint};
use crate::content::{KeywordWeight, PortfolioContent};

/// Rotation applied to keyword tick labels
pub const KEYWORD_TICK_ANGLE: i16 = -45;

pub fn build(content: &PortfolioContent, assets: &AssetResolver) -> Page {
    let mut blocks = vec![
        Block::Banner("Research Interests".to_string()),
        Block::Heading("Main Research Areas".to_string()),
    ];

    blocks.extend(content.interests.iter().map(|interest| {
        Block::Card(text_image_card(
            interest.title.clone(),
            &interest.title,
            &interest.description,
            interest.image.as_deref(),
            assets,
        ))
    }));

    blocks.push(Block::Heading("Research Keywords".to_string()));
    blocks.push(Block::BarChart(keyword_chart(&content.keywords)));

    Page::new(MenuItem::Interests, blocks)
}

/// Card with text on the left (2/3) and an image or notice on the right (1/3).
/// Shared with the projects page.
pub(crate) fn text_image_card(
    card_title: String,
    caption: &str,
    description: &str,
    image: Option<&str>,
    assets: &AssetResolver,
) -> Card {
    let image_blocks = image
        .map(|file| vec![Block::Image(assets.slot(file, caption, missing_image_notice))])
        .unwrap_or_default();

    Card {
        title: card_title,
        blocks: vec![Block::Columns(vec![
            Column::new(2, vec![Block::Paragraph(description.to_string())]),
            Column::new(1, image_blocks),
        ])],
    }
}

/// Keyword interest bars in insertion order
pub fn keyword_chart(keywords: &[KeywordWeight]) -> BarChart {
    let points = keywords
        .iter()
        .map(|k| DataPoint {
            x: k.keyword.clone(),
            y: k.score.into(),
        })
        .collect();
    BarChart::new(
        ChartLabels::new("Research Keyword Interest", "Keyword", "Interest"),
        points,
    )
    .with_tick_angle(KEYWORD_TICK_ANGLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageSlot;

    #[test]
    fn test_missing_images_name_their_files() {
        let dir = tempfile::tempdir().unwrap();
        let page = build(&PortfolioContent::default(), &AssetResolver::new(dir.path()));

        let cards = page.cards();
        assert_eq!(cards.len(), 3);
        for (card, file) in cards
            .iter()
            .zip(["algorithm.jpg", "ml_optimization.jpg", "metamaterial.jpg"])
        {
            let Block::Columns(columns) = &card.blocks[0] else {
                panic!("card body should be two columns");
            };
            assert_eq!(columns[0].weight, 2);
            assert_eq!(columns[1].weight, 1);
            match &columns[1].blocks[0] {
                Block::Image(ImageSlot::Missing { file_name, notice }) => {
                    assert_eq!(file_name, file);
                    assert!(notice.contains(&format!("'{file}'")));
                }
                other => panic!("expected missing image, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_present_image_loads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("algorithm.jpg"), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        let page = build(&PortfolioContent::default(), &AssetResolver::new(dir.path()));
        assert!(!page.contains_text("'algorithm.jpg'"));
        assert!(page.contains_text("'metamaterial.jpg'"));
    }

    #[test]
    fn test_keyword_chart_keeps_insertion_order() {
        let keywords = vec![KeywordWeight::new("Zeta", 3), KeywordWeight::new("Alpha", 9)];
        let chart = keyword_chart(&keywords);
        assert_eq!(chart.tick_angle, -45);
        let names: Vec<_> = chart.points.iter().map(|p| p.x.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(chart.points[1].y, 9.0);
    }
}
