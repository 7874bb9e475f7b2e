//! Achievements page: publications, citation charts and awards

use super::{Block, Bullet, Card, Column, MenuItem, Page};
use crate::chart::{pairs, BarChart, ChartLabels, LineChart};
use crate::content::{Metrics, PortfolioContent, Publication};

pub fn build(content: &PortfolioContent) -> Page {
    let mut blocks = vec![
        Block::Banner("Research Achievements".to_string()),
        Block::Heading("Publications".to_string()),
    ];

    blocks.extend(
        content
            .publications
            .iter()
            .map(|p| Block::Card(publication_card(p, &content.abstract_text))),
    );

    blocks.push(Block::Heading("Citation Metrics".to_string()));
    blocks.push(Block::Columns(vec![
        Column::new(1, vec![Block::BarChart(papers_chart(&content.metrics))]),
        Column::new(1, vec![Block::LineChart(citations_chart(&content.metrics))]),
    ]));

    blocks.push(Block::Heading("Awards".to_string()));
    blocks.push(Block::Bullets(
        content
            .awards
            .iter()
            .map(|a| Bullet {
                strong: a.name.clone(),
                rest: format!(" ({}) - {}", a.year, a.granting_body),
            })
            .collect(),
    ));

    Page::new(MenuItem::Achievements, blocks)
}

fn publication_card(publication: &Publication, abstract_text: &str) -> Card {
    Card {
        title: format!("{} ({})", publication.title, publication.year),
        blocks: vec![
            Block::Field {
                label: "Venue".to_string(),
                value: publication.venue.clone(),
            },
            Block::Field {
                label: "Year".to_string(),
                value: publication.year.to_string(),
            },
            Block::Link {
                label: "Link".to_string(),
                text: publication.title.clone(),
                target: publication.url.clone(),
            },
            Block::Field {
                label: "Abstract".to_string(),
                value: abstract_text.to_string(),
            },
        ],
    }
}

/// Papers published per year
pub fn papers_chart(metrics: &Metrics) -> BarChart {
    BarChart::new(
        ChartLabels::new("Papers per Year", "Year", "Papers"),
        pairs(&metrics.paper_years, &metrics.paper_counts),
    )
}

/// Cumulative citation count, with markers
pub fn citations_chart(metrics: &Metrics) -> LineChart {
    LineChart::new(
        ChartLabels::new("Cumulative Citations", "Year", "Citations"),
        pairs(&metrics.citation_years, &metrics.citations),
    )
    .with_markers()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::DataPoint;

    fn expected(xs: &[&str], ys: &[f64]) -> Vec<DataPoint> {
        xs.iter()
            .zip(ys)
            .map(|(x, &y)| DataPoint { x: x.to_string(), y })
            .collect()
    }

    #[test]
    fn test_papers_chart_reproduces_literals() {
        let chart = papers_chart(&PortfolioContent::default().metrics);
        assert_eq!(
            chart.points,
            expected(
                &["2020", "2021", "2022", "2023", "2024"],
                &[1.0, 0.0, 1.0, 1.0, 1.0]
            )
        );
    }

    #[test]
    fn test_citations_chart_reproduces_literals() {
        let chart = citations_chart(&PortfolioContent::default().metrics);
        assert!(chart.markers);
        assert_eq!(
            chart.points,
            expected(&["2021", "2022", "2023", "2024"], &[2.0, 5.0, 10.0, 15.0])
        );
    }

    #[test]
    fn test_publications_are_cards_with_shared_abstract() {
        let content = PortfolioContent::default();
        let page = build(&content);
        let cards = page.cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards[0].title,
            "Novel FDTD Approach for Metamaterial Simulation (2024)"
        );
        for card in cards {
            assert!(card.blocks.contains(&Block::Field {
                label: "Abstract".to_string(),
                value: content.abstract_text.clone(),
            }));
        }
    }

    #[test]
    fn test_awards_are_bullets() {
        let page = build(&PortfolioContent::default());
        let Some(Block::Bullets(bullets)) = page.blocks.last() else {
            panic!("awards should close the page");
        };
        assert_eq!(bullets.len(), 2);
        assert_eq!(bullets[1].strong, "Young Scientist Award");
        assert_eq!(bullets[1].rest, " (2022) - International EM Conference");
    }
}
