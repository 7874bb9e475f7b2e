//! Projects page

use super::interests::text_image_card;
use super::{Block, MenuItem, Page};
use crate::assets::AssetResolver;
use crate::content::PortfolioContent;

pub fn build(content: &PortfolioContent, assets: &AssetResolver) -> Page {
    let mut blocks = vec![Block::Banner("Projects".to_string())];

    blocks.extend(content.projects.iter().map(|project| {
        Block::Card(text_image_card(
            format!("{} ({})", project.title, project.period),
            &project.title,
            &project.description,
            project.image.as_deref(),
            assets,
        ))
    }));

    Page::new(MenuItem::Projects, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_titles_carry_period() {
        let dir = tempfile::tempdir().unwrap();
        let page = build(&PortfolioContent::default(), &AssetResolver::new(dir.path()));
        let titles: Vec<_> = page.cards().iter().map(|c| c.title.clone()).collect();
        assert_eq!(
            titles,
            vec![
                "Automated High-Performance Antenna Design (2023.03 - present)",
                "Metasurface Filter for 5G (2022.01 - 2022.12)",
                "Fast EM Simulation Library (2021.06 - 2022.05)",
            ]
        );
    }

    #[test]
    fn test_missing_project_image_notice() {
        let dir = tempfile::tempdir().unwrap();
        let page = build(&PortfolioContent::default(), &AssetResolver::new(dir.path()));
        assert!(page.contains_text("'simulation_library.jpg'"));
    }
}
