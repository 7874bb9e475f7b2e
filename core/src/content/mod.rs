//! Portfolio content
//!
//! [`PortfolioContent`] bundles every record the pages read. Sections
//! absent from a content file fall back to the built-in sample data.

pub mod model;
pub mod sample;

pub use model::{
    Award, ContactEntry, KeywordWeight, Metrics, Profile, Project, Publication,
    ResearchInterest, Specialty,
};

use crate::config::SiteConfig;
use crate::error::{ContentError, Result};
use serde::{Deserialize, Serialize};

fn default_abstract() -> String {
    sample::ABSTRACT_TEXT.to_string()
}

/// Everything a portfolio displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default = "sample::profile")]
    pub profile: Profile,
    #[serde(default = "sample::specialties")]
    pub specialties: Vec<Specialty>,
    #[serde(default = "sample::publications")]
    pub publications: Vec<Publication>,
    /// Illustrative abstract shown under every publication
    #[serde(default = "default_abstract")]
    pub abstract_text: String,
    #[serde(default = "sample::metrics")]
    pub metrics: Metrics,
    #[serde(default = "sample::awards")]
    pub awards: Vec<Award>,
    #[serde(default = "sample::interests")]
    pub interests: Vec<ResearchInterest>,
    #[serde(default = "sample::keywords")]
    pub keywords: Vec<KeywordWeight>,
    #[serde(default = "sample::projects")]
    pub projects: Vec<Project>,
    #[serde(default = "sample::contact")]
    pub contact: Vec<ContactEntry>,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            profile: sample::profile(),
            specialties: sample::specialties(),
            publications: sample::publications(),
            abstract_text: default_abstract(),
            metrics: sample::metrics(),
            awards: sample::awards(),
            interests: sample::interests(),
            keywords: sample::keywords(),
            projects: sample::projects(),
            contact: sample::contact(),
        }
    }
}

impl PortfolioContent {
    /// Parse and validate content from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the invariants pages rely on at render time
    pub fn validate(&self) -> std::result::Result<(), ContentError> {
        for publication in &self.publications {
            if publication.title.trim().is_empty() {
                return Err(ContentError::MissingField {
                    field: "publications[].title".to_string(),
                });
            }
        }
        self.metrics.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_content_is_valid() {
        assert!(PortfolioContent::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_sample() {
        let content = PortfolioContent::from_json_str(
            r#"{"profile": {"name": "Ada", "headline": "H", "bio": "B"}}"#,
        )
        .expect("partial content should parse");
        assert_eq!(content.profile.name, "Ada");
        assert!(content.profile.photo.is_none());
        assert_eq!(content.publications, sample::publications());
        assert_eq!(content.keywords.len(), 12);
    }

    #[test]
    fn test_keyword_order_is_preserved() {
        let content = PortfolioContent::from_json_str(
            r#"{"keywords": [{"keyword": "Zeta", "score": 1}, {"keyword": "Alpha", "score": 9}]}"#,
        )
        .unwrap();
        let names: Vec<_> = content.keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_empty_publication_title_rejected() {
        let err = PortfolioContent::from_json_str(
            r#"{"publications": [{"title": " ", "venue": "V", "year": 2020, "url": "u"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("publications[].title"));
    }
}
