//! Portfolio record types
//!
//! Every record is a plain literal read once per page render. Ordered
//! mappings (keywords, contact entries) are stored as vectors so that
//! insertion order survives a round trip through JSON.

use crate::chart::zip_series;
use crate::error::ContentError;
use serde::{Deserialize, Serialize};

/// A published paper shown on the achievements page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    pub year: u16,
    pub url: String,
}

/// An award or honor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub granting_body: String,
    pub year: u16,
}

/// A research interest card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchInterest {
    pub title: String,
    pub description: String,
    /// File name looked up in the asset directory
    #[serde(default)]
    pub image: Option<String>,
}

/// A project card; like an interest, plus the period it ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Relative interest score for a keyword, used only as bar height
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub score: i32,
}

impl KeywordWeight {
    pub fn new(keyword: impl Into<String>, score: i32) -> Self {
        Self {
            keyword: keyword.into(),
            score,
        }
    }
}

/// One line of contact information (method name and value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub method: String,
    pub value: String,
}

impl ContactEntry {
    pub fn new(method: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            value: value.into(),
        }
    }
}

/// Specialty highlight shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Owner of the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub bio: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Literal chart data for the achievements page, as parallel arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub paper_years: Vec<String>,
    pub paper_counts: Vec<u32>,
    pub citation_years: Vec<String>,
    pub citations: Vec<u32>,
}

impl Metrics {
    /// Both series must pair every label with exactly one value
    pub fn validate(&self) -> Result<(), ContentError> {
        zip_series("papers per year", &self.paper_years, &self.paper_counts)?;
        zip_series("cumulative citations", &self.citation_years, &self.citations)?;
        Ok(())
    }
}
