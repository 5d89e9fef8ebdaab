//! Simulated visibility figures.
//!
//! Real traffic and SEO APIs are out of scope; the figures here are
//! hardcoded placeholders except for the blog check, which is derived from
//! the input URL.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityData {
    pub estimated_traffic: String,
    pub seo_score: String,
    pub has_blog: bool,
}

impl VisibilityData {
    /// Build the simulated figures for one analysis.
    ///
    /// `has_blog` is a substring check on the raw input URL, nothing more.
    pub fn simulate(url: &str) -> Self {
        Self {
            estimated_traffic: "5000-10000".to_string(),
            seo_score: "B+".to_string(),
            has_blog: url.contains("blog"),
        }
    }
}
