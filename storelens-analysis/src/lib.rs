//! Rule-based analysis and outreach message rendering.
//!
//! Pure functions over the extraction output:
//! - [`visibility`]: simulated visibility figures (explicitly not measured)
//! - [`classify`]: fixed decision table mapping signals to canned sentences
//! - [`outreach`]: sentence joining and the outreach message template
//!
//! Evaluation order in the classifier is fixed so that identical input
//! always produces byte-identical output.

pub mod classify;
pub mod outreach;
pub mod visibility;

pub use classify::{Findings, classify};
pub use visibility::VisibilityData;
