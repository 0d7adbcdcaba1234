//! The license detection core.
//!
//! - [`normalize`] — text canonicalization applied before similarity scoring.
//! - [`similarity`] — Ratcliff/Obershelp matching-blocks ratio.
//! - [`keywords`] — fractional keyword-presence score.
//! - [`classifier`] — score fusion, ranking, and the ambiguity rule.

pub mod classifier;
pub mod keywords;
pub mod normalize;
pub mod similarity;
