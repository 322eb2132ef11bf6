//! Keyword matching, scoring and report assembly

pub mod keywords;
pub mod scoring;
pub mod analyzer;
