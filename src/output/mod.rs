//! Report rendering and the downloadable resume artifact

pub mod artifact;
pub mod formatter;
pub mod gauge;
pub mod report;
