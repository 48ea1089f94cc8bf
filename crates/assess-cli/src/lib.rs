//! CLI library components for the assessment analyzer.

pub mod config;
pub mod groups;
pub mod logging;
pub mod pipeline;
