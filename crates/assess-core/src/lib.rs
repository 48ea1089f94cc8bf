//! Assessment mastery analysis pipeline.
//!
//! Data flows forward through four stages:
//!
//! 1. [`classify`] finds the score columns and their question identifiers.
//! 2. [`check`] screens column names for personal data and gates everything after it.
//! 3. [`normalize`] turns score text into 0/1 using the correct prefix.
//! 4. [`aggregate`] counts students inside each learning target's range.
//!
//! [`prepare_upload`] runs stages 1-3 with the gate applied, and
//! [`AnalysisSession`] keeps the prepared upload and the learning target
//! groups for a presentation layer.
//!
//! # Example
//!
//! ```ignore
//! use assess_core::AnalysisSession;
//! use assess_model::AnalysisOptions;
//!
//! let mut session = AnalysisSession::new(AnalysisOptions::default());
//! session.load(&df)?;
//! session.add_group("Causes of WWI", ["Q1", "Q2"], 2, 2)?;
//! for result in session.analyze()? {
//!     println!("{}: {}/{} ({})", result.name, result.count, result.total, result.percent);
//! }
//! ```

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod normalize;
pub mod pii;
pub mod pipeline;
pub mod session;
pub mod summary;

pub use aggregate::{aggregate, correct_counts};
pub use classify::{classify, classify_frame};
pub use error::{AnalysisError, Result};
pub use normalize::normalize;
pub use pii::{PiiGuard, check};
pub use pipeline::{PreparedUpload, prepare_upload};
pub use session::AnalysisSession;
pub use summary::{correctness_summary, low_correctness_warning, overall_correct_ratio};
