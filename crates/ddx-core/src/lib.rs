//! Scoring and guideline matching for the infectious-disease questionnaire.
//!
//! - [`score`] ranks the five conditions by a fixed weighted sum.
//! - [`match_guidelines`] returns the knowledge base profiles whose criteria
//!   threshold is met.
//! - [`diagnose`] validates a submission and combines both into a
//!   [`DiagnosticReport`].
//! - [`advisory`] holds the experimental classifier, kept apart from the
//!   scoring path.

pub mod advisory;
pub mod error;
pub mod guidelines;
pub mod report;
pub mod scorer;

pub use advisory::{Advisory, Classification, HttpClassifier, TextClassifier, advise};
pub use error::{AdvisoryError, DiagnosisError, Result};
pub use guidelines::{criterion_matches, match_case, match_guidelines};
pub use report::{DiagnosticReport, NO_GUIDELINE_MATCH, RATIONALE, diagnose};
pub use scorer::{score, score_case};
