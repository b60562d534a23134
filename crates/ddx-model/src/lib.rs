//! Data model for the infectious-disease differential questionnaire.

pub mod case;
pub mod condition;
pub mod error;
pub mod outcome;
pub mod vitals;
pub mod vocabulary;

pub use case::{Case, LabFindingSet, SymptomSet};
pub use condition::{Condition, ConditionProfile};
pub use error::{ModelError, Result};
pub use outcome::{ConditionScore, DIFFERENTIAL_SIZE, GuidelineMatch, ScoreResult};
pub use vitals::{CRP_THRESHOLD, FEVER_THRESHOLD_C, LEUKOCYTOSIS_THRESHOLD, VitalSign, Vitals};
pub use vocabulary::{LabFinding, Symptom};
