use thiserror::Error;

use ddx_model::ModelError;

/// Reasons a questionnaire submission is refused before scoring.
#[derive(Debug, Error, PartialEq)]
pub enum DiagnosisError {
    #[error("no symptoms selected; enter the patient's symptoms before running a diagnosis")]
    NoSymptoms,
    #[error("invalid vitals: {0}")]
    InvalidVitals(#[from] ModelError),
}

/// Failures of the experimental advisory classifier.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdvisoryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("classifier returned HTTP {0}")]
    Status(u16),
    #[error("could not decode classifier response: {0}")]
    Decode(String),
    #[error("classifier returned no labels")]
    EmptyResponse,
}

impl From<reqwest::Error> for AdvisoryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DiagnosisError>;
