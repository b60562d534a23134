use thiserror::Error;

use crate::vitals::VitalSign;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),
    #[error("unknown lab finding: {0}")]
    UnknownLabFinding(String),
    #[error("{vital} {value} is outside the accepted range {min}..={max}")]
    VitalOutOfRange {
        vital: VitalSign,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
