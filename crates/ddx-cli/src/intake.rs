//! Case assembly from a case file and command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use ddx_model::{Case, LabFinding, Symptom};

use crate::logging::redact_value;

/// Answers given directly on the command line.
#[derive(Debug, Clone, Default)]
pub struct CaseOverrides {
    pub symptoms: Vec<Symptom>,
    pub lab_findings: Vec<LabFinding>,
    pub temperature: Option<f64>,
    pub wbc: Option<f64>,
    pub crp: Option<f64>,
}

/// Read a JSON case file.
pub fn load_case_file(path: &Path) -> Result<Case> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read case file {}", path.display()))?;
    let case: Case = serde_json::from_str(&contents)
        .with_context(|| format!("parse case file {}", path.display()))?;
    debug!(
        path = %path.display(),
        symptoms = case.symptoms.len(),
        lab_findings = case.lab_findings.len(),
        "loaded case file"
    );
    Ok(case)
}

/// Merge flag answers into `base`: labels are added, given vitals replace
/// the base values.
pub fn assemble_case(base: Option<Case>, overrides: CaseOverrides) -> Case {
    let mut case = base
        .unwrap_or_default()
        .with_symptoms(overrides.symptoms)
        .with_lab_findings(overrides.lab_findings);
    if let Some(temperature) = overrides.temperature {
        case.vitals.temperature = temperature;
    }
    if let Some(wbc) = overrides.wbc {
        case.vitals.wbc = wbc;
    }
    if let Some(crp) = overrides.crp {
        case.vitals.crp = crp;
    }
    trace_case(&case);
    case
}

fn trace_case(case: &Case) {
    let symptoms = case
        .symptoms
        .iter()
        .map(|symptom| symptom.key())
        .collect::<Vec<_>>()
        .join(",");
    let lab_findings = case
        .lab_findings
        .iter()
        .map(|finding| finding.key())
        .collect::<Vec<_>>()
        .join(",");
    let vitals = format!(
        "t={} wbc={} crp={}",
        case.vitals.temperature, case.vitals.wbc, case.vitals.crp
    );
    trace!(
        symptoms = redact_value(&symptoms),
        lab_findings = redact_value(&lab_findings),
        vitals = redact_value(&vitals),
        "assembled case"
    );
}
