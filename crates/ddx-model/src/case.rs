use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::vitals::Vitals;
use crate::vocabulary::{LabFinding, Symptom};

pub type SymptomSet = BTreeSet<Symptom>;
pub type LabFindingSet = BTreeSet<LabFinding>;

/// One questionnaire submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Case {
    pub symptoms: SymptomSet,
    pub lab_findings: LabFindingSet,
    pub vitals: Vitals,
}

impl Case {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_symptoms(mut self, symptoms: impl IntoIterator<Item = Symptom>) -> Self {
        self.symptoms.extend(symptoms);
        self
    }

    #[must_use]
    pub fn with_lab_findings(mut self, findings: impl IntoIterator<Item = LabFinding>) -> Self {
        self.lab_findings.extend(findings);
        self
    }

    #[must_use]
    pub fn with_vitals(mut self, vitals: Vitals) -> Self {
        self.vitals = vitals;
        self
    }

    pub fn has_symptom(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    pub fn has_lab_finding(&self, finding: LabFinding) -> bool {
        self.lab_findings.contains(&finding)
    }
}
