//! Weighted-sum condition scoring.
//!
//! Every condition owns a table of [`Term`]s. A term walks its arms in order
//! and contributes the weight of the first arm whose trigger fires, or its
//! `otherwise` weight when none does. The condition score is the plain sum of
//! its terms: no normalization and no probability semantics.

use ddx_model::{
    CRP_THRESHOLD, Case, Condition, FEVER_THRESHOLD_C, LEUKOCYTOSIS_THRESHOLD, LabFinding,
    LabFindingSet, ScoreResult, Symptom, SymptomSet, VitalSign, Vitals,
};

#[derive(Debug, Clone, Copy)]
enum Feature {
    Symptom(Symptom),
    Lab(LabFinding),
}

/// Presence of a label, optionally confirmed by a vital sign above threshold.
#[derive(Debug, Clone, Copy)]
struct Trigger {
    feature: Feature,
    gate: Option<VitalSign>,
}

impl Trigger {
    const fn symptom(symptom: Symptom) -> Self {
        Self {
            feature: Feature::Symptom(symptom),
            gate: None,
        }
    }

    const fn lab(finding: LabFinding) -> Self {
        Self {
            feature: Feature::Lab(finding),
            gate: None,
        }
    }

    const fn above_threshold(mut self, vital: VitalSign) -> Self {
        self.gate = Some(vital);
        self
    }

    fn fires(&self, input: &ScoringInput<'_>) -> bool {
        let present = match self.feature {
            Feature::Symptom(symptom) => input.symptoms.contains(&symptom),
            Feature::Lab(finding) => input.lab_findings.contains(&finding),
        };
        present
            && self
                .gate
                .is_none_or(|vital| input.vitals.value(vital) > threshold(vital))
    }
}

#[derive(Debug)]
struct Term {
    arms: &'static [(Trigger, i32)],
    otherwise: i32,
}

impl Term {
    fn evaluate(&self, input: &ScoringInput<'_>) -> i32 {
        self.arms
            .iter()
            .find(|(trigger, _)| trigger.fires(input))
            .map_or(self.otherwise, |&(_, weight)| weight)
    }
}

struct ScoringInput<'a> {
    symptoms: &'a SymptomSet,
    lab_findings: &'a LabFindingSet,
    vitals: &'a Vitals,
}

fn threshold(vital: VitalSign) -> f64 {
    match vital {
        VitalSign::Temperature => FEVER_THRESHOLD_C,
        VitalSign::WhiteBloodCells => LEUKOCYTOSIS_THRESHOLD,
        VitalSign::CReactiveProtein => CRP_THRESHOLD,
    }
}

const FEVER: Trigger = Trigger::symptom(Symptom::Fever).above_threshold(VitalSign::Temperature);
const COUGH: Trigger = Trigger::symptom(Symptom::Cough);
const PRODUCTIVE_COUGH: Trigger = Trigger::symptom(Symptom::ProductiveCough);
const DYSPNEA: Trigger = Trigger::symptom(Symptom::Dyspnea);
const LEUKOCYTOSIS: Trigger =
    Trigger::lab(LabFinding::Leukocytosis).above_threshold(VitalSign::WhiteBloodCells);
const ELEVATED_CRP: Trigger =
    Trigger::lab(LabFinding::ElevatedCrp).above_threshold(VitalSign::CReactiveProtein);

const PNEUMONIA: &[Term] = &[
    Term {
        arms: &[(FEVER, 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(PRODUCTIVE_COUGH, 2), (COUGH, 1)],
        otherwise: 0,
    },
    Term {
        arms: &[(DYSPNEA, 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(LEUKOCYTOSIS, 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(ELEVATED_CRP, 2)],
        otherwise: 0,
    },
];

const PHARYNGITIS: &[Term] = &[
    Term {
        arms: &[(Trigger::symptom(Symptom::SoreThroat), 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(Trigger::symptom(Symptom::TonsilExudate), 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(FEVER, 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(Trigger::symptom(Symptom::Lymphadenopathy), 2)],
        otherwise: 0,
    },
    // cough argues against a streptococcal cause
    Term {
        arms: &[(COUGH, -2)],
        otherwise: 1,
    },
];

const UTI: &[Term] = &[
    Term {
        arms: &[(Trigger::symptom(Symptom::Dysuria), 3)],
        otherwise: 0,
    },
    Term {
        arms: &[(Trigger::symptom(Symptom::UrinaryFrequency), 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(Trigger::lab(LabFinding::Pyuria), 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(FEVER, 2)],
        otherwise: 0,
    },
];

const BRONCHITIS: &[Term] = &[
    Term {
        arms: &[(COUGH, 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(PRODUCTIVE_COUGH, 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(FEVER, -2)],
        otherwise: 1,
    },
    Term {
        arms: &[(DYSPNEA, -2)],
        otherwise: 1,
    },
    Term {
        arms: &[(LEUKOCYTOSIS, -2)],
        otherwise: 1,
    },
];

const INFLUENZA: &[Term] = &[
    Term {
        arms: &[(FEVER, 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(Trigger::symptom(Symptom::Headache), 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(Trigger::symptom(Symptom::Myalgia), 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(Trigger::symptom(Symptom::AbruptOnset), 2)],
        otherwise: 0,
    },
    Term {
        arms: &[(Trigger::symptom(Symptom::Fatigue), 1)],
        otherwise: 0,
    },
];

fn terms_for(condition: Condition) -> &'static [Term] {
    match condition {
        Condition::Pneumonia => PNEUMONIA,
        Condition::Pharyngitis => PHARYNGITIS,
        Condition::Uti => UTI,
        Condition::Bronchitis => BRONCHITIS,
        Condition::Influenza => INFLUENZA,
    }
}

/// Score every condition and rank them, highest first.
///
/// Total over its input: an empty selection yields the baseline scores
/// contributed by `otherwise` weights (bronchitis 3, pharyngitis 1).
pub fn score(symptoms: &SymptomSet, lab_findings: &LabFindingSet, vitals: &Vitals) -> ScoreResult {
    let input = ScoringInput {
        symptoms,
        lab_findings,
        vitals,
    };
    let scores = Condition::ALL.map(|condition| {
        terms_for(condition)
            .iter()
            .map(|term| term.evaluate(&input))
            .sum::<i32>()
    });
    ScoreResult::from_declared(scores)
}

pub fn score_case(case: &Case) -> ScoreResult {
    score(&case.symptoms, &case.lab_findings, &case.vitals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_arm_wins() {
        let symptoms = SymptomSet::from([Symptom::Cough, Symptom::ProductiveCough]);
        let result = score(&symptoms, &LabFindingSet::new(), &Vitals::default());
        // productive cough takes the +2 arm, plain cough does not add +1 on top
        assert_eq!(result.score_of(Condition::Pneumonia), 2);
    }

    #[test]
    fn gate_is_strictly_greater() {
        let symptoms = SymptomSet::from([Symptom::Fever]);
        let at_threshold = score(&symptoms, &LabFindingSet::new(), &Vitals::new(38.0, 6.0, 2.0));
        let above = score(&symptoms, &LabFindingSet::new(), &Vitals::new(38.1, 6.0, 2.0));
        assert_eq!(at_threshold.score_of(Condition::Influenza), 0);
        assert_eq!(above.score_of(Condition::Influenza), 2);
    }
}
