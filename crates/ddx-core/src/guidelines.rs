//! Criteria-count matching against the guideline knowledge base.

use ddx_model::{Case, GuidelineMatch, LabFindingSet, SymptomSet};
use ddx_standards::profiles;

/// Whether any selected label appears inside the criterion text.
///
/// Matching is case-sensitive substring containment of the label in the
/// criterion, not equality: "Кашель" matches "Кашель <3 недель", while
/// "Увеличение лимфоузлов" does not match "Увеличение шейных лимфоузлов".
pub fn criterion_matches(
    criterion: &str,
    symptoms: &SymptomSet,
    lab_findings: &LabFindingSet,
) -> bool {
    symptoms
        .iter()
        .any(|symptom| criterion.contains(symptom.label()))
        || lab_findings
            .iter()
            .any(|finding| criterion.contains(finding.label()))
}

/// Profiles whose matched-criteria count reaches their threshold, in
/// knowledge base order.
pub fn match_guidelines(
    symptoms: &SymptomSet,
    lab_findings: &LabFindingSet,
) -> Vec<GuidelineMatch> {
    profiles()
        .iter()
        .filter_map(|profile| {
            let matched_criteria: Vec<&'static str> = profile
                .criteria
                .iter()
                .copied()
                .filter(|criterion| criterion_matches(criterion, symptoms, lab_findings))
                .collect();
            (matched_criteria.len() >= profile.required_criteria).then(|| GuidelineMatch {
                condition: profile.condition,
                matched_criteria,
                total_criteria: profile.total_criteria(),
                profile,
            })
        })
        .collect()
}

pub fn match_case(case: &Case) -> Vec<GuidelineMatch> {
    match_guidelines(&case.symptoms, &case.lab_findings)
}
