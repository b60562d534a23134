//! Integration tests for guideline matching.

use std::collections::BTreeSet;

use ddx_core::{criterion_matches, match_guidelines, score};
use ddx_model::{Condition, LabFinding, LabFindingSet, Symptom, SymptomSet, Vitals};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn matched_conditions(symptoms: &SymptomSet, labs: &LabFindingSet) -> Vec<Condition> {
    match_guidelines(symptoms, labs)
        .iter()
        .map(|m| m.condition)
        .collect()
}

#[test]
fn empty_input_matches_nothing() {
    assert!(match_guidelines(&SymptomSet::new(), &LabFindingSet::new()).is_empty());
}

#[test]
fn pneumonia_profile_matches_three_criteria() {
    let symptoms = SymptomSet::from([Symptom::Cough, Symptom::Dyspnea, Symptom::Fever]);
    let matches = match_guidelines(&symptoms, &LabFindingSet::new());

    assert_eq!(matches.len(), 1);
    let pneumonia = &matches[0];
    assert_eq!(pneumonia.condition, Condition::Pneumonia);
    assert_eq!(
        pneumonia.matched_criteria,
        vec!["Лихорадка >38°C", "Кашель", "Одышка"]
    );
    assert_eq!(pneumonia.total_criteria, 5);
    assert_eq!(pneumonia.profile.key, "community_acquired_pneumonia");
}

#[test]
fn lab_labels_count_towards_criteria() {
    let symptoms = SymptomSet::from([Symptom::Fever]);
    let labs = LabFindingSet::from([LabFinding::Leukocytosis, LabFinding::ElevatedCrp]);
    let matches = match_guidelines(&symptoms, &labs);

    assert_eq!(matched_conditions(&symptoms, &labs), vec![Condition::Pneumonia]);
    assert_eq!(matches[0].matched_count(), 3);
}

#[test]
fn uti_needs_only_two_criteria() {
    let symptoms = SymptomSet::from([Symptom::Dysuria]);
    let labs = LabFindingSet::from([LabFinding::Pyuria]);
    let matches = match_guidelines(&symptoms, &labs);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].condition, Condition::Uti);
    assert_eq!(
        matches[0].matched_criteria,
        vec!["Дизурия", "Лейкоциты в моче"]
    );
}

#[test]
fn nitrite_label_does_not_match_nitrite_test_criterion() {
    let labs = LabFindingSet::from([LabFinding::UrineNitrites]);
    assert!(!criterion_matches(
        "Положительный нитритный тест",
        &SymptomSet::new(),
        &labs
    ));
}

#[test]
fn classic_pharyngitis_falls_short_on_literal_wording() {
    let symptoms = SymptomSet::from([
        Symptom::SoreThroat,
        Symptom::TonsilExudate,
        Symptom::Fever,
        Symptom::Lymphadenopathy,
    ]);
    let labs = LabFindingSet::new();

    // "Увеличение лимфоузлов" is not a substring of "Увеличение шейных лимфоузлов"
    assert!(!criterion_matches(
        "Увеличение шейных лимфоузлов",
        &symptoms,
        &labs
    ));
    // and no label spells out "Отсутствие кашля"
    assert!(!criterion_matches("Отсутствие кашля", &symptoms, &labs));

    assert!(matched_conditions(&symptoms, &labs).is_empty());
}

#[test]
fn substring_policy_is_one_directional() {
    let cough = SymptomSet::from([Symptom::Cough]);
    let sputum = SymptomSet::from([Symptom::ProductiveCough]);
    let fever = SymptomSet::from([Symptom::Fever]);
    let none = LabFindingSet::new();

    assert!(criterion_matches("Кашель <3 недель", &cough, &none));
    assert!(!criterion_matches("Кашель", &sputum, &none));
    // the influenza criterion is shorter than the fever label
    assert!(!criterion_matches("Лихорадка", &fever, &none));
    // the fever label is not a substring of the bronchitis criterion
    assert!(!criterion_matches("Отсутствие лихорадки >38°C", &fever, &none));
}

#[test]
fn output_follows_declaration_order() {
    let symptoms = SymptomSet::from([
        Symptom::AbruptOnset,
        Symptom::Headache,
        Symptom::Myalgia,
        Symptom::Dysuria,
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Dyspnea,
    ]);
    let labs = LabFindingSet::from([LabFinding::Pyuria]);

    assert_eq!(
        matched_conditions(&symptoms, &labs),
        vec![Condition::Pneumonia, Condition::Uti, Condition::Influenza]
    );
}

#[test]
fn output_order_is_independent_of_score_order() {
    let symptoms = SymptomSet::from([
        Symptom::AbruptOnset,
        Symptom::Headache,
        Symptom::Myalgia,
        Symptom::Fatigue,
        Symptom::Dysuria,
    ]);
    let labs = LabFindingSet::from([LabFinding::Pyuria]);
    let ranked = score(&symptoms, &labs, &Vitals::default());

    assert_eq!(ranked.top().condition, Condition::Influenza);
    assert_eq!(
        matched_conditions(&symptoms, &labs),
        vec![Condition::Uti, Condition::Influenza]
    );
}

fn symptom_subset() -> impl Strategy<Value = Vec<Symptom>> {
    subsequence(Symptom::ALL.to_vec(), 0..=Symptom::ALL.len())
}

fn lab_subset() -> impl Strategy<Value = Vec<LabFinding>> {
    subsequence(LabFinding::ALL.to_vec(), 0..=LabFinding::ALL.len())
}

proptest! {
    #[test]
    fn adding_labels_never_removes_a_match(
        base_symptoms in symptom_subset(),
        extra_symptoms in symptom_subset(),
        base_labs in lab_subset(),
        extra_labs in lab_subset()
    ) {
        let symptoms: SymptomSet = base_symptoms.iter().copied().collect();
        let labs: LabFindingSet = base_labs.iter().copied().collect();
        let before: BTreeSet<Condition> = matched_conditions(&symptoms, &labs).into_iter().collect();

        let mut more_symptoms = symptoms.clone();
        more_symptoms.extend(extra_symptoms);
        let mut more_labs = labs.clone();
        more_labs.extend(extra_labs);
        let after: BTreeSet<Condition> =
            matched_conditions(&more_symptoms, &more_labs).into_iter().collect();

        prop_assert!(before.is_subset(&after));
        prop_assert!(after.len() <= Condition::COUNT);
    }

    #[test]
    fn matching_is_idempotent(symptoms in symptom_subset(), labs in lab_subset()) {
        let symptoms: SymptomSet = symptoms.into_iter().collect();
        let labs: LabFindingSet = labs.into_iter().collect();
        prop_assert_eq!(
            match_guidelines(&symptoms, &labs),
            match_guidelines(&symptoms, &labs)
        );
    }

    #[test]
    fn every_match_meets_its_threshold(symptoms in symptom_subset(), labs in lab_subset()) {
        let symptoms: SymptomSet = symptoms.into_iter().collect();
        let labs: LabFindingSet = labs.into_iter().collect();
        for m in match_guidelines(&symptoms, &labs) {
            prop_assert!(m.matched_count() >= m.profile.required_criteria);
            prop_assert!(m.matched_count() <= m.total_criteria);
        }
    }

    #[test]
    fn ranking_always_covers_every_condition(
        symptoms in symptom_subset(),
        labs in lab_subset(),
        temperature in 35.0f64..=42.0,
        wbc in 1.0f64..=50.0,
        crp in 0.0f64..=200.0
    ) {
        let symptoms: SymptomSet = symptoms.into_iter().collect();
        let labs: LabFindingSet = labs.into_iter().collect();
        let vitals = Vitals::new(temperature, wbc, crp);
        let result = score(&symptoms, &labs, &vitals);

        let seen: BTreeSet<Condition> = result.ranked().iter().map(|e| e.condition).collect();
        prop_assert_eq!(seen.len(), Condition::COUNT);
        for pair in result.ranked().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].condition < pair[1].condition);
            }
        }
        prop_assert_eq!(&result, &score(&symptoms, &labs, &vitals));
    }
}
