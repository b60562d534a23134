//! Tests for ddx-model types.

use ddx_model::{
    Case, Condition, ConditionProfile, LabFinding, ModelError, ScoreResult, Symptom, Vitals,
};

#[test]
fn case_deserializes_keys_and_labels() {
    let json = r#"{
        "symptoms": ["cough", "Одышка", "fever"],
        "lab_findings": ["Повышение СРБ >20 мг/л"],
        "vitals": { "temperature": 38.6, "crp": 45.0 }
    }"#;
    let case: Case = serde_json::from_str(json).expect("parse case");

    assert!(case.has_symptom(Symptom::Cough));
    assert!(case.has_symptom(Symptom::Dyspnea));
    assert!(case.has_symptom(Symptom::Fever));
    assert!(case.has_lab_finding(LabFinding::ElevatedCrp));
    assert_eq!(case.vitals, Vitals::new(38.6, 6.0, 45.0));
}

#[test]
fn empty_case_uses_default_vitals() {
    let case: Case = serde_json::from_str("{}").expect("parse case");
    assert!(case.symptoms.is_empty());
    assert!(case.lab_findings.is_empty());
    assert_eq!(case.vitals, Vitals::default());
}

#[test]
fn case_serializes_with_keys() {
    let case = Case::new()
        .with_symptoms([Symptom::SoreThroat])
        .with_lab_findings([LabFinding::UrineNitrites]);
    let json = serde_json::to_value(&case).expect("serialize case");
    assert_eq!(json["symptoms"][0], "sore_throat");
    assert_eq!(json["lab_findings"][0], "urine_nitrites");
}

#[test]
fn unknown_label_is_rejected() {
    let result: Result<Case, _> = serde_json::from_str(r#"{"symptoms": ["rash"]}"#);
    assert!(result.is_err());
    assert_eq!(
        "rash".parse::<LabFinding>(),
        Err(ModelError::UnknownLabFinding("rash".to_string()))
    );
}

#[test]
fn profile_title_from_key() {
    let profile = ConditionProfile {
        condition: Condition::Uti,
        key: "urinary_tract_infection",
        criteria: &["Дизурия"],
        required_criteria: 1,
        recommended_treatment: "-",
        source: "-",
    };
    assert_eq!(profile.title(), "Urinary Tract Infection");
    assert_eq!(profile.total_criteria(), 1);
}

#[test]
fn score_result_serializes_in_rank_order() {
    let result = ScoreResult::from_declared([0, 1, 0, 3, 0]);
    let json = serde_json::to_value(&result).expect("serialize scores");
    assert_eq!(json[0]["condition"], "bronchitis");
    assert_eq!(json[0]["score"], 3);
    assert_eq!(json[1]["condition"], "pharyngitis");
    assert_eq!(json.as_array().map(Vec::len), Some(5));
}
