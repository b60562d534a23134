//! Tests for plain-text and table rendering.

use ddx_cli::render::{guidelines_table, render_text, vocabulary_tables};
use ddx_core::{Advisory, NO_GUIDELINE_MATCH, diagnose};
use ddx_model::{Case, LabFinding, Symptom};

fn uti_report() -> ddx_core::DiagnosticReport {
    let case = Case::new()
        .with_symptoms([Symptom::Dysuria, Symptom::UrinaryFrequency])
        .with_lab_findings([LabFinding::Pyuria]);
    diagnose(case).expect("diagnose")
}

#[test]
fn text_report_lists_matching_guidelines() {
    let text = render_text(&uti_report(), 3);
    assert!(text.starts_with("ВЕРОЯТНЫЙ ДИАГНОЗ: Инфекция мочевых путей"));
    assert!(text.contains("ПРОВЕРКА ПО КЛИНИЧЕСКИМ РЕКОМЕНДАЦИЯМ:\n1. Urinary Tract Infection\n"));
    assert!(text.contains("   Соответствие критериям: 3/5\n"));
    assert!(text.contains("   Рекомендации: IDSA UTI Guidelines 2022\n"));
    assert!(text.contains("   ✓ Дизурия\n"));
    assert!(text.contains("   ✓ Лейкоциты в моче\n"));
    assert!(!text.contains("ЭКСПЕРИМЕНТАЛЬНАЯ"));
}

#[test]
fn text_report_warns_when_nothing_matches() {
    let report = diagnose(Case::new().with_symptoms([Symptom::Headache])).expect("diagnose");
    let text = render_text(&report, 3);
    assert!(text.contains(NO_GUIDELINE_MATCH));
    assert!(!text.contains("Соответствие критериям"));
}

#[test]
fn guideline_limit_caps_rendered_matches() {
    let case = Case::new()
        .with_symptoms([
            Symptom::Cough,
            Symptom::Fever,
            Symptom::Dyspnea,
            Symptom::Dysuria,
            Symptom::UrinaryFrequency,
        ])
        .with_lab_findings([LabFinding::Leukocytosis, LabFinding::Pyuria]);
    let report = diagnose(case).expect("diagnose");
    assert!(report.guideline_matches().len() >= 2);

    let text = render_text(&report, 1);
    assert!(text.contains("\n1. "));
    assert!(!text.contains("\n2. "));
}

#[test]
fn advisory_is_rendered_under_experimental_heading() {
    let report = uti_report().with_advisory(Advisory::unavailable());
    let text = render_text(&report, 3);
    insta::assert_snapshot!(
        text.rsplit("\n\n").next().unwrap_or_default().trim_end(),
        @r"
    ЭКСПЕРИМЕНТАЛЬНАЯ ИИ-ОЦЕНКА (не является диагнозом):
    Экспериментальная ИИ-оценка недоступна
    "
    );
}

#[test]
fn vocabulary_tables_list_every_key() {
    let (symptoms, labs) = vocabulary_tables();
    let symptoms = symptoms.to_string();
    let labs = labs.to_string();
    for symptom in Symptom::ALL {
        assert!(symptoms.contains(symptom.key()));
    }
    for finding in LabFinding::ALL {
        assert!(labs.contains(finding.key()));
    }
}

#[test]
fn guidelines_table_lists_every_profile() {
    let table = guidelines_table().to_string();
    for profile in ddx_standards::profiles() {
        assert!(table.contains(profile.key));
    }
}
