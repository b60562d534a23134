//! Diagnostic report assembly.
//!
//! [`diagnose`] is the intake boundary: it refuses submissions the scoring
//! functions should never see, then runs the scorer and guideline matcher
//! on the full input set.

use serde::Serialize;
use tracing::{debug, info, info_span};

use ddx_model::{Case, ConditionScore, GuidelineMatch, ScoreResult};

use crate::advisory::Advisory;
use crate::error::{DiagnosisError, Result};
use crate::guidelines::match_case;
use crate::scorer::score_case;

/// Closing line of the conclusion text.
pub const RATIONALE: &str = "ОБОСНОВАНИЕ: Диагноз основан на анализе симптомов и данных обследования согласно клиническим рекомендациям.";

/// Shown when no guideline profile reaches its threshold.
pub const NO_GUIDELINE_MATCH: &str = "Случай не соответствует стандартным клиническим рекомендациям. Требуется консультация специалиста.";

/// Scale the probable-diagnosis score is quoted against.
pub const SCORE_SCALE: i32 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    case: Case,
    scores: ScoreResult,
    guideline_matches: Vec<GuidelineMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisory: Option<Advisory>,
}

impl DiagnosticReport {
    pub fn case(&self) -> &Case {
        &self.case
    }

    pub fn scores(&self) -> &ScoreResult {
        &self.scores
    }

    /// The probable diagnosis.
    pub fn top(&self) -> ConditionScore {
        self.scores.top()
    }

    pub fn differential(&self) -> &[ConditionScore] {
        self.scores.differential()
    }

    pub fn guideline_matches(&self) -> &[GuidelineMatch] {
        &self.guideline_matches
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    /// Attach experimental advisory text. Scores and matches are unaffected.
    #[must_use]
    pub fn with_advisory(mut self, advisory: Advisory) -> Self {
        self.advisory = Some(advisory);
        self
    }

    /// Plain-text conclusion: probable diagnosis, score, differential and
    /// rationale.
    pub fn conclusion_text(&self) -> String {
        let top = self.top();
        let mut text = format!(
            "ВЕРОЯТНЫЙ ДИАГНОЗ: {}\n\nБАЛЛЫ ДИАГНОСТИКИ: {}/{SCORE_SCALE}\n\nДИФФЕРЕНЦИАЛЬНАЯ ДИАГНОСТИКА:\n",
            top.condition, top.score
        );
        for (position, entry) in self.differential().iter().enumerate() {
            text.push_str(&format!(
                "{}. {} ({} баллов)\n",
                position + 1,
                entry.condition,
                entry.score
            ));
        }
        text.push('\n');
        text.push_str(RATIONALE);
        text
    }
}

/// Validate a submission and build its report.
///
/// # Errors
///
/// Returns [`DiagnosisError::NoSymptoms`] for an empty symptom selection and
/// [`DiagnosisError::InvalidVitals`] when a vital sign is outside its range.
pub fn diagnose(case: Case) -> Result<DiagnosticReport> {
    let span = info_span!(
        "diagnose",
        symptoms = case.symptoms.len(),
        lab_findings = case.lab_findings.len()
    );
    let _guard = span.enter();

    if case.symptoms.is_empty() {
        return Err(DiagnosisError::NoSymptoms);
    }
    case.vitals.validate()?;

    let scores = score_case(&case);
    let guideline_matches = match_case(&case);
    for entry in scores.ranked() {
        debug!(condition = ?entry.condition, score = entry.score, "condition scored");
    }
    let top = scores.top();
    info!(
        condition = ?top.condition,
        score = top.score,
        guideline_matches = guideline_matches.len(),
        "diagnosis complete"
    );

    Ok(DiagnosticReport {
        case,
        scores,
        guideline_matches,
        advisory: None,
    })
}
