use serde::Serialize;

use crate::condition::{Condition, ConditionProfile};

/// Number of runner-up conditions reported as the differential.
pub const DIFFERENTIAL_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionScore {
    pub condition: Condition,
    pub score: i32,
}

/// Scores for every condition, highest first.
///
/// Always holds exactly one entry per [`Condition`]; equal scores keep
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreResult {
    ranked: Vec<ConditionScore>,
}

impl ScoreResult {
    /// Rank scores given in [`Condition::ALL`] order.
    #[must_use]
    pub fn from_declared(scores: [i32; Condition::COUNT]) -> Self {
        let mut ranked: Vec<ConditionScore> = Condition::ALL
            .into_iter()
            .zip(scores)
            .map(|(condition, score)| ConditionScore { condition, score })
            .collect();
        // sort_by is stable, so ties stay in declaration order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        Self { ranked }
    }

    pub fn ranked(&self) -> &[ConditionScore] {
        &self.ranked
    }

    /// The probable diagnosis.
    pub fn top(&self) -> ConditionScore {
        self.ranked[0]
    }

    /// The next [`DIFFERENTIAL_SIZE`] conditions after the top pick.
    pub fn differential(&self) -> &[ConditionScore] {
        &self.ranked[1..=DIFFERENTIAL_SIZE]
    }

    pub fn score_of(&self, condition: Condition) -> i32 {
        self.ranked
            .iter()
            .find(|entry| entry.condition == condition)
            .map(|entry| entry.score)
            .unwrap_or_default()
    }
}

/// A knowledge base profile whose criteria threshold was met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidelineMatch {
    pub condition: Condition,
    /// Matched criteria in profile order.
    pub matched_criteria: Vec<&'static str>,
    pub total_criteria: usize,
    pub profile: &'static ConditionProfile,
}

impl GuidelineMatch {
    pub fn matched_count(&self) -> usize {
        self.matched_criteria.len()
    }
}
