use std::fmt;

use serde::{Deserialize, Serialize};

/// A condition the questionnaire scores, in declaration order.
///
/// The declaration order is significant: ranking ties and guideline output
/// both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Pneumonia,
    Pharyngitis,
    Uti,
    Bronchitis,
    Influenza,
}

impl Condition {
    pub const COUNT: usize = 5;

    pub const ALL: [Condition; Condition::COUNT] = [
        Condition::Pneumonia,
        Condition::Pharyngitis,
        Condition::Uti,
        Condition::Bronchitis,
        Condition::Influenza,
    ];

    /// Diagnosis name as shown in the conclusion.
    pub const fn display_name(self) -> &'static str {
        match self {
            Condition::Pneumonia => "Пневмония",
            Condition::Pharyngitis => "Стрептококковая ангина",
            Condition::Uti => "Инфекция мочевых путей",
            Condition::Bronchitis => "Острый бронхит",
            Condition::Influenza => "Грипп",
        }
    }

    /// Position in declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A clinical guideline entry from the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionProfile {
    pub condition: Condition,
    /// Stable snake_case identifier, e.g. `community_acquired_pneumonia`.
    pub key: &'static str,
    /// Diagnostic criteria in guideline order.
    pub criteria: &'static [&'static str],
    /// Matched criteria needed for the profile to apply.
    pub required_criteria: usize,
    pub recommended_treatment: &'static str,
    /// Guideline citation.
    pub source: &'static str,
}

impl ConditionProfile {
    pub fn total_criteria(&self) -> usize {
        self.criteria.len()
    }

    /// Human-readable heading derived from the key
    /// (`urinary_tract_infection` becomes `Urinary Tract Infection`).
    pub fn title(&self) -> String {
        self.key
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
