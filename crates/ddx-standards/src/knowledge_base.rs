//! Clinical guideline knowledge base.
//!
//! Five condition profiles summarising IDSA/ATS, NICE and WHO guidance.
//! Criteria wording is compared by substring against questionnaire labels,
//! so edits here change which profiles match.

use std::collections::HashMap;
use std::sync::LazyLock;

use ddx_model::{Condition, ConditionProfile};

/// Organisations whose guidelines the knowledge base draws on.
pub const GUIDELINE_ORGANIZATIONS: &[&str] = &[
    "IDSA (Infectious Diseases Society of America)",
    "NICE (National Institute for Health and Care Excellence)",
    "WHO (Всемирная организация здравоохранения)",
];

/// Profiles in [`Condition`] declaration order.
static PROFILES: [ConditionProfile; Condition::COUNT] = [
    ConditionProfile {
        condition: Condition::Pneumonia,
        key: "community_acquired_pneumonia",
        criteria: &[
            "Лихорадка >38°C",
            "Кашель",
            "Одышка",
            "Лейкоцитоз >10×10⁹/л",
            "Повышение СРБ >20 мг/л",
        ],
        required_criteria: 3,
        recommended_treatment: "Амоксициллин/клавуланат 875/125 мг 2 раза/сут × 7-10 дней",
        source: "IDSA/ATS Guidelines 2019",
    },
    ConditionProfile {
        condition: Condition::Pharyngitis,
        key: "streptococcal_pharyngitis",
        criteria: &[
            "Боль в горле",
            "Лихорадка >38°C",
            "Налеты на миндалинах",
            "Увеличение шейных лимфоузлов",
            "Отсутствие кашля",
        ],
        required_criteria: 4,
        recommended_treatment: "Феноксиметилпенициллин 500 мг 3 раза/сут × 10 дней",
        source: "IDSA Pharyngitis Guidelines 2012",
    },
    ConditionProfile {
        condition: Condition::Uti,
        key: "urinary_tract_infection",
        criteria: &[
            "Дизурия",
            "Учащенное мочеиспускание",
            "Лихорадка >38°C",
            "Лейкоциты в моче",
            "Положительный нитритный тест",
        ],
        required_criteria: 2,
        recommended_treatment: "Цефтриаксон 1 г/сут в/м × 7 дней",
        source: "IDSA UTI Guidelines 2022",
    },
    ConditionProfile {
        condition: Condition::Bronchitis,
        key: "acute_bronchitis",
        criteria: &[
            "Кашель <3 недель",
            "Может быть продуктивным",
            "Отсутствие лихорадки >38°C",
            "Отсутствие одышки",
            "Нормальные показатели воспаления",
        ],
        required_criteria: 3,
        recommended_treatment: "Антибиотики НЕ ПОКАЗАНЫ - симптоматическая терапия",
        source: "NICE Bronchitis Guidelines 2023",
    },
    ConditionProfile {
        condition: Condition::Influenza,
        key: "influenza",
        criteria: &[
            "Внезапное начало",
            "Лихорадка",
            "Головная боль",
            "Мышечные боли",
            "Сезонность",
        ],
        required_criteria: 3,
        recommended_treatment: "Антибиотики НЕ эффективны - противовирусная терапия",
        source: "WHO Influenza Guidelines 2023",
    },
];

static PROFILES_BY_KEY: LazyLock<HashMap<&'static str, &'static ConditionProfile>> =
    LazyLock::new(|| {
        PROFILES
            .iter()
            .map(|profile| (profile.key, profile))
            .collect()
    });

/// All profiles in declaration order.
pub fn profiles() -> &'static [ConditionProfile] {
    &PROFILES
}

pub fn profile_for(condition: Condition) -> &'static ConditionProfile {
    &PROFILES[condition.index()]
}

/// Look up a profile by its snake_case key (case-insensitive).
pub fn profile_by_key(key: &str) -> Option<&'static ConditionProfile> {
    PROFILES_BY_KEY
        .get(key.trim().to_ascii_lowercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_follow_condition_order() {
        for (profile, condition) in PROFILES.iter().zip(Condition::ALL) {
            assert_eq!(profile.condition, condition);
            assert_eq!(profile_for(condition).key, profile.key);
        }
    }
}
