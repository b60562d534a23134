//! Fixed questionnaire vocabularies.
//!
//! Each entry has an ASCII key (used on the command line and in case files)
//! and the label text shown to clinicians. Guideline matching works on the
//! label text, so labels must stay byte-identical to the knowledge base
//! wording they are compared against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A symptom the clinician can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symptom {
    #[serde(rename = "fever", alias = "Лихорадка >38°C")]
    Fever,
    #[serde(rename = "chills", alias = "Озноб")]
    Chills,
    #[serde(rename = "cough", alias = "Кашель")]
    Cough,
    #[serde(rename = "productive_cough", alias = "Кашель с мокротой")]
    ProductiveCough,
    #[serde(rename = "dyspnea", alias = "Одышка")]
    Dyspnea,
    #[serde(rename = "sore_throat", alias = "Боль в горле")]
    SoreThroat,
    #[serde(rename = "tonsil_exudate", alias = "Налеты на миндалинах")]
    TonsilExudate,
    #[serde(rename = "dysuria", alias = "Дизурия")]
    Dysuria,
    #[serde(rename = "urinary_frequency", alias = "Учащенное мочеиспускание")]
    UrinaryFrequency,
    #[serde(rename = "headache", alias = "Головная боль")]
    Headache,
    #[serde(rename = "fatigue", alias = "Слабость")]
    Fatigue,
    #[serde(rename = "lymphadenopathy", alias = "Увеличение лимфоузлов")]
    Lymphadenopathy,
    #[serde(rename = "myalgia", alias = "Мышечные боли")]
    Myalgia,
    #[serde(rename = "abrupt_onset", alias = "Внезапное начало")]
    AbruptOnset,
}

impl Symptom {
    /// All symptoms in questionnaire order.
    pub const ALL: [Symptom; 14] = [
        Symptom::Fever,
        Symptom::Chills,
        Symptom::Cough,
        Symptom::ProductiveCough,
        Symptom::Dyspnea,
        Symptom::SoreThroat,
        Symptom::TonsilExudate,
        Symptom::Dysuria,
        Symptom::UrinaryFrequency,
        Symptom::Headache,
        Symptom::Fatigue,
        Symptom::Lymphadenopathy,
        Symptom::Myalgia,
        Symptom::AbruptOnset,
    ];

    /// ASCII key accepted on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Chills => "chills",
            Symptom::Cough => "cough",
            Symptom::ProductiveCough => "productive_cough",
            Symptom::Dyspnea => "dyspnea",
            Symptom::SoreThroat => "sore_throat",
            Symptom::TonsilExudate => "tonsil_exudate",
            Symptom::Dysuria => "dysuria",
            Symptom::UrinaryFrequency => "urinary_frequency",
            Symptom::Headache => "headache",
            Symptom::Fatigue => "fatigue",
            Symptom::Lymphadenopathy => "lymphadenopathy",
            Symptom::Myalgia => "myalgia",
            Symptom::AbruptOnset => "abrupt_onset",
        }
    }

    /// Questionnaire label text.
    pub const fn label(self) -> &'static str {
        match self {
            Symptom::Fever => "Лихорадка >38°C",
            Symptom::Chills => "Озноб",
            Symptom::Cough => "Кашель",
            Symptom::ProductiveCough => "Кашель с мокротой",
            Symptom::Dyspnea => "Одышка",
            Symptom::SoreThroat => "Боль в горле",
            Symptom::TonsilExudate => "Налеты на миндалинах",
            Symptom::Dysuria => "Дизурия",
            Symptom::UrinaryFrequency => "Учащенное мочеиспускание",
            Symptom::Headache => "Головная боль",
            Symptom::Fatigue => "Слабость",
            Symptom::Lymphadenopathy => "Увеличение лимфоузлов",
            Symptom::Myalgia => "Мышечные боли",
            Symptom::AbruptOnset => "Внезапное начало",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symptom {
    type Err = ModelError;

    /// Accepts either the ASCII key (case-insensitive) or the exact label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Symptom::ALL
            .into_iter()
            .find(|symptom| {
                symptom.key().eq_ignore_ascii_case(trimmed) || symptom.label() == trimmed
            })
            .ok_or_else(|| ModelError::UnknownSymptom(trimmed.to_string()))
    }
}

/// A laboratory finding the clinician can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LabFinding {
    #[serde(rename = "leukocytosis", alias = "Лейкоцитоз >10×10⁹/л")]
    Leukocytosis,
    #[serde(rename = "elevated_crp", alias = "Повышение СРБ >20 мг/л")]
    ElevatedCrp,
    #[serde(rename = "pyuria", alias = "Лейкоциты в моче")]
    Pyuria,
    #[serde(rename = "urine_nitrites", alias = "Нитриты в моче")]
    UrineNitrites,
    #[serde(rename = "normal_labs", alias = "Анализы в норме")]
    NormalLabs,
}

impl LabFinding {
    /// All lab findings in questionnaire order.
    pub const ALL: [LabFinding; 5] = [
        LabFinding::Leukocytosis,
        LabFinding::ElevatedCrp,
        LabFinding::Pyuria,
        LabFinding::UrineNitrites,
        LabFinding::NormalLabs,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            LabFinding::Leukocytosis => "leukocytosis",
            LabFinding::ElevatedCrp => "elevated_crp",
            LabFinding::Pyuria => "pyuria",
            LabFinding::UrineNitrites => "urine_nitrites",
            LabFinding::NormalLabs => "normal_labs",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LabFinding::Leukocytosis => "Лейкоцитоз >10×10⁹/л",
            LabFinding::ElevatedCrp => "Повышение СРБ >20 мг/л",
            LabFinding::Pyuria => "Лейкоциты в моче",
            LabFinding::UrineNitrites => "Нитриты в моче",
            LabFinding::NormalLabs => "Анализы в норме",
        }
    }
}

impl fmt::Display for LabFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LabFinding {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LabFinding::ALL
            .into_iter()
            .find(|finding| {
                finding.key().eq_ignore_ascii_case(trimmed) || finding.label() == trimmed
            })
            .ok_or_else(|| ModelError::UnknownLabFinding(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_labels_are_unique() {
        for (i, a) in Symptom::ALL.iter().enumerate() {
            for b in &Symptom::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.label(), b.label());
            }
        }
        for (i, a) in LabFinding::ALL.iter().enumerate() {
            for b in &LabFinding::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn parses_key_or_label() {
        assert_eq!("cough".parse::<Symptom>().unwrap(), Symptom::Cough);
        assert_eq!("COUGH".parse::<Symptom>().unwrap(), Symptom::Cough);
        assert_eq!(" Кашель ".parse::<Symptom>().unwrap(), Symptom::Cough);
        assert_eq!(
            "Повышение СРБ >20 мг/л".parse::<LabFinding>().unwrap(),
            LabFinding::ElevatedCrp
        );
        assert!(matches!(
            "sneezing".parse::<Symptom>(),
            Err(ModelError::UnknownSymptom(text)) if text == "sneezing"
        ));
    }
}
