use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Body temperature above which a selected fever counts, in °C.
pub const FEVER_THRESHOLD_C: f64 = 38.0;
/// White blood cell count above which leukocytosis counts, ×10⁹/л.
pub const LEUKOCYTOSIS_THRESHOLD: f64 = 10.0;
/// C-reactive protein above which an elevated CRP counts, мг/л.
pub const CRP_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalSign {
    Temperature,
    WhiteBloodCells,
    CReactiveProtein,
}

impl VitalSign {
    /// Accepted input range, inclusive.
    pub const fn range(self) -> (f64, f64) {
        match self {
            VitalSign::Temperature => (35.0, 42.0),
            VitalSign::WhiteBloodCells => (1.0, 50.0),
            VitalSign::CReactiveProtein => (0.0, 200.0),
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            VitalSign::Temperature => "°C",
            VitalSign::WhiteBloodCells => "×10⁹/л",
            VitalSign::CReactiveProtein => "мг/л",
        }
    }
}

impl fmt::Display for VitalSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VitalSign::Temperature => "temperature",
            VitalSign::WhiteBloodCells => "wbc",
            VitalSign::CReactiveProtein => "crp",
        };
        f.write_str(name)
    }
}

/// Numeric measurements entered alongside the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    /// Body temperature, °C.
    pub temperature: f64,
    /// White blood cell count, ×10⁹/л.
    pub wbc: f64,
    /// C-reactive protein, мг/л.
    pub crp: f64,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            temperature: 37.0,
            wbc: 6.0,
            crp: 2.0,
        }
    }
}

impl Vitals {
    #[must_use]
    pub fn new(temperature: f64, wbc: f64, crp: f64) -> Self {
        Self {
            temperature,
            wbc,
            crp,
        }
    }

    pub fn value(&self, vital: VitalSign) -> f64 {
        match vital {
            VitalSign::Temperature => self.temperature,
            VitalSign::WhiteBloodCells => self.wbc,
            VitalSign::CReactiveProtein => self.crp,
        }
    }

    /// Check every value against its accepted input range.
    ///
    /// NaN is rejected along with out-of-range values.
    pub fn validate(&self) -> Result<()> {
        for vital in [
            VitalSign::Temperature,
            VitalSign::WhiteBloodCells,
            VitalSign::CReactiveProtein,
        ] {
            let value = self.value(vital);
            let (min, max) = vital.range();
            if !(min..=max).contains(&value) {
                return Err(ModelError::VitalOutOfRange {
                    vital,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}
