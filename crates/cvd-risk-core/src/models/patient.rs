//! Canonical patient record consumed by every risk model.

use serde::{Deserialize, Serialize};

/// Defines a closed set of form answers with their wire strings.
macro_rules! form_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Parse the form's wire value.
            pub fn parse(value: &str) -> Option<Self> {
                match value.trim() {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The form's wire value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

form_enum!(
    /// Sex assigned at birth.
    Sex {
        Male => "male",
        Female => "female",
    }
);

form_enum!(
    /// Self-reported race/ethnicity.
    RaceEthnicity {
        White => "white",
        Black => "black",
        Hispanic => "hispanic",
        Asian => "asian",
        Other => "other",
        PreferNotToSay => "prefer_not_to_say",
    }
);

form_enum!(
    /// Yes/no form answer.
    YesNo {
        Yes => "yes",
        No => "no",
    }
);

form_enum!(
    SmokingStatus {
        Never => "never",
        Former => "former",
        Current => "current",
    }
);

form_enum!(
    /// Premature CVD in a first-degree relative.
    FamilyHistory {
        Yes => "yes",
        No => "no",
        NotSure => "not_sure",
    }
);

form_enum!(
    /// Exercise sessions per week.
    ActivityLevel {
        LessThanOnce => "<1",
        OneToThree => "1-3",
        FourPlus => "4plus",
    }
);

form_enum!(
    AlcoholIntake {
        None => "none",
        Moderate => "moderate",
        Heavy => "heavy",
    }
);

/// A validated, unit-normalized patient.
///
/// Lipid values are always stored in mg/dL whatever unit the patient
/// entered; no risk model converts units on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPatient {
    /// Age in whole years
    pub age: i32,
    pub sex_at_birth: Sex,
    pub race_ethnicity: Option<RaceEthnicity>,
    /// Systolic blood pressure in mmHg
    pub systolic_bp: i32,
    /// Diastolic blood pressure in mmHg
    pub diastolic_bp: Option<i32>,
    pub on_bp_meds: YesNo,
    pub has_lab_results: bool,
    /// Total cholesterol in mg/dL
    pub total_cholesterol: Option<f64>,
    /// HDL cholesterol in mg/dL
    pub hdl_cholesterol: Option<f64>,
    /// LDL cholesterol in mg/dL
    pub ldl_cholesterol: Option<f64>,
    /// Triglycerides in mg/dL
    pub triglycerides: Option<f64>,
    pub has_diabetes: YesNo,
    /// Free-text glucose or HbA1c note (not interpreted)
    pub glucose_or_a1c: Option<String>,
    pub smoking_status: SmokingStatus,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    /// Body mass index, one decimal
    pub bmi: Option<f64>,
    pub family_history_premature_cvd: Option<FamilyHistory>,
    pub physical_activity: Option<ActivityLevel>,
    pub alcohol_intake: Option<AlcoholIntake>,
}

impl NormalizedPatient {
    /// Minimal patient with only the always-required fields set.
    pub fn new(age: i32, sex_at_birth: Sex, systolic_bp: i32) -> Self {
        Self {
            age,
            sex_at_birth,
            race_ethnicity: None,
            systolic_bp,
            diastolic_bp: None,
            on_bp_meds: YesNo::No,
            has_lab_results: false,
            total_cholesterol: None,
            hdl_cholesterol: None,
            ldl_cholesterol: None,
            triglycerides: None,
            has_diabetes: YesNo::No,
            glucose_or_a1c: None,
            smoking_status: SmokingStatus::Never,
            height_cm: None,
            weight_kg: None,
            bmi: None,
            family_history_premature_cvd: None,
            physical_activity: None,
            alcohol_intake: None,
        }
    }

    pub fn on_bp_meds(&self) -> bool {
        self.on_bp_meds == YesNo::Yes
    }

    pub fn has_diabetes(&self) -> bool {
        self.has_diabetes == YesNo::Yes
    }

    pub fn is_current_smoker(&self) -> bool {
        self.smoking_status == SmokingStatus::Current
    }

    pub fn has_family_history(&self) -> bool {
        self.family_history_premature_cvd == Some(FamilyHistory::Yes)
    }

    pub fn is_black(&self) -> bool {
        self.race_ethnicity == Some(RaceEthnicity::Black)
    }

    /// Total and HDL cholesterol, when lab results were supplied with both.
    pub fn lipid_panel(&self) -> Option<(f64, f64)> {
        if !self.has_lab_results {
            return None;
        }
        match (self.total_cholesterol, self.hdl_cholesterol) {
            (Some(tc), Some(hdl)) => Some((tc, hdl)),
            _ => None,
        }
    }
}
