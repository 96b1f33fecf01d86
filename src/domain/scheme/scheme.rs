//! The survey scheme: the static configuration surface the core reads at
//! startup.
//!
//! Counter names, question definitions, demographic option lists, and the
//! grading table all live here. The engines never hardcode any of them; a
//! deployment may replace the standard scheme with a YAML file.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CounterId, ValidationError};
use crate::domain::scoring::GradingScale;

use super::demographics::{AgeBracketDef, Respondent};
use super::question::{QuestionDef, QuestionId};

/// One service counter (loket) and the agency it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterDef {
    pub id: CounterId,
    pub name: String,
}

impl CounterDef {
    pub fn new(id: u16, name: impl Into<String>) -> Self {
        Self {
            id: CounterId::new(id),
            name: name.into(),
        }
    }
}

/// Full survey scheme: counters, questions, demographic options, grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyScheme {
    pub counters: Vec<CounterDef>,
    pub questions: Vec<QuestionDef>,
    pub education_levels: Vec<String>,
    pub occupation_categories: Vec<String>,
    pub age_brackets: Vec<AgeBracketDef>,
    pub grading: GradingScale,
}

static STANDARD: Lazy<SurveyScheme> = Lazy::new(build_standard);

impl SurveyScheme {
    /// The standard IKM scheme: 23 counters, the nine survey elements of
    /// Permenpan RB No. 14/2017, and the standard grading bands.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Parses a scheme from YAML and validates it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ValidationError> {
        let scheme: SurveyScheme = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("survey_scheme", e.to_string()))?;
        scheme.validate()?;
        Ok(scheme)
    }
}

fn build_standard() -> SurveyScheme {
    let counters = vec![
        CounterDef::new(1, "Bank Sumut"),
        CounterDef::new(2, "Polres Asahan"),
        CounterDef::new(3, "Samsat"),
        CounterDef::new(4, "Imigrasi"),
        CounterDef::new(5, "Kementerian Agama"),
        CounterDef::new(6, "Kejaksaan Negeri Kisaran"),
        CounterDef::new(7, "PLN"),
        CounterDef::new(8, "DJP"),
        CounterDef::new(9, "ATR/BPN"),
        CounterDef::new(10, "Dinas Kesehatan"),
        CounterDef::new(11, "BRI"),
        CounterDef::new(12, "Taspen"),
        CounterDef::new(13, "BPJS Ketenagakerjaan"),
        CounterDef::new(14, "Dinas Dukcapil"),
        CounterDef::new(15, "Dispenda"),
        CounterDef::new(16, "Dinas Lingkungan Hidup"),
        CounterDef::new(17, "Dinas PUTR"),
        CounterDef::new(18, "LPSE"),
        CounterDef::new(19, "Perumda Silau Piasa"),
        CounterDef::new(20, "Dinas Sosial"),
        CounterDef::new(21, "Dinas Tenaga Kerja"),
        CounterDef::new(22, "DPMPTSP"),
        CounterDef::new(23, "BPJS Kesehatan"),
    ];

    let questions = vec![
        QuestionDef::new(
            "u1",
            "Kesesuaian persyaratan pelayanan?",
            ["Tidak Sesuai", "Kurang Sesuai", "Sesuai", "Sangat Sesuai"],
        ),
        QuestionDef::new(
            "u2",
            "Kemudahan prosedur pelayanan?",
            ["Tidak Mudah", "Kurang Mudah", "Mudah", "Sangat Mudah"],
        ),
        QuestionDef::new(
            "u3",
            "Kecepatan waktu pemberian pelayanan?",
            ["Tidak Cepat", "Kurang Cepat", "Cepat", "Sangat Cepat"],
        ),
        QuestionDef::new(
            "u4",
            "Kewajaran biaya/tarif pelayanan?",
            ["Sangat Mahal", "Cukup Mahal", "Murah", "Gratis/Sangat Murah"],
        ),
        QuestionDef::new(
            "u5",
            "Kesesuaian produk pelayanan?",
            ["Tidak Sesuai", "Kurang Sesuai", "Sesuai", "Sangat Sesuai"],
        ),
        QuestionDef::new(
            "u6",
            "Kompetensi/kemampuan petugas?",
            [
                "Tidak Kompeten",
                "Kurang Kompeten",
                "Kompeten",
                "Sangat Kompeten",
            ],
        ),
        QuestionDef::new(
            "u7",
            "Perilaku kesopanan dan keramahan petugas?",
            ["Tidak Sopan", "Kurang Sopan", "Sopan", "Sangat Sopan"],
        ),
        QuestionDef::new(
            "u8",
            "Kualitas sarana dan prasarana?",
            ["Buruk", "Cukup", "Baik", "Sangat Baik"],
        ),
        QuestionDef::new(
            "u9",
            "Penanganan pengaduan dan saran?",
            [
                "Tidak Ada",
                "Ada Tapi Kurang",
                "Berfungsi",
                "Dikelola Sangat Baik",
            ],
        ),
    ];

    SurveyScheme {
        counters,
        questions,
        education_levels: ["SD", "SMP", "SMA", "D1/D2/D3", "S1", "S2/S3"]
            .map(String::from)
            .to_vec(),
        occupation_categories: [
            "PNS/TNI/Polri",
            "Karyawan",
            "Wiraswasta",
            "Pelajar/Mahasiswa",
            "Buruh/Tani",
            "Lainnya",
        ]
        .map(String::from)
        .to_vec(),
        age_brackets: vec![
            AgeBracketDef::new("17-24 Tahun", 17, 24),
            AgeBracketDef::new("25-34 Tahun", 25, 34),
            AgeBracketDef::new("35-44 Tahun", 35, 44),
            AgeBracketDef::new("45-54 Tahun", 45, 54),
            AgeBracketDef::new("55-64 Tahun", 55, 64),
            AgeBracketDef::new("65 Tahun ke atas", 65, 999),
        ],
        grading: GradingScale::standard(),
    }
}

impl SurveyScheme {
    /// Checks the structural invariants of the scheme.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.counters.is_empty() {
            return Err(ValidationError::empty_field("counters"));
        }
        for (idx, counter) in self.counters.iter().enumerate() {
            // Counter ids must be contiguous, ascending from 1.
            if counter.id.value() as usize != idx + 1 {
                return Err(ValidationError::invalid_format(
                    "counters",
                    format!("counter ids must run 1..{}", self.counters.len()),
                ));
            }
        }
        if self.questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        let mut seen = std::collections::HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.clone()) {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate question id '{}'", question.id),
                ));
            }
        }
        if self.education_levels.is_empty() {
            return Err(ValidationError::empty_field("education_levels"));
        }
        if self.occupation_categories.is_empty() {
            return Err(ValidationError::empty_field("occupation_categories"));
        }
        if self.age_brackets.is_empty() {
            return Err(ValidationError::empty_field("age_brackets"));
        }
        self.grading.validate()?;
        Ok(())
    }

    /// Total number of configured counters (N).
    pub fn counter_count(&self) -> u16 {
        self.counters.len() as u16
    }

    /// All counter ids in ascending order.
    pub fn counter_ids(&self) -> impl Iterator<Item = CounterId> + '_ {
        self.counters.iter().map(|c| c.id)
    }

    /// True when the id falls inside the configured range.
    pub fn contains_counter(&self, id: CounterId) -> bool {
        id.value() >= 1 && id.value() <= self.counter_count()
    }

    /// Agency name for a counter, if configured.
    pub fn counter_name(&self, id: CounterId) -> Option<&str> {
        self.counters
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Display name for a counter, falling back to a generic label.
    pub fn counter_display_name(&self, id: CounterId) -> String {
        self.counter_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Loket {}", id))
    }

    /// Number of questions in the instrument.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// All question ids in instrument order.
    pub fn question_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.questions.iter().map(|q| &q.id)
    }

    /// Looks up a question definition.
    pub fn question(&self, id: &QuestionId) -> Option<&QuestionDef> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Looks up an age bracket by its label.
    pub fn age_bracket(&self, label: &str) -> Option<&AgeBracketDef> {
        self.age_brackets.iter().find(|b| b.label == label)
    }

    /// Validates a respondent record against the scheme: all fields selected
    /// and every value drawn from the configured option lists.
    pub fn validate_respondent(&self, respondent: &Respondent) -> Result<(), ValidationError> {
        if let Some(field) = respondent.missing_fields().first() {
            return Err(ValidationError::empty_field(*field));
        }
        if let Some(education) = &respondent.education {
            if !self.education_levels.contains(education) {
                return Err(ValidationError::invalid_format(
                    "education",
                    format!("'{}' is not a configured education level", education),
                ));
            }
        }
        if let Some(occupation) = &respondent.occupation {
            if !self.occupation_categories.contains(occupation) {
                return Err(ValidationError::invalid_format(
                    "occupation",
                    format!("'{}' is not a configured occupation", occupation),
                ));
            }
        }
        if let Some(age_bracket) = &respondent.age_bracket {
            if self.age_bracket(age_bracket).is_none() {
                return Err(ValidationError::invalid_format(
                    "age",
                    format!("'{}' is not a configured age bracket", age_bracket),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheme::Gender;

    #[test]
    fn standard_scheme_is_valid() {
        let scheme = SurveyScheme::standard();
        assert!(scheme.validate().is_ok());
    }

    #[test]
    fn standard_scheme_has_expected_dimensions() {
        let scheme = SurveyScheme::standard();
        assert_eq!(scheme.counter_count(), 23);
        assert_eq!(scheme.question_count(), 9);
        assert_eq!(scheme.education_levels.len(), 6);
        assert_eq!(scheme.occupation_categories.len(), 6);
        assert_eq!(scheme.age_brackets.len(), 6);
    }

    #[test]
    fn contains_counter_checks_configured_range() {
        let scheme = SurveyScheme::standard();
        assert!(scheme.contains_counter(CounterId::new(1)));
        assert!(scheme.contains_counter(CounterId::new(23)));
        assert!(!scheme.contains_counter(CounterId::new(0)));
        assert!(!scheme.contains_counter(CounterId::new(24)));
    }

    #[test]
    fn counter_ids_are_ascending() {
        let scheme = SurveyScheme::standard();
        let ids: Vec<u16> = scheme.counter_ids().map(|c| c.value()).collect();
        assert_eq!(ids, (1..=23).collect::<Vec<u16>>());
    }

    #[test]
    fn counter_display_name_falls_back_to_generic_label() {
        let scheme = SurveyScheme::standard();
        assert_eq!(scheme.counter_display_name(CounterId::new(3)), "Samsat");
        assert_eq!(scheme.counter_display_name(CounterId::new(99)), "Loket 99");
    }

    #[test]
    fn validate_rejects_non_contiguous_counters() {
        let mut scheme = SurveyScheme::standard();
        scheme.counters.remove(4);
        assert!(scheme.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_question_ids() {
        let mut scheme = SurveyScheme::standard();
        let dup = scheme.questions[0].clone();
        scheme.questions.push(dup);
        assert!(scheme.validate().is_err());
    }

    #[test]
    fn validate_respondent_reports_first_missing_field() {
        let scheme = SurveyScheme::standard();
        let err = scheme.validate_respondent(&Respondent::empty()).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("gender"));
    }

    #[test]
    fn validate_respondent_rejects_unknown_option_values() {
        let scheme = SurveyScheme::standard();
        let respondent = Respondent {
            gender: Some(Gender::Male),
            education: Some("Doctorate".to_string()),
            occupation: Some("Karyawan".to_string()),
            age_bracket: Some("25-34 Tahun".to_string()),
        };
        assert!(scheme.validate_respondent(&respondent).is_err());
    }

    #[test]
    fn validate_respondent_accepts_configured_values() {
        let scheme = SurveyScheme::standard();
        let respondent = Respondent {
            gender: Some(Gender::Female),
            education: Some("S1".to_string()),
            occupation: Some("PNS/TNI/Polri".to_string()),
            age_bracket: Some("35-44 Tahun".to_string()),
        };
        assert!(scheme.validate_respondent(&respondent).is_ok());
    }

    #[test]
    fn scheme_roundtrips_through_yaml() {
        let scheme = SurveyScheme::standard();
        let yaml = serde_yaml::to_string(&scheme).unwrap();
        let back = SurveyScheme::from_yaml(&yaml).unwrap();
        assert_eq!(back, scheme);
    }
}
