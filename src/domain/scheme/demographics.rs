//! Respondent demographic value objects.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Respondent gender, stored under its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "L")]
    Male,
    #[serde(rename = "P")]
    Female,
}

impl Gender {
    /// The stored single-letter code. Also the raw sort value.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "L",
            Gender::Female => "P",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One age bracket of the survey scheme, with its numeric bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBracketDef {
    pub label: String,
    pub min: u32,
    pub max: u32,
}

impl AgeBracketDef {
    pub fn new(label: impl Into<String>, min: u32, max: u32) -> Self {
        Self {
            label: label.into(),
            min,
            max,
        }
    }
}

/// Parses the numeric lower bound out of an age-bracket label, e.g.
/// `"17-24 Tahun"` -> 17. Missing or non-numeric labels sort as 0.
pub fn age_lower_bound(label: &str) -> u32 {
    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn gender_empty_as_none<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    // Stored rows may carry "" for an unset gender; treat that as absent
    // instead of failing the whole row.
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("L") => Some(Gender::Male),
        Some("P") => Some(Gender::Female),
        _ => None,
    })
}

/// Demographic record attached to one response.
///
/// Every field is required before a submission is accepted, but stored rows
/// are tolerated with fields absent; display and sorting fall back to
/// empty values for those.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Respondent {
    #[serde(default, deserialize_with = "gender_empty_as_none")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub occupation: Option<String>,
    #[serde(rename = "age", default, deserialize_with = "empty_as_none")]
    pub age_bracket: Option<String>,
}

impl Respondent {
    /// An empty record, as held by a kiosk session before any selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Names of the fields that are still unset, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.education.is_none() {
            missing.push("education");
        }
        if self.occupation.is_none() {
            missing.push("occupation");
        }
        if self.age_bracket.is_none() {
            missing.push("age");
        }
        missing
    }

    /// True when every demographic field has been selected.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Raw sort value for the gender column.
    pub fn gender_sort_value(&self) -> &str {
        self.gender.map(|g| g.code()).unwrap_or("")
    }

    /// Raw sort value for the education column.
    pub fn education_sort_value(&self) -> &str {
        self.education.as_deref().unwrap_or("")
    }

    /// Raw sort value for the occupation column.
    pub fn occupation_sort_value(&self) -> &str {
        self.occupation.as_deref().unwrap_or("")
    }

    /// Numeric sort value for the age column: the bracket's lower bound.
    pub fn age_sort_value(&self) -> u32 {
        self.age_bracket
            .as_deref()
            .map(age_lower_bound)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_serializes_as_single_letter_code() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"L\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"P\"");
    }

    #[test]
    fn age_lower_bound_parses_leading_digits() {
        assert_eq!(age_lower_bound("17-24 Tahun"), 17);
        assert_eq!(age_lower_bound("65 Tahun ke atas"), 65);
        assert_eq!(age_lower_bound(""), 0);
        assert_eq!(age_lower_bound("Tahun 17"), 0);
    }

    #[test]
    fn respondent_missing_fields_lists_unset_fields_in_form_order() {
        let respondent = Respondent {
            gender: Some(Gender::Female),
            education: None,
            occupation: Some("Karyawan".to_string()),
            age_bracket: None,
        };
        assert_eq!(respondent.missing_fields(), vec!["education", "age"]);
        assert!(!respondent.is_complete());
    }

    #[test]
    fn respondent_is_complete_when_all_fields_set() {
        let respondent = Respondent {
            gender: Some(Gender::Male),
            education: Some("SMA".to_string()),
            occupation: Some("Wiraswasta".to_string()),
            age_bracket: Some("25-34 Tahun".to_string()),
        };
        assert!(respondent.is_complete());
        assert!(respondent.missing_fields().is_empty());
    }

    #[test]
    fn respondent_tolerates_empty_strings_in_stored_rows() {
        let json = r#"{"gender":"","education":"","occupation":"PNS/TNI/Polri","age":""}"#;
        let respondent: Respondent = serde_json::from_str(json).unwrap();
        assert_eq!(respondent.gender, None);
        assert_eq!(respondent.education, None);
        assert_eq!(respondent.occupation.as_deref(), Some("PNS/TNI/Polri"));
        assert_eq!(respondent.age_bracket, None);
    }

    #[test]
    fn respondent_tolerates_missing_keys_in_stored_rows() {
        let respondent: Respondent = serde_json::from_str("{}").unwrap();
        assert_eq!(respondent.missing_fields().len(), 4);
    }

    #[test]
    fn respondent_sort_values_fall_back_to_empty() {
        let respondent = Respondent::empty();
        assert_eq!(respondent.gender_sort_value(), "");
        assert_eq!(respondent.education_sort_value(), "");
        assert_eq!(respondent.occupation_sort_value(), "");
        assert_eq!(respondent.age_sort_value(), 0);
    }

    #[test]
    fn respondent_age_sort_value_uses_bracket_lower_bound() {
        let respondent = Respondent {
            age_bracket: Some("45-54 Tahun".to_string()),
            ..Respondent::empty()
        };
        assert_eq!(respondent.age_sort_value(), 45);
    }

    #[test]
    fn respondent_roundtrips_through_json() {
        let respondent = Respondent {
            gender: Some(Gender::Male),
            education: Some("S1".to_string()),
            occupation: Some("Karyawan".to_string()),
            age_bracket: Some("35-44 Tahun".to_string()),
        };
        let json = serde_json::to_string(&respondent).unwrap();
        let back: Respondent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, respondent);
    }
}
