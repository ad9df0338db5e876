//! Copy-level configuration records: brief, audience segment and offer.

use serde::Deserialize;

/// The copy configuration chosen in the editor. Everything is optional;
/// the UI defaults `copyType` to `outro` when the user picks nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyBrief {
    pub copy_type: Option<String>,
    pub framework: Option<String>,
    pub objective: Option<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    pub emotional_focus: Option<String>,
}

/// Demographic sub-fields of an audience segment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Demographics {
    #[serde(alias = "ageRange")]
    pub age_range: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "incomeLevel")]
    pub income_level: Option<String>,
    #[serde(alias = "educationLevel")]
    pub education_level: Option<String>,
}

impl Demographics {
    /// Present sub-field values in fixed order: age, gender, location,
    /// income, education.
    pub fn present_values(&self) -> Vec<&str> {
        [
            &self.age_range,
            &self.gender,
            &self.location,
            &self.income_level,
            &self.education_level,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref().map(str::trim).filter(|v| !v.is_empty()))
        .collect()
    }
}

/// Audience segment attached to a copy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudienceSegment {
    pub name: Option<String>,
    pub description: Option<String>,
    pub demographics: Option<Demographics>,
    #[serde(default, alias = "painPoints")]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub desires: Vec<String>,
}

/// Offer attached to a copy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Offer {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "valueProposition")]
    pub value_proposition: Option<String>,
    #[serde(alias = "mainBenefit")]
    pub main_benefit: Option<String>,
    #[serde(default, alias = "secondaryBenefits")]
    pub secondary_benefits: Vec<String>,
    #[serde(default)]
    pub differentials: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_deserializes_camel_case() {
        let brief: CopyBrief = serde_json::from_str(
            r#"{"copyType": "email", "emotionalFocus": "dor", "styles": ["storytelling"]}"#,
        )
        .unwrap();
        assert_eq!(brief.copy_type.as_deref(), Some("email"));
        assert_eq!(brief.emotional_focus.as_deref(), Some("dor"));
        assert_eq!(brief.styles, vec!["storytelling"]);
    }

    #[test]
    fn demographics_accepts_both_wire_spellings() {
        let snake: Demographics =
            serde_json::from_str(r#"{"age_range": "25-34", "gender": "feminino"}"#).unwrap();
        let camel: Demographics =
            serde_json::from_str(r#"{"ageRange": "25-34", "gender": "feminino"}"#).unwrap();
        assert_eq!(snake.present_values(), camel.present_values());
    }

    #[test]
    fn demographics_values_keep_fixed_order() {
        let demographics = Demographics {
            education_level: Some("superior".to_string()),
            age_range: Some("25-34".to_string()),
            ..Default::default()
        };
        assert_eq!(demographics.present_values(), vec!["25-34", "superior"]);
    }
}
