//! Raw form payloads and their conversion into validated resume values.
//!
//! All text fields are trimmed before checks, matching what a user expects
//! from a form: `"  Ada "` is stored as `"Ada"`, and a whitespace-only field
//! counts as empty.

use serde::{Deserialize, Deserializer};

use crate::builder::validation::{is_valid_contact, is_valid_email, parse_year, FormError};
use crate::models::{AcademicEducation, Education, Experience, PersonalInfo, Section, Skill};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonalInfoForm {
    pub name: String,
    pub contact: String,
    pub email: String,
}

impl PersonalInfoForm {
    pub fn validate(&self) -> Result<PersonalInfo, FormError> {
        let (name, contact, email) = (self.name.trim(), self.contact.trim(), self.email.trim());
        if name.is_empty() || contact.is_empty() || email.is_empty() {
            return Err(FormError::IncompletePersonalInfo);
        }
        if !is_valid_contact(contact) {
            return Err(FormError::InvalidContact);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(PersonalInfo::new(name, contact, email))
    }
}

/// `honors` absent yields a plain `Education`; present (even empty) yields an
/// `AcademicEducation`, which renders identically when honors is empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationForm {
    pub degree: String,
    pub institution: String,
    /// Accepts a JSON string or number; kept as text so that non-numeric input
    /// surfaces as a form error rather than a body rejection.
    #[serde(deserialize_with = "text_or_number")]
    pub year: String,
    pub honors: Option<String>,
}

impl EducationForm {
    pub fn validate(&self) -> Result<Section, FormError> {
        let (degree, institution, year) = (
            self.degree.trim(),
            self.institution.trim(),
            self.year.trim(),
        );
        if degree.is_empty() || institution.is_empty() || year.is_empty() {
            return Err(FormError::IncompleteEducation);
        }
        let year = parse_year(year)?;

        Ok(match self.honors.as_deref() {
            Some(honors) => AcademicEducation::new(degree, institution, year, honors.trim()).into(),
            None => Education::new(degree, institution, year).into(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceForm {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceForm {
    pub fn validate(&self) -> Result<Section, FormError> {
        let fields = [
            self.role.trim(),
            self.company.trim(),
            self.duration.trim(),
            self.description.trim(),
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(FormError::IncompleteExperience);
        }
        let [role, company, duration, description] = fields;
        Ok(Experience::new(role, company, duration, description).into())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillForm {
    pub name: String,
}

impl SkillForm {
    pub fn validate(&self) -> Result<Section, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingSkill);
        }
        Ok(Skill::new(name).into())
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal(name: &str, contact: &str, email: &str) -> PersonalInfoForm {
        PersonalInfoForm {
            name: name.to_string(),
            contact: contact.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_personal_info_trims_fields() {
        let info = personal("  Ada ", " +1 (555) 123-4567 ", " ada@example.com ")
            .validate()
            .unwrap();
        assert_eq!(info, PersonalInfo::new("Ada", "+1 (555) 123-4567", "ada@example.com"));
    }

    #[test]
    fn test_personal_info_missing_field() {
        assert_eq!(
            personal("Ada", "   ", "ada@example.com").validate(),
            Err(FormError::IncompletePersonalInfo)
        );
    }

    #[test]
    fn test_personal_info_contact_checked_before_email() {
        assert_eq!(
            personal("Ada", "123", "not-an-email").validate(),
            Err(FormError::InvalidContact)
        );
        assert_eq!(
            personal("Ada", "5551234567", "not-an-email").validate(),
            Err(FormError::InvalidEmail)
        );
    }

    #[test]
    fn test_education_without_honors_field_is_plain() {
        let form = EducationForm {
            degree: "BS CS".into(),
            institution: "State U".into(),
            year: " 2024".into(),
            honors: None,
        };
        let section = form.validate().unwrap();
        assert_eq!(section.type_name(), "Education");
        assert_eq!(section.to_string(), "BS CS | State U | 2024");
    }

    #[test]
    fn test_education_with_honors_is_academic() {
        let form = EducationForm {
            degree: "BS CS".into(),
            institution: "State U".into(),
            year: "2024".into(),
            honors: Some(" cum laude ".into()),
        };
        let section = form.validate().unwrap();
        assert_eq!(section.type_name(), "AcademicEducation");
        assert_eq!(section.to_string(), "BS CS | State U | 2024 (cum laude)");
    }

    #[test]
    fn test_education_invalid_year() {
        let form = EducationForm {
            degree: "BS".into(),
            institution: "State".into(),
            year: "soon".into(),
            honors: None,
        };
        assert_eq!(form.validate(), Err(FormError::InvalidYear));
    }

    #[test]
    fn test_education_missing_year() {
        let form = EducationForm {
            degree: "BS".into(),
            institution: "State".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::IncompleteEducation));
    }

    #[test]
    fn test_education_year_accepts_number_or_text() {
        let numeric: EducationForm = serde_json::from_value(serde_json::json!({
            "degree": "BS", "institution": "State", "year": 2021
        }))
        .unwrap();
        assert_eq!(numeric.year, "2021");

        let text: EducationForm = serde_json::from_value(serde_json::json!({
            "degree": "BS", "institution": "State", "year": "2021", "honors": ""
        }))
        .unwrap();
        assert_eq!(text.year, "2021");
        assert_eq!(text.honors.as_deref(), Some(""));
    }

    #[test]
    fn test_experience_requires_all_fields() {
        let form = ExperienceForm {
            role: "Dev".into(),
            company: "Acme".into(),
            duration: "1y".into(),
            description: " ".into(),
        };
        assert_eq!(form.validate(), Err(FormError::IncompleteExperience));
    }

    #[test]
    fn test_experience_valid() {
        let form = ExperienceForm {
            role: "Dev".into(),
            company: "Acme".into(),
            duration: "1y".into(),
            description: "Built the billing pipeline".into(),
        };
        let section = form.validate().unwrap();
        assert_eq!(section.to_string(), "Dev | Acme | 1y\n  Built the billing pipeline");
    }

    #[test]
    fn test_skill_form() {
        assert_eq!(SkillForm::default().validate(), Err(FormError::MissingSkill));
        let section = SkillForm { name: " Rust ".into() }.validate().unwrap();
        assert_eq!(section, Section::Skill(Skill::new("Rust")));
    }
}
