use std::fmt;

use serde::{Serialize, Serializer};

pub const EDUCATION_TITLE: &str = "Education";
pub const EXPERIENCE_TITLE: &str = "Experience";
pub const SKILL_TITLE: &str = "Skill";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub contact: String,
    pub email: String,
}

impl PersonalInfo {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    /// Exported as a string for compatibility with existing resume.json consumers.
    #[serde(rename = "year", serialize_with = "year_as_string")]
    pub year_of_graduation: i32,
}

impl Education {
    pub fn new(
        degree: impl Into<String>,
        institution: impl Into<String>,
        year_of_graduation: i32,
    ) -> Self {
        Self {
            degree: degree.into(),
            institution: institution.into(),
            year_of_graduation,
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.degree, self.institution, self.year_of_graduation
        )
    }
}

/// Education entry that may carry an honors/distinction note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcademicEducation {
    #[serde(flatten)]
    pub education: Education,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honors: Option<String>,
}

impl AcademicEducation {
    /// An empty `honors` string is stored as no honors at all.
    pub fn new(
        degree: impl Into<String>,
        institution: impl Into<String>,
        year_of_graduation: i32,
        honors: impl Into<String>,
    ) -> Self {
        let honors = honors.into();
        Self {
            education: Education::new(degree, institution, year_of_graduation),
            honors: (!honors.is_empty()).then_some(honors),
        }
    }
}

impl fmt::Display for AcademicEducation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.honors.as_deref() {
            Some(honors) if !honors.is_empty() => write!(f, "{} ({honors})", self.education),
            _ => write!(f, "{}", self.education),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl Experience {
    pub fn new(
        role: impl Into<String>,
        company: impl Into<String>,
        duration: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            company: company.into(),
            duration: duration.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}\n  {}",
            self.role, self.company, self.duration, self.description
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.name)
    }
}

/// One structured resume entry. The serialized `type` tag is the variant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Section {
    Education(Education),
    AcademicEducation(AcademicEducation),
    Experience(Experience),
    Skill(Skill),
}

impl Section {
    /// Category label used to group sections for display.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Education(_) | Section::AcademicEducation(_) => EDUCATION_TITLE,
            Section::Experience(_) => EXPERIENCE_TITLE,
            Section::Skill(_) => SKILL_TITLE,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Section::Education(_) => "Education",
            Section::AcademicEducation(_) => "AcademicEducation",
            Section::Experience(_) => "Experience",
            Section::Skill(_) => "Skill",
        }
    }

    pub fn is_education(&self) -> bool {
        matches!(self, Section::Education(_) | Section::AcademicEducation(_))
    }

    pub fn as_experience(&self) -> Option<&Experience> {
        match self {
            Section::Experience(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_skill(&self) -> bool {
        matches!(self, Section::Skill(_))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Education(e) => fmt::Display::fmt(e, f),
            Section::AcademicEducation(e) => fmt::Display::fmt(e, f),
            Section::Experience(e) => fmt::Display::fmt(e, f),
            Section::Skill(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<Education> for Section {
    fn from(value: Education) -> Self {
        Section::Education(value)
    }
}

impl From<AcademicEducation> for Section {
    fn from(value: AcademicEducation) -> Self {
        Section::AcademicEducation(value)
    }
}

impl From<Experience> for Section {
    fn from(value: Experience) -> Self {
        Section::Experience(value)
    }
}

impl From<Skill> for Section {
    fn from(value: Skill) -> Self {
        Section::Skill(value)
    }
}

/// Personal info plus an append-only, insertion-ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resume {
    personal_info: Option<PersonalInfo>,
    sections: Vec<Section>,
}

impl Resume {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_personal_info(&mut self, info: PersonalInfo) {
        self.personal_info = Some(info);
    }

    pub fn add_section(&mut self, section: impl Into<Section>) {
        self.sections.push(section.into());
    }

    pub fn personal_info(&self) -> Option<&PersonalInfo> {
        self.personal_info.as_ref()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Groups sections by title, in the order each title was first added.
    pub fn sections_by_title(&self) -> Vec<(&'static str, Vec<&Section>)> {
        let mut groups: Vec<(&'static str, Vec<&Section>)> = Vec::new();
        for section in &self.sections {
            let title = section.title();
            match groups.iter_mut().find(|(t, _)| *t == title) {
                Some((_, members)) => members.push(section),
                None => groups.push((title, vec![section])),
            }
        }
        groups
    }
}

fn year_as_string<S: Serializer>(year: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(year)
}
