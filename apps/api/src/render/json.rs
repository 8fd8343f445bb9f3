use serde::Serialize;

use crate::models::{PersonalInfo, Resume, Section};

/// Borrowed JSON view of a resume.
///
/// Shape: `{"personalInfo": {...}, "sections": [{"type": ..., ...}]}`.
/// `personalInfo` is omitted entirely when unset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<&'a PersonalInfo>,
    pub sections: &'a [Section],
}

impl<'a> From<&'a Resume> for ResumeDocument<'a> {
    fn from(resume: &'a Resume) -> Self {
        Self {
            personal_info: resume.personal_info(),
            sections: resume.sections(),
        }
    }
}

/// Pretty-printed (2-space indented) JSON export of the resume.
pub fn to_json_string(resume: &Resume) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ResumeDocument::from(resume))
}
