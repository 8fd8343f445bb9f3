use crate::models::Resume;

const BANNER_RULE: &str = "+--------------------------------------------------+";
const BANNER_TITLE: &str = "|                       RESUME                     |";
const GROUP_RULE: &str = "----------------------------------------------------";

/// Renders the boxed text resume.
///
/// The output is also the exact content of a `.txt` export, so the layout is
/// fixed: banner, optional Name/Contact/Email block, one block per section
/// title (first-seen order), closing banner. Every line ends with `\n`.
pub fn format_resume(resume: &Resume) -> String {
    let mut out = String::new();
    out.push_str(BANNER_RULE);
    out.push('\n');
    out.push_str(BANNER_TITLE);
    out.push('\n');
    out.push_str(BANNER_RULE);
    out.push_str("\n\n");

    if let Some(info) = resume.personal_info() {
        out.push_str(&format!("Name: {}\n", info.name));
        out.push_str(&format!("Contact: {}\n", info.contact));
        out.push_str(&format!("Email: {}\n\n", info.email));
    }

    for (title, sections) in resume.sections_by_title() {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        out.push_str(GROUP_RULE);
        out.push('\n');
        for section in sections {
            out.push_str(&format!("{section}\n"));
        }
        out.push('\n');
    }

    out.push_str(BANNER_RULE);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicEducation, Education, Experience, PersonalInfo, Skill};

    const HEADER: &str = "+--------------------------------------------------+\n\
                          |                       RESUME                     |\n\
                          +--------------------------------------------------+\n\n";
    const FOOTER: &str = "+--------------------------------------------------+\n";

    #[test]
    fn test_banner_width_is_52() {
        assert_eq!(BANNER_RULE.len(), 52);
        assert_eq!(BANNER_TITLE.len(), 52);
        assert_eq!(GROUP_RULE.len(), 52);
    }

    #[test]
    fn test_empty_resume_is_banner_only() {
        let text = format_resume(&Resume::new());
        assert_eq!(text, format!("{HEADER}{FOOTER}"));
    }

    #[test]
    fn test_personal_info_block() {
        let mut resume = Resume::new();
        resume.set_personal_info(PersonalInfo::new("Ada Lovelace", "555-123-4567", "ada@example.com"));
        let text = format_resume(&resume);
        let expected = format!(
            "{HEADER}Name: Ada Lovelace\nContact: 555-123-4567\nEmail: ada@example.com\n\n{FOOTER}"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_full_layout_is_byte_exact() {
        let mut resume = Resume::new();
        resume.set_personal_info(PersonalInfo::new("Ada", "5551234567", "ada@example.com"));
        resume.add_section(AcademicEducation::new("BS CS", "State U", 2024, "cum laude"));
        resume.add_section(Skill::new("Rust"));
        resume.add_section(Experience::new(
            "Engineer",
            "Acme",
            "2020-2023",
            "Led a team of 5 engineers",
        ));
        resume.add_section(Skill::new("SQL"));

        let expected = format!(
            "{HEADER}\
             Name: Ada\n\
             Contact: 5551234567\n\
             Email: ada@example.com\n\
             \n\
             EDUCATION\n\
             ----------------------------------------------------\n\
             BS CS | State U | 2024 (cum laude)\n\
             \n\
             SKILL\n\
             ----------------------------------------------------\n\
             - Rust\n\
             - SQL\n\
             \n\
             EXPERIENCE\n\
             ----------------------------------------------------\n\
             Engineer | Acme | 2020-2023\n  Led a team of 5 engineers\n\
             \n\
             {FOOTER}"
        );
        assert_eq!(format_resume(&resume), expected);
    }

    #[test]
    fn test_group_order_follows_first_seen_title() {
        let mut resume = Resume::new();
        resume.add_section(Education::new("BS", "State", 2020));
        resume.add_section(Skill::new("Rust"));
        resume.add_section(Experience::new("Dev", "Acme", "1y", "Shipped"));
        resume.add_section(Skill::new("Go"));

        let text = format_resume(&resume);
        let edu = text.find("EDUCATION").unwrap();
        let skill = text.find("SKILL").unwrap();
        let exp = text.find("EXPERIENCE").unwrap();
        assert!(edu < skill && skill < exp);
        assert_eq!(text.matches("SKILL\n").count(), 1);
        assert!(text.contains("- Rust\n- Go\n"));
    }
}
