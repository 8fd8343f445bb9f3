use thiserror::Error;

pub const MIN_CONTACT_DIGITS: usize = 7;
pub const MAX_CONTACT_DIGITS: usize = 15;

/// User-facing validation failures for form input.
/// Every variant is recoverable: the caller shows the message and re-prompts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill all personal information fields.")]
    IncompletePersonalInfo,

    #[error("Please fill all required education fields (Degree, Institution, Year).")]
    IncompleteEducation,

    #[error("Please fill all experience fields.")]
    IncompleteExperience,

    #[error("Please enter a skill.")]
    MissingSkill,

    #[error("Please enter a valid year.")]
    InvalidYear,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error(
        "Please enter a valid contact number (digits, spaces, hyphens, parentheses, and + allowed)."
    )]
    InvalidContact,

    #[error("Invalid file name '{0}': expected a plain file name without directories")]
    InvalidFilename(String),
}

/// Contact numbers may use ASCII whitespace, hyphens, parentheses and `+` as
/// separators; what remains must be 7 to 15 ASCII digits.
pub fn is_valid_contact(contact: &str) -> bool {
    let digits: String = contact
        .chars()
        .filter(|c| !(c.is_ascii_whitespace() || matches!(c, '\x0B' | '-' | '(' | ')' | '+')))
        .collect();

    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && (MIN_CONTACT_DIGITS..=MAX_CONTACT_DIGITS).contains(&digits.len())
}

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Parses a graduation year, ignoring surrounding whitespace.
pub fn parse_year(input: &str) -> Result<i32, FormError> {
    input.trim().parse().map_err(|_| FormError::InvalidYear)
}

/// Rejects anything that is not a bare file name (no separators, no `..`).
pub fn validate_filename(filename: &str) -> Result<&str, FormError> {
    let name = filename.trim();
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if invalid {
        return Err(FormError::InvalidFilename(filename.to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_with_separators_is_valid() {
        assert!(is_valid_contact("+1 (555) 123-4567"));
    }

    #[test]
    fn test_contact_too_short() {
        assert!(!is_valid_contact("123"));
    }

    #[test]
    fn test_contact_too_long() {
        assert!(!is_valid_contact("12345678901234567"));
    }

    #[test]
    fn test_contact_length_bounds() {
        assert!(is_valid_contact("1234567"));
        assert!(!is_valid_contact("123456"));
        assert!(is_valid_contact("123456789012345"));
        assert!(!is_valid_contact("1234567890123456"));
    }

    #[test]
    fn test_contact_rejects_letters() {
        assert!(!is_valid_contact("555-CALL-NOW"));
        assert!(!is_valid_contact("555.123.4567"));
    }

    #[test]
    fn test_contact_separators_are_ascii_whitespace_only() {
        assert!(is_valid_contact("555\t123\x0B4567"));
        assert!(!is_valid_contact("555\u{00A0}1234567"));
    }

    #[test]
    fn test_contact_only_separators() {
        assert!(!is_valid_contact("+ ( ) -"));
        assert!(!is_valid_contact(""));
    }

    #[test]
    fn test_email_requires_at() {
        assert!(is_valid_email("ada@example.com"));
        assert!(!is_valid_email("ada.example.com"));
    }

    #[test]
    fn test_parse_year_trims_whitespace() {
        assert_eq!(parse_year(" 2024 "), Ok(2024));
    }

    #[test]
    fn test_parse_year_rejects_text() {
        assert_eq!(parse_year("twenty"), Err(FormError::InvalidYear));
        assert_eq!(parse_year(""), Err(FormError::InvalidYear));
        assert_eq!(parse_year("2024.5"), Err(FormError::InvalidYear));
    }

    #[test]
    fn test_filename_validation() {
        assert_eq!(validate_filename("resume.txt"), Ok("resume.txt"));
        assert_eq!(validate_filename("  cv.json "), Ok("cv.json"));
        assert!(validate_filename("../etc/passwd").is_err());
        assert!(validate_filename("dir/resume.txt").is_err());
        assert!(validate_filename("dir\\resume.txt").is_err());
        assert!(validate_filename("..").is_err());
        assert!(validate_filename("").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::InvalidYear.to_string(), "Please enter a valid year.");
        assert_eq!(
            FormError::InvalidContact.to_string(),
            "Please enter a valid contact number (digits, spaces, hyphens, parentheses, and + allowed)."
        );
    }
}
