use serde::Serialize;

use crate::models::{Resume, Section};

pub const TOTAL_CHECKS: u32 = 5;

/// A skills section earns its point only once it lists at least this many skills.
pub const MIN_SKILLS: usize = 5;

const ACTION_VERBS: &[&str] = &[
    "developed",
    "led",
    "implemented",
    "created",
    "designed",
    "managed",
    "improved",
    "analyzed",
    "built",
];

const REPORT_BANNER: &str =
    "============================= RESUME ANALYSIS =============================";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Education,
    Experience,
    Skills,
    ActionVerbs,
    Achievements,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub check: CheckKind,
    pub passed: bool,
    pub message: String,
    /// Example phrasing shown when the check fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

impl CheckResult {
    fn pass(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            passed: true,
            message: message.into(),
            guidance: None,
        }
    }

    fn fail(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            passed: false,
            message: message.into(),
            guidance: None,
        }
    }

    fn with_guidance(mut self, guidance: impl Into<String>) -> Self {
        self.guidance = Some(guidance.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub checks: Vec<CheckResult>,
    pub score: u32,
    pub total: u32,
}

impl AnalysisReport {
    /// Plain-text report: banner, one `- ` line per check (guidance indented
    /// beneath failed checks), then the `Resume Score: n/5` line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(REPORT_BANNER);
        out.push_str("\n\n");
        for check in &self.checks {
            out.push_str("- ");
            out.push_str(&check.message);
            out.push('\n');
            if let Some(guidance) = &check.guidance {
                out.push_str("  ");
                out.push_str(guidance);
                out.push('\n');
            }
        }
        out.push_str(&format!("\nResume Score: {}/{}\n", self.score, self.total));
        out
    }
}

/// Runs the checklist. Checks always appear in the same order:
/// education, experience, skills, action verbs, achievements.
pub fn analyze(resume: &Resume) -> AnalysisReport {
    let sections = resume.sections();
    let experiences: Vec<_> = sections.iter().filter_map(Section::as_experience).collect();
    let skill_count = sections.iter().filter(|s| s.is_skill()).count();

    let checks = vec![
        check_education(sections),
        check_experience(!experiences.is_empty()),
        check_skills(skill_count),
        check_action_verbs(experiences.iter().any(|e| has_action_verb(&e.description))),
        check_achievements(experiences.iter().any(|e| has_metric(&e.description))),
    ];

    let score = checks.iter().filter(|c| c.passed).count() as u32;

    AnalysisReport {
        checks,
        score,
        total: TOTAL_CHECKS,
    }
}

fn check_education(sections: &[Section]) -> CheckResult {
    if sections.iter().any(Section::is_education) {
        CheckResult::pass(CheckKind::Education, "Education section present.")
    } else {
        CheckResult::fail(CheckKind::Education, "Missing Education section.")
    }
}

fn check_experience(has_experience: bool) -> CheckResult {
    if has_experience {
        CheckResult::pass(CheckKind::Experience, "Experience section present.")
    } else {
        CheckResult::fail(CheckKind::Experience, "Missing Experience section.")
    }
}

fn check_skills(skill_count: usize) -> CheckResult {
    match skill_count {
        0 => CheckResult::fail(CheckKind::Skills, "Missing Skills section."),
        n if n >= MIN_SKILLS => CheckResult::pass(
            CheckKind::Skills,
            format!("Skills section has {MIN_SKILLS} or more skills ({n} skills)."),
        ),
        n => CheckResult::fail(
            CheckKind::Skills,
            format!(
                "Skills section present but needs at least {MIN_SKILLS} skills (currently {n} skills)."
            ),
        ),
    }
}

fn check_action_verbs(found: bool) -> CheckResult {
    if found {
        CheckResult::pass(
            CheckKind::ActionVerbs,
            "Experience descriptions include action verbs.",
        )
    } else {
        CheckResult::fail(
            CheckKind::ActionVerbs,
            "Consider adding action verbs to experience descriptions.",
        )
        .with_guidance(format!("Examples: {}", ACTION_VERBS.join(", ")))
    }
}

fn check_achievements(found: bool) -> CheckResult {
    if found {
        CheckResult::pass(
            CheckKind::Achievements,
            "Resume includes measurable achievements.",
        )
    } else {
        CheckResult::fail(
            CheckKind::Achievements,
            "Consider adding measurable achievements (numbers, percentages).",
        )
        .with_guidance(
            "Examples: 'improved performance by 30%', 'managed team of 5', 'processed 100+ orders daily'",
        )
    }
}

/// Case-insensitive substring match, so "Led" and "misled" both count.
fn has_action_verb(description: &str) -> bool {
    let lower = description.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.contains(verb))
}

fn has_metric(description: &str) -> bool {
    description.chars().any(|c| c.is_ascii_digit())
}
