pub mod resume;

pub use resume::{
    AcademicEducation, Education, Experience, PersonalInfo, Resume, Section, Skill,
};
