// Resume rendering: the boxed plain-text layout (preview and .txt export)
// and the JSON document (.json export and the structured GET view).

pub mod json;
pub mod text;

pub use json::{to_json_string, ResumeDocument};
pub use text::format_resume;
