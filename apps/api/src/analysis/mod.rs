// Resume checklist analysis: five heuristic content checks scored out of 5.
// Pure over a Resume; callers decide how to present the report.

pub mod analyzer;

pub use analyzer::{analyze, AnalysisReport};
