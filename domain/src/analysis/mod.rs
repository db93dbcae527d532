//! Analysis result value object

mod result;

pub use result::{AnalysisResult, IncompleteTranscript};
