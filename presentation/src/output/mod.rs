//! Output formatting for analysis results

pub mod console;
