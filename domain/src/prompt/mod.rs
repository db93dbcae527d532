//! Prompt composition
//!
//! [`PromptTemplate`] substitutes `{name}` placeholders with values from
//! [`PromptVars`] in a single, non-recursive pass.

mod template;

pub use template::{PromptTemplate, PromptVars, TemplateError};
