//! Council consistency checks

use super::profile::RoleProfile;
use super::vars;
use thiserror::Error;

/// A council that cannot run to completion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CouncilDefect {
    #[error("council has no roles")]
    Empty,

    #[error("role {role} has an empty model name")]
    EmptyModel { role: String },

    #[error("output variable `{0}` is produced by more than one role")]
    DuplicateOutput(String),

    #[error("role {role} references `{{{name}}}`, which is not available at that stage")]
    UnavailableVariable { role: String, name: String },

    #[error("no role produces `{0}`, which the analysis result requires")]
    MissingResultField(String),
}

/// Check that every stage only references variables that exist by the time
/// it runs, and that the stages together produce every result field.
pub fn check_council(roles: &[RoleProfile]) -> Result<(), CouncilDefect> {
    if roles.is_empty() {
        return Err(CouncilDefect::Empty);
    }

    let mut available: Vec<&str> = vec![vars::TOPIC];
    for role in roles {
        if role.model().as_str().trim().is_empty() {
            return Err(CouncilDefect::EmptyModel {
                role: role.name().to_string(),
            });
        }
        for name in role.prompt_template().placeholders() {
            if !available.contains(&name) {
                return Err(CouncilDefect::UnavailableVariable {
                    role: role.name().to_string(),
                    name: name.to_string(),
                });
            }
        }
        if available.contains(&role.output_key()) {
            return Err(CouncilDefect::DuplicateOutput(role.output_key().to_string()));
        }
        available.push(role.output_key());
    }

    for field in vars::RESULT_FIELDS {
        if !available.contains(&field) {
            return Err(CouncilDefect::MissingResultField(field.to_string()));
        }
    }
    Ok(())
}
