//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod backend;
mod logging;
mod roles;
mod server;

pub use backend::{DEFAULT_API_KEY_ENV, FileBackendConfig};
pub use logging::FileLoggingConfig;
pub use roles::FileRoleConfig;
pub use server::{DEFAULT_LISTEN, FileServerConfig};

use council_domain::{CouncilDefect, DomainError, RoleProfile, check_council};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.base_url must be an http:// or https:// address, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("roles[{index}] ({name}): {source}")]
    InvalidRole {
        index: usize,
        name: String,
        #[source]
        source: DomainError,
    },

    #[error("roles: {0}")]
    Council(#[from] CouncilDefect),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Inference backend settings
    pub backend: FileBackendConfig,
    /// HTTP surface settings
    pub server: FileServerConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
    /// Council stages in order; empty means the built-in council
    pub roles: Vec<FileRoleConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let base_url = self.backend.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }

        self.role_profiles().map(|_| ())
    }

    /// Build the council, checking every stage can run
    pub fn role_profiles(&self) -> Result<Vec<RoleProfile>, ConfigValidationError> {
        let profiles = if self.roles.is_empty() {
            RoleProfile::default_council()
        } else {
            self.roles
                .iter()
                .enumerate()
                .map(|(index, role)| {
                    role.to_profile()
                        .map_err(|source| ConfigValidationError::InvalidRole {
                            index,
                            name: role.name.clone(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        check_council(&profiles)?;
        Ok(profiles)
    }
}
