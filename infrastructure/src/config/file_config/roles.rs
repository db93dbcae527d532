//! Role configuration from TOML (`[[roles]]` array)

use council_domain::{DomainError, Model, PromptTemplate, RoleProfile};
use serde::{Deserialize, Serialize};

/// One council stage as written in TOML
///
/// When `[[roles]]` is present it replaces the built-in council entirely;
/// the order of the entries is the execution order.
///
/// # Example
///
/// ```toml
/// [[roles]]
/// name = "architect"
/// model = "llama3"
/// temperature = 0.2
/// system_instruction = "你是資深系統架構師"
/// prompt_template = "請針對以下主題提出架構設計建議：{topic}"
/// output = "architectOpinion"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRoleConfig {
    pub name: String,
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    pub system_instruction: String,
    pub prompt_template: String,
    /// Variable name later stages use to reference this stage's reply
    pub output: String,
}

fn default_temperature() -> f32 {
    0.2
}

impl FileRoleConfig {
    pub fn to_profile(&self) -> Result<RoleProfile, DomainError> {
        let model: Model = self.model.parse()?;
        RoleProfile::new(
            self.name.trim(),
            model,
            self.temperature,
            self.system_instruction.as_str(),
            PromptTemplate::new(self.prompt_template.as_str()),
            self.output.trim(),
        )
    }
}

impl From<&RoleProfile> for FileRoleConfig {
    fn from(role: &RoleProfile) -> Self {
        Self {
            name: role.name().to_string(),
            model: role.model().to_string(),
            temperature: role.temperature(),
            system_instruction: role.system_instruction().to_string(),
            prompt_template: role.prompt_template().as_str().to_string(),
            output: role.output_key().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_profile() {
        let toml_str = r#"
name = "reviewer"
model = "qwen2"
system_instruction = "review"
prompt_template = "{topic}"
output = "review"
"#;
        let config: FileRoleConfig = toml::from_str(toml_str).unwrap();
        let profile = config.to_profile().unwrap();
        assert_eq!(profile.name(), "reviewer");
        assert_eq!(profile.model(), &Model::Custom("qwen2".to_string()));
        assert!((profile.temperature() - 0.2).abs() < f32::EPSILON);
        assert_eq!(profile.output_key(), "review");
    }

    #[test]
    fn test_empty_model_rejected() {
        let config = FileRoleConfig {
            model: "  ".to_string(),
            ..FileRoleConfig::from(&RoleProfile::architect())
        };
        assert!(matches!(
            config.to_profile(),
            Err(DomainError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_builtin_round_trips() {
        let architect = RoleProfile::architect();
        let config = FileRoleConfig::from(&architect);
        assert_eq!(config.to_profile().unwrap(), architect);
    }
}
