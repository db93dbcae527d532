//! Role profile entity

use super::vars;
use crate::core::error::DomainError;
use crate::core::model::Model;
use crate::prompt::PromptTemplate;
use serde::Serialize;

const ARCHITECT_SYSTEM: &str = "你是資深系統架構師，回答必須聚焦：
1) 高可用性（HA）
2) 可擴展性（Scalability）
3) 可觀測性與維運策略
請提供具體、可落地的設計建議。
";

const ARCHITECT_TEMPLATE: &str = "請針對以下主題提出架構設計建議：{topic}";

const SECURITY_SYSTEM: &str = "你是資安專家，回答必須聚焦：
1) 威脅建模
2) 常見漏洞（OWASP Top 10）
3) 防禦與監控建議
請針對已提供的架構觀點進行風險評論。
";

const SECURITY_TEMPLATE: &str =
    "主題：{topic}\n\n架構師觀點：\n{architectOpinion}\n\n請提出資安風險與改進建議。";

const MODERATOR_SYSTEM: &str = "你是中立主持人，請整合架構師與資安專家的重點，
輸出共識、分歧、與建議下一步。
";

const MODERATOR_TEMPLATE: &str = "主題：{topic}

架構師觀點：
{architectOpinion}

資安專家觀點：
{securityReview}

請輸出：
1. 共識
2. 主要分歧
3. 建議採取的下一步
";

/// Static configuration of one council stage (Entity)
///
/// Immutable once built. Profiles are created at startup and shared
/// read-only by every analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleProfile {
    name: String,
    model: Model,
    temperature: f32,
    system_instruction: String,
    prompt_template: PromptTemplate,
    output_key: String,
}

impl RoleProfile {
    /// Create a profile, rejecting temperatures outside `0.0..=1.0`.
    pub fn new(
        name: impl Into<String>,
        model: Model,
        temperature: f32,
        system_instruction: impl Into<String>,
        prompt_template: impl Into<PromptTemplate>,
        output_key: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if !(0.0..=1.0).contains(&temperature) {
            return Err(DomainError::InvalidTemperature {
                role: name,
                value: temperature,
            });
        }
        Ok(Self {
            name,
            model,
            temperature,
            system_instruction: system_instruction.into(),
            prompt_template: prompt_template.into(),
            output_key: output_key.into(),
        })
    }

    /// Proposes a design focused on availability, scalability and operations
    pub fn architect() -> Self {
        Self::builtin(
            "architect",
            Model::Llama3,
            0.2,
            ARCHITECT_SYSTEM,
            ARCHITECT_TEMPLATE,
            vars::ARCHITECT_OPINION,
        )
    }

    /// Critiques the architect's proposal from a threat-modeling angle
    pub fn security() -> Self {
        Self::builtin(
            "security",
            Model::Mistral,
            0.1,
            SECURITY_SYSTEM,
            SECURITY_TEMPLATE,
            vars::SECURITY_REVIEW,
        )
    }

    /// Reconciles both opinions into consensus, disagreements and next steps
    pub fn moderator() -> Self {
        Self::builtin(
            "moderator",
            Model::Llama3,
            0.2,
            MODERATOR_SYSTEM,
            MODERATOR_TEMPLATE,
            vars::MODERATOR_SUMMARY,
        )
    }

    /// The default three-stage council, in execution order
    pub fn default_council() -> Vec<Self> {
        vec![Self::architect(), Self::security(), Self::moderator()]
    }

    fn builtin(
        name: &str,
        model: Model,
        temperature: f32,
        system_instruction: &str,
        template: &str,
        output_key: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            model,
            temperature,
            system_instruction: system_instruction.to_string(),
            prompt_template: PromptTemplate::new(template),
            output_key: output_key.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn prompt_template(&self) -> &PromptTemplate {
        &self.prompt_template
    }

    pub fn output_key(&self) -> &str {
        &self.output_key
    }
}
