//! JSON export of an assembled prompt.

use promptwright_core::{Result, StructuredPrompt};
use serde::{Deserialize, Serialize};

/// Downloadable JSON form of a [`StructuredPrompt`], tagged with the target
/// model it was assembled for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptExport {
    pub role_definition: String,
    pub context: String,
    pub instructions: Vec<String>,
    pub constraints: Vec<String>,
    pub output_format: String,
    pub quality_criteria: Vec<String>,
    pub target_llm: String,
}

impl PromptExport {
    pub fn new(prompt: &StructuredPrompt, target: &str) -> Self {
        Self {
            role_definition: prompt.role_definition.clone(),
            context: prompt.context_text.clone(),
            instructions: prompt.instructions.clone(),
            constraints: prompt.constraints.clone(),
            output_format: prompt.output_format.clone(),
            quality_criteria: prompt.quality_criteria.clone(),
            target_llm: target.to_string(),
        }
    }

    /// Pretty-printed JSON, two-space indented.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
