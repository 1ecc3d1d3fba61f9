//! The `transform` pipeline: extraction followed by assembly under one
//! resolved target profile.

use promptwright_core::{ExtractedContext, ModelProfile, StructuredPrompt};
use tracing::debug;

use crate::assembler::PromptAssembler;
use crate::extractor::ContextExtractor;
use crate::export::PromptExport;
use crate::profiles::ProfileTable;

/// Create a pipeline for `target` from the built-in profile table.
///
/// Unrecognized identifiers fall back to the default target.
pub fn create_pipeline(target: &str) -> Pipeline {
    Pipeline::new(ProfileTable::builtin(), target)
}

/// Extractor + assembler bound to one target profile.
///
/// Holds no mutable state; `transform` may be called concurrently.
#[derive(Debug, Clone)]
pub struct Pipeline {
    profile: ModelProfile,
    extractor: ContextExtractor,
    assembler: PromptAssembler,
}

impl Pipeline {
    /// Resolve `target` against `profiles` and bind the result.
    pub fn new(profiles: &ProfileTable, target: &str) -> Self {
        let profile = profiles.resolve(target).clone();
        debug!(requested = target, resolved = %profile.id, "Created pipeline");
        Self {
            profile,
            extractor: ContextExtractor::new(),
            assembler: PromptAssembler::new(),
        }
    }

    /// Identifier of the resolved target profile.
    pub fn target(&self) -> &str {
        &self.profile.id
    }

    pub fn profile(&self) -> &ModelProfile {
        &self.profile
    }

    pub fn extract_context(&self, raw_input: &str) -> ExtractedContext {
        self.extractor.extract(raw_input)
    }

    /// Assemble a prompt from an already extracted context.
    pub fn assemble(&self, context: &ExtractedContext) -> StructuredPrompt {
        self.assembler.assemble(context, &self.profile)
    }

    pub fn transform(&self, raw_input: &str) -> StructuredPrompt {
        let context = self.extract_context(raw_input);
        self.assemble(&context)
    }

    /// Transform and wrap the result for JSON export.
    pub fn export(&self, raw_input: &str) -> PromptExport {
        PromptExport::new(&self.transform(raw_input), self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::DEFAULT_TARGET;

    #[test]
    fn transform_is_deterministic() {
        let pipeline = create_pipeline("gpt-4-turbo");
        let input = "Write a technical article about neural networks";
        assert_eq!(pipeline.transform(input), pipeline.transform(input));
    }

    #[test]
    fn unknown_target_uses_default_profile() {
        let fallback = create_pipeline("unknown-model-xyz");
        let default = create_pipeline(DEFAULT_TARGET);
        assert_eq!(fallback.target(), DEFAULT_TARGET);

        let input = "Explain quantum computing to high school students";
        assert_eq!(fallback.transform(input), default.transform(input));
    }

    #[test]
    fn claude_profile_emphasizes_reasoning() {
        let pipeline = create_pipeline("claude-3.5-sonnet");
        let result = pipeline.transform("Write a technical article about neural networks");
        let joined = result.constraints.join(" ").to_lowercase();
        assert!(joined.contains("reasoning"));
    }

    #[test]
    fn profiles_only_change_constraints() {
        let input = "Develop a marketing strategy for a new product";
        let sonnet = create_pipeline("claude-3.5-sonnet").transform(input);
        let gemini = create_pipeline("gemini-pro").transform(input);

        assert_eq!(sonnet.role_definition, gemini.role_definition);
        assert_eq!(sonnet.instructions, gemini.instructions);
        assert_eq!(sonnet.quality_criteria, gemini.quality_criteria);
        assert_eq!(sonnet.constraints.len(), gemini.constraints.len() + 3);
    }

    #[test]
    fn custom_profile_table() {
        let table = ProfileTable::with_overrides([
            ModelProfile::new("local-llama").with_constraint("Answer in plain text only"),
        ]);
        let pipeline = Pipeline::new(&table, "local-llama");
        let result = pipeline.transform("summarize the meeting notes");
        assert_eq!(pipeline.target(), "local-llama");
        assert!(result.constraints.contains(&"Answer in plain text only".to_string()));
    }
}
