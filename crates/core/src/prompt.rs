//! The assembled, multi-section prompt.

use serde::{Deserialize, Serialize};

/// A structured prompt derived from an [`ExtractedContext`](crate::ExtractedContext)
/// and a [`ModelProfile`](crate::ModelProfile).
///
/// This is a pure value with no identity of its own: assembling the same
/// inputs twice yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPrompt {
    pub role_definition: String,
    /// The raw request text, verbatim.
    pub context_text: String,
    pub instructions: Vec<String>,
    pub constraints: Vec<String>,
    /// Output format label, e.g. `step_by_step`.
    pub output_format: String,
    pub quality_criteria: Vec<String>,
    /// Reserved for worked examples. Always `None` today, but kept in the
    /// schema so serialized prompts have a stable shape.
    pub examples: Option<Vec<String>>,
    /// All sections concatenated into one Markdown-headed document.
    pub full_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_examples_serialize_explicitly() {
        let prompt = StructuredPrompt {
            role_definition: "You are a tester.".into(),
            context_text: "test".into(),
            instructions: vec!["Do it".into()],
            constraints: vec![],
            output_format: "paragraph".into(),
            quality_criteria: vec![],
            examples: None,
            full_prompt: String::new(),
        };
        let json = serde_json::to_value(&prompt).unwrap();
        assert!(json.get("examples").is_some());
        assert!(json["examples"].is_null());
    }
}
