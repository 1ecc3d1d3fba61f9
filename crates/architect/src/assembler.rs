//! Structured prompt assembly.
//!
//! Builds the role definition, instructions, constraints, and quality
//! criteria for an [`ExtractedContext`], then composes them into one
//! document with fixed section headers:
//!
//! | Section | Source |
//! |---------|--------|
//! | `# Role Definition` | category role + keywords + tone modifier |
//! | `# Context` | raw input, verbatim |
//! | `# Instructions` | intent, audience, complexity, format, keywords (numbered) |
//! | `# Constraints` | extracted + profile + universal + tone (bulleted) |
//! | `# Output Format` | format label, title-cased |
//! | `# Examples` | only when examples are present |
//! | `# Quality Criteria` | universal + category + tone (bulleted) |
//! | `# Target Audience` | audience label, title-cased |
//! | `# Tone` | tone label, title-cased |
//!
//! # Determinism
//!
//! Assembly is a pure function of its inputs. Every lookup table is an
//! ordered slice, and no time-dependent or random data is used.

use promptwright_core::{
    Audience, Category, Complexity, ExtractedContext, Intent, ModelProfile, OutputFormat,
    StructuredPrompt, Tone,
};
use tracing::debug;

const DEFAULT_ROLE: &str = "You are a knowledgeable AI assistant";

/// Number of keywords named in the role definition.
const ROLE_KEYWORDS: usize = 3;

/// Number of keywords named in the coverage instruction.
const COVERAGE_KEYWORDS: usize = 5;

const ROLES: &[(Category, &str)] = &[
    (Category::ContentCreation, "You are an expert content creator and writer"),
    (
        Category::AgentDevelopment,
        "You are an advanced AI agent developer and system architect",
    ),
    (
        Category::Educational,
        "You are an experienced educator and instructional designer",
    ),
    (Category::Business, "You are a seasoned business consultant and strategist"),
    (Category::Technical, "You are a senior technical expert and software engineer"),
    (Category::Creative, "You are a creative professional and storyteller"),
    (Category::Analysis, "You are a data analyst and research specialist"),
    (
        Category::Conversation,
        "You are a helpful and engaging conversational assistant",
    ),
];

const TONE_MODIFIERS: &[(Tone, &str)] = &[
    (Tone::Professional, "with a professional and polished communication style"),
    (Tone::Casual, "with a friendly and approachable demeanor"),
    (Tone::Academic, "with strong academic and research credentials"),
    (Tone::Creative, "with exceptional creative and innovative thinking abilities"),
    (Tone::Persuasive, "with excellent persuasion and influence skills"),
    (Tone::Educational, "with proven teaching and mentoring capabilities"),
];

const INTENT_INSTRUCTIONS: &[(Intent, &str)] = &[
    (Intent::Analyze, "Conduct a thorough analysis of the subject matter"),
    (Intent::Explain, "Provide a clear and comprehensive explanation"),
    (
        Intent::Improve,
        "Identify areas for improvement and provide actionable recommendations",
    ),
    (
        Intent::Convert,
        "Transform the content while maintaining core meaning and value",
    ),
    (Intent::Summarize, "Distill the key points into a concise summary"),
    (
        Intent::Compare,
        "Conduct a detailed comparison highlighting similarities and differences",
    ),
    (Intent::Plan, "Develop a structured plan with clear steps and milestones"),
];

const AUDIENCE_INSTRUCTIONS: &[(Audience, &str)] = &[
    (
        Audience::Beginners,
        "Explain concepts in simple terms suitable for beginners with no prior knowledge",
    ),
    (
        Audience::Intermediate,
        "Provide balanced explanations assuming moderate familiarity with the topic",
    ),
    (
        Audience::Experts,
        "Use technical terminology and advanced concepts appropriate for experts",
    ),
    (Audience::Students, "Structure content to facilitate learning and retention"),
    (
        Audience::Professionals,
        "Focus on practical applications and professional relevance",
    ),
    (
        Audience::GeneralPublic,
        "Make content accessible and engaging for a broad audience",
    ),
];

const FORMAT_INSTRUCTIONS: &[(OutputFormat, &str)] = &[
    (
        OutputFormat::Markdown,
        "Format output using proper markdown syntax with headers, lists, and emphasis",
    ),
    (OutputFormat::Json, "Structure output as valid JSON with clear key-value pairs"),
    (
        OutputFormat::List,
        "Present information as organized bullet points or numbered lists",
    ),
    (
        OutputFormat::Paragraph,
        "Write in well-structured paragraphs with smooth transitions",
    ),
    (OutputFormat::Code, "Provide clean, well-commented code with best practices"),
    (OutputFormat::Table, "Organize information in a clear tabular format"),
    (
        OutputFormat::StepByStep,
        "Present information as sequential, actionable steps",
    ),
];

const UNIVERSAL_CONSTRAINTS: [&str; 3] = [
    "Maintain factual accuracy and avoid speculation without clear indication",
    "Use clear, unambiguous language",
    "Ensure logical flow and coherent structure",
];

const TONE_CONSTRAINTS: &[(Tone, &str)] = &[
    (
        Tone::Professional,
        "Maintain professional tone throughout; avoid casual language",
    ),
    (
        Tone::Casual,
        "Keep tone conversational and approachable; avoid overly formal language",
    ),
    (
        Tone::Academic,
        "Use proper citations and academic rigor; maintain scholarly tone",
    ),
    (Tone::Creative, "Embrace creative expression while maintaining clarity"),
    (Tone::Persuasive, "Build compelling arguments with supporting evidence"),
    (Tone::Educational, "Prioritize clarity and learning outcomes"),
];

const UNIVERSAL_CRITERIA: [&str; 4] = [
    "Relevance: Response directly addresses the user's request",
    "Accuracy: Information is factually correct and reliable",
    "Clarity: Content is easy to understand and well-organized",
    "Completeness: All aspects of the request are covered",
];

const CATEGORY_CRITERIA: &[(Category, &str)] = &[
    (
        Category::ContentCreation,
        "Engagement: Content is compelling and holds reader interest",
    ),
    (
        Category::AgentDevelopment,
        "Functionality: System design is practical and implementable",
    ),
    (
        Category::Educational,
        "Pedagogical value: Content facilitates effective learning",
    ),
    (
        Category::Business,
        "Actionability: Recommendations are practical and implementable",
    ),
    (
        Category::Technical,
        "Technical accuracy: Code/solutions follow best practices",
    ),
    (Category::Creative, "Originality: Content demonstrates creative thinking"),
    (Category::Analysis, "Depth: Analysis is thorough and insightful"),
    (
        Category::Conversation,
        "Naturalness: Responses feel natural and contextually appropriate",
    ),
];

const TONE_CRITERIA: &[(Tone, &str)] = &[
    (
        Tone::Professional,
        "Professionalism: Tone and language are appropriate for professional context",
    ),
    (
        Tone::Educational,
        "Educational value: Content effectively teaches the subject matter",
    ),
];

fn lookup<K: PartialEq + Copy>(table: &[(K, &'static str)], key: K) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Title-case a label: underscores become spaces and each alphabetic run
/// starts upper-case with the rest lower-case (`step_by_step` → `Step By Step`).
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for ch in label.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// The prompt assembler. Stateless: create one and reuse it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAssembler;

impl PromptAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble every section and the composed document.
    pub fn assemble(&self, context: &ExtractedContext, profile: &ModelProfile) -> StructuredPrompt {
        let role_definition = self.role_definition(context);
        let instructions = self.instructions(context);
        let constraints = self.constraints(context, profile);
        let quality_criteria = self.quality_criteria(context);
        let examples = self.examples(context);

        let full_prompt = compose(
            context,
            &role_definition,
            &instructions,
            &constraints,
            examples.as_deref(),
            &quality_criteria,
        );

        debug!(
            profile = %profile.id,
            instructions = instructions.len(),
            constraints = constraints.len(),
            quality_criteria = quality_criteria.len(),
            prompt_chars = full_prompt.len(),
            "Assembled structured prompt"
        );

        StructuredPrompt {
            role_definition,
            context_text: context.raw_input.clone(),
            instructions,
            constraints,
            output_format: context.output_format.as_str().to_string(),
            quality_criteria,
            examples,
            full_prompt,
        }
    }

    /// `{base role}[ specializing in k1, k2, k3][, {tone modifier}].`
    pub fn role_definition(&self, context: &ExtractedContext) -> String {
        let mut role = lookup(ROLES, context.category)
            .unwrap_or(DEFAULT_ROLE)
            .to_string();

        if !context.keywords.is_empty() {
            let focus = head(&context.keywords, ROLE_KEYWORDS).join(", ");
            role.push_str(" specializing in ");
            role.push_str(&focus);
        }

        if let Some(modifier) = lookup(TONE_MODIFIERS, context.tone) {
            role.push_str(", ");
            role.push_str(modifier);
        }

        role.push('.');
        role
    }

    /// Four fixed-slot instructions plus a keyword-coverage line when
    /// keywords were extracted.
    pub fn instructions(&self, context: &ExtractedContext) -> Vec<String> {
        let mut instructions = Vec::with_capacity(5);

        let primary = match context.intent {
            Intent::Create => format!(
                "Create {} content that addresses the user's request",
                context.output_format
            ),
            intent => lookup(INTENT_INSTRUCTIONS, intent)
                .unwrap_or("Address the user's request comprehensively")
                .to_string(),
        };
        instructions.push(primary);

        instructions.push(
            lookup(AUDIENCE_INSTRUCTIONS, context.audience)
                .unwrap_or("Tailor content to the audience")
                .to_string(),
        );

        let depth = match context.complexity {
            Complexity::Basic => "Break down complex ideas into simple, digestible components",
            Complexity::Advanced => "Explore nuanced aspects and advanced implications",
            Complexity::Intermediate => "Balance depth with accessibility",
        };
        instructions.push(depth.to_string());

        instructions.push(
            lookup(FORMAT_INSTRUCTIONS, context.output_format)
                .unwrap_or("Format output appropriately")
                .to_string(),
        );

        if !context.keywords.is_empty() {
            instructions.push(format!(
                "Ensure coverage of key topics: {}",
                head(&context.keywords, COVERAGE_KEYWORDS).join(", ")
            ));
        }

        instructions
    }

    /// Extracted constraints, then the profile's, then the universal block,
    /// then the tone constraint.
    pub fn constraints(&self, context: &ExtractedContext, profile: &ModelProfile) -> Vec<String> {
        let mut constraints = context.constraints.clone();
        constraints.extend(profile.extra_constraints.iter().cloned());
        constraints.extend(UNIVERSAL_CONSTRAINTS.iter().map(|c| c.to_string()));
        if let Some(tone) = lookup(TONE_CONSTRAINTS, context.tone) {
            constraints.push(tone.to_string());
        }
        constraints
    }

    pub fn quality_criteria(&self, context: &ExtractedContext) -> Vec<String> {
        let mut criteria: Vec<String> = UNIVERSAL_CRITERIA.iter().map(|c| c.to_string()).collect();
        if let Some(criterion) = lookup(CATEGORY_CRITERIA, context.category) {
            criteria.push(criterion.to_string());
        }
        if let Some(criterion) = lookup(TONE_CRITERIA, context.tone) {
            criteria.push(criterion.to_string());
        }
        criteria
    }

    // Worked examples are not generated yet.
    fn examples(&self, _context: &ExtractedContext) -> Option<Vec<String>> {
        None
    }
}

fn head(items: &[String], n: usize) -> &[String] {
    &items[..items.len().min(n)]
}

fn compose(
    context: &ExtractedContext,
    role_definition: &str,
    instructions: &[String],
    constraints: &[String],
    examples: Option<&[String]>,
    quality_criteria: &[String],
) -> String {
    let mut doc = String::new();

    doc.push_str("# Role Definition\n");
    doc.push_str(role_definition);
    doc.push_str("\n\n# Context\n");
    doc.push_str(&context.raw_input);
    doc.push_str("\n\n# Instructions\n");
    for (i, instruction) in instructions.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", i + 1, instruction));
    }

    doc.push_str("\n# Constraints\n");
    for constraint in constraints {
        doc.push_str(&format!("- {constraint}\n"));
    }

    doc.push_str(&format!(
        "\n# Output Format\n{}\n",
        title_case(context.output_format.as_str())
    ));

    if let Some(examples) = examples.filter(|e| !e.is_empty()) {
        doc.push_str("\n# Examples\n");
        for example in examples {
            doc.push_str(&format!("{example}\n\n"));
        }
    }

    doc.push_str("\n# Quality Criteria\n");
    for criterion in quality_criteria {
        doc.push_str(&format!("- {criterion}\n"));
    }

    doc.push_str(&format!(
        "\n# Target Audience\n{}\n",
        title_case(context.audience.as_str())
    ));
    doc.push_str(&format!("\n# Tone\n{}\n", title_case(context.tone.as_str())));

    doc
}
