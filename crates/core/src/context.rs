//! Extracted request context.
//!
//! Each classification field is a closed enum with an explicit default
//! variant. Absence of signal in the input resolves to that default; there
//! is no "unknown" state.

use serde::{Deserialize, Serialize};

/// The user's primary verb-level goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Create,
    Analyze,
    Explain,
    Improve,
    Convert,
    Summarize,
    Compare,
    Plan,
    /// No intent keyword matched.
    #[default]
    GeneralAssistance,
}

impl Intent {
    pub const ALL: [Intent; 9] = [
        Intent::Create,
        Intent::Analyze,
        Intent::Explain,
        Intent::Improve,
        Intent::Convert,
        Intent::Summarize,
        Intent::Compare,
        Intent::Plan,
        Intent::GeneralAssistance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Analyze => "analyze",
            Self::Explain => "explain",
            Self::Improve => "improve",
            Self::Convert => "convert",
            Self::Summarize => "summarize",
            Self::Compare => "compare",
            Self::Plan => "plan",
            Self::GeneralAssistance => "general_assistance",
        }
    }
}

/// The domain or genre of the requested output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    ContentCreation,
    AgentDevelopment,
    Educational,
    Business,
    Technical,
    Creative,
    Analysis,
    Conversation,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::ContentCreation,
        Category::AgentDevelopment,
        Category::Educational,
        Category::Business,
        Category::Technical,
        Category::Creative,
        Category::Analysis,
        Category::Conversation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentCreation => "content_creation",
            Self::AgentDevelopment => "agent_development",
            Self::Educational => "educational",
            Self::Business => "business",
            Self::Technical => "technical",
            Self::Creative => "creative",
            Self::Analysis => "analysis",
            Self::Conversation => "conversation",
        }
    }
}

/// Who the generated output is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Beginners,
    Intermediate,
    Experts,
    Students,
    Professionals,
    #[default]
    GeneralPublic,
}

impl Audience {
    pub const ALL: [Audience; 6] = [
        Audience::Beginners,
        Audience::Intermediate,
        Audience::Experts,
        Audience::Students,
        Audience::Professionals,
        Audience::GeneralPublic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginners => "beginners",
            Self::Intermediate => "intermediate",
            Self::Experts => "experts",
            Self::Students => "students",
            Self::Professionals => "professionals",
            Self::GeneralPublic => "general_public",
        }
    }
}

/// Desired voice of the generated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Academic,
    Creative,
    Persuasive,
    Educational,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Academic,
        Tone::Creative,
        Tone::Persuasive,
        Tone::Educational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Academic => "academic",
            Self::Creative => "creative",
            Self::Persuasive => "persuasive",
            Self::Educational => "educational",
        }
    }
}

/// Shape of the generated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Markdown,
    Json,
    List,
    #[default]
    Paragraph,
    Code,
    Table,
    StepByStep,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Markdown,
        OutputFormat::Json,
        OutputFormat::List,
        OutputFormat::Paragraph,
        OutputFormat::Code,
        OutputFormat::Table,
        OutputFormat::StepByStep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::List => "list",
            Self::Paragraph => "paragraph",
            Self::Code => "code",
            Self::Table => "table",
            Self::StepByStep => "step_by_step",
        }
    }
}

/// Depth the response should go into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_as_str!(Intent, Category, Audience, Tone, OutputFormat, Complexity);

/// Everything the extractor learned from one raw request.
///
/// Built once per transform call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContext {
    /// The request text, verbatim.
    pub raw_input: String,
    pub intent: Intent,
    pub category: Category,
    pub audience: Audience,
    pub tone: Tone,
    pub output_format: OutputFormat,
    /// Constraint sentences in detection order.
    #[serde(default)]
    pub constraints: Vec<String>,
    /// Unique lower-case keywords in first-occurrence order, at most ten.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub complexity: Complexity,
}

impl ExtractedContext {
    /// A context carrying every documented default for the given input.
    pub fn defaults_for(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            intent: Intent::default(),
            category: Category::default(),
            audience: Audience::default(),
            tone: Tone::default(),
            output_format: OutputFormat::default(),
            constraints: Vec::new(),
            keywords: Vec::new(),
            complexity: Complexity::default(),
        }
    }
}
