//! Trigger-keyword tables for context extraction.
//!
//! Every table is an ordered slice: scan order decides ties and priorities,
//! so nothing here may be moved into an unordered map. The tables are
//! `'static` and never mutated.

use promptwright_core::{Audience, Category, Intent, OutputFormat, Tone};

/// Label → trigger keywords, in scan order.
pub type Table<L> = &'static [(L, &'static [&'static str])];

/// The full set of keyword tables used by one extractor.
#[derive(Debug)]
pub struct Lexicon {
    /// Scored: the label with the most matching triggers wins.
    pub intents: Table<Intent>,
    /// Priority order: the first label with any match wins.
    pub categories: Table<Category>,
    pub audiences: Table<Audience>,
    pub tones: Table<Tone>,
    pub formats: Table<OutputFormat>,
    pub basic_complexity: &'static [&'static str],
    pub advanced_complexity: &'static [&'static str],
    pub short_cues: &'static [&'static str],
    pub detail_cues: &'static [&'static str],
    pub speed_cues: &'static [&'static str],
    pub accuracy_cues: &'static [&'static str],
    pub simplicity_cues: &'static [&'static str],
    pub stop_words: &'static [&'static str],
}

impl Lexicon {
    /// The built-in lexicon, shared process-wide.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word)
    }
}

/// True if any trigger occurs as a substring of `text`.
pub fn any_present(triggers: &[&str], text: &str) -> bool {
    triggers.iter().any(|t| text.contains(t))
}

/// Number of triggers that occur as substrings of `text`.
pub fn count_present(triggers: &[&str], text: &str) -> usize {
    triggers.iter().filter(|t| text.contains(**t)).count()
}

/// First label in scan order with any trigger present.
pub fn first_match<L: Copy>(table: Table<L>, text: &str) -> Option<L> {
    table
        .iter()
        .find(|(_, triggers)| any_present(triggers, text))
        .map(|(label, _)| *label)
}

static BUILTIN: Lexicon = Lexicon {
    intents: &[
        (
            Intent::Create,
            &["create", "generate", "write", "make", "produce", "build", "design"],
        ),
        (
            Intent::Analyze,
            &["analyze", "examine", "evaluate", "assess", "review", "study"],
        ),
        (
            Intent::Explain,
            &["explain", "describe", "clarify", "teach", "show", "demonstrate"],
        ),
        (
            Intent::Improve,
            &["improve", "optimize", "enhance", "refine", "better", "upgrade"],
        ),
        (
            Intent::Convert,
            &["convert", "transform", "translate", "change", "adapt", "rewrite"],
        ),
        (
            Intent::Summarize,
            &["summarize", "condense", "brief", "overview", "abstract"],
        ),
        (
            Intent::Compare,
            &["compare", "contrast", "difference", "versus", "vs"],
        ),
        (
            Intent::Plan,
            &["plan", "strategy", "roadmap", "outline", "structure"],
        ),
    ],
    // Analysis outranks technical so "analyze the code" stays analysis.
    categories: &[
        (
            Category::Analysis,
            &[
                "analyze", "analysis", "data", "research", "study", "report", "insights",
                "examine", "evaluate",
            ],
        ),
        (
            Category::AgentDevelopment,
            &["agent", "bot", "assistant", "chatbot", "ai system"],
        ),
        (
            Category::Technical,
            &["code", "programming", "technical", "software", "debug", "script", "function"],
        ),
        (
            Category::Educational,
            &[
                "teach", "learn", "tutorial", "course", "lesson", "education", "explain",
                "instruct",
            ],
        ),
        (
            Category::Creative,
            &["story", "creative", "fiction", "poem", "narrative", "novel"],
        ),
        (
            Category::Business,
            &["business", "marketing", "sales", "strategy", "proposal", "plan"],
        ),
        (
            Category::ContentCreation,
            &["blog", "article", "content", "post", "copy", "write"],
        ),
        (
            Category::Conversation,
            &["chat", "conversation", "dialogue", "discuss"],
        ),
    ],
    audiences: &[
        (
            Audience::Beginners,
            &["beginner", "novice", "new", "starter", "basic"],
        ),
        (Audience::Intermediate, &["intermediate", "moderate", "regular"]),
        (
            Audience::Experts,
            &["expert", "advanced", "professional", "specialist"],
        ),
        (Audience::Students, &["student", "learner", "pupil"]),
        (
            Audience::Professionals,
            &["professional", "business", "corporate"],
        ),
        (
            Audience::GeneralPublic,
            &["everyone", "general", "public", "anyone"],
        ),
    ],
    tones: &[
        (
            Tone::Professional,
            &["business", "corporate", "formal", "professional", "official"],
        ),
        (
            Tone::Casual,
            &["casual", "friendly", "informal", "conversational", "relaxed"],
        ),
        (
            Tone::Academic,
            &["academic", "scholarly", "research", "scientific", "technical"],
        ),
        (
            Tone::Creative,
            &["creative", "artistic", "imaginative", "innovative", "original"],
        ),
        (
            Tone::Persuasive,
            &["persuasive", "convincing", "compelling", "influential"],
        ),
        (
            Tone::Educational,
            &["educational", "teaching", "learning", "tutorial", "instructional"],
        ),
    ],
    formats: &[
        (OutputFormat::Markdown, &["markdown", "md", "formatted"]),
        (OutputFormat::Json, &["json", "structured data"]),
        (OutputFormat::List, &["list", "bullet points", "numbered"]),
        (OutputFormat::Paragraph, &["paragraph", "essay", "prose"]),
        (OutputFormat::Code, &["code", "script", "program"]),
        (OutputFormat::Table, &["table", "spreadsheet", "grid"]),
        (OutputFormat::StepByStep, &["step", "steps", "guide", "tutorial"]),
    ],
    basic_complexity: &["simple", "basic", "easy", "beginner"],
    advanced_complexity: &["advanced", "complex", "expert", "sophisticated"],
    short_cues: &["short", "brief"],
    detail_cues: &["detailed", "comprehensive"],
    speed_cues: &["quick", "fast"],
    accuracy_cues: &["accurate", "precise"],
    simplicity_cues: &["simple", "easy"],
    stop_words: &[
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "as", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "will", "would", "should", "could", "may", "might", "must", "can",
        "i", "you", "he", "she", "it", "we", "they", "this", "that", "these", "those",
    ],
};
