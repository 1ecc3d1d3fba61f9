//! Heuristic context extraction.
//!
//! Turns a free-text request into an [`ExtractedContext`] using literal,
//! case-insensitive substring matching against the [`Lexicon`]. There is no
//! tokenization for classification: a trigger inside a longer word still
//! counts ("shortcut" carries the "short" cue).
//!
//! Extraction is total. Every field falls back to its documented default
//! when no trigger matches.

use std::sync::LazyLock;

use promptwright_core::{Audience, Category, Complexity, ExtractedContext, Intent, OutputFormat, Tone};
use regex::Regex;
use tracing::debug;

use crate::lexicon::{Lexicon, any_present, count_present, first_match};

/// Upper bound on extracted keywords.
pub const MAX_KEYWORDS: usize = 10;

/// Keywords of this length or shorter are dropped.
const MIN_KEYWORD_LEN: usize = 3;

static WORD_LIMIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*words?").expect("word limit pattern is valid"));

// Unicode word boundaries: a run touching a non-ASCII letter is not a word.
static ALPHA_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]+\b").expect("alphabetic word pattern is valid"));

/// Extracts request context. Stateless apart from its read-only lexicon,
/// so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct ContextExtractor {
    lexicon: &'static Lexicon,
}

impl Default for ContextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextExtractor {
    /// Create an extractor over the built-in lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
        }
    }

    /// Extract every context field from `raw_input`.
    pub fn extract(&self, raw_input: &str) -> ExtractedContext {
        let text = raw_input.to_lowercase();

        let context = ExtractedContext {
            raw_input: raw_input.to_string(),
            intent: self.detect_intent(&text),
            category: self.detect_category(&text),
            audience: self.detect_audience(&text),
            tone: self.detect_tone(&text),
            output_format: self.detect_output_format(&text),
            constraints: self.extract_constraints(&text),
            keywords: self.extract_keywords(&text),
            complexity: self.detect_complexity(&text),
        };

        debug!(
            intent = %context.intent,
            category = %context.category,
            audience = %context.audience,
            tone = %context.tone,
            output_format = %context.output_format,
            complexity = %context.complexity,
            constraints = context.constraints.len(),
            keywords = context.keywords.len(),
            "Extracted request context"
        );

        context
    }

    /// Highest trigger count wins; ties go to the earlier intent.
    /// All-zero resolves to [`Intent::GeneralAssistance`].
    pub fn detect_intent(&self, text: &str) -> Intent {
        let mut best = Intent::GeneralAssistance;
        let mut best_score = 0;
        for (intent, triggers) in self.lexicon.intents {
            let score = count_present(triggers, text);
            if score > best_score {
                best = *intent;
                best_score = score;
            }
        }
        best
    }

    /// First category in priority order with any trigger present.
    pub fn detect_category(&self, text: &str) -> Category {
        first_match(self.lexicon.categories, text).unwrap_or_default()
    }

    pub fn detect_audience(&self, text: &str) -> Audience {
        first_match(self.lexicon.audiences, text).unwrap_or_default()
    }

    pub fn detect_tone(&self, text: &str) -> Tone {
        first_match(self.lexicon.tones, text).unwrap_or_default()
    }

    pub fn detect_output_format(&self, text: &str) -> OutputFormat {
        first_match(self.lexicon.formats, text).unwrap_or_default()
    }

    /// Independent rule checks, appended in rule order.
    pub fn extract_constraints(&self, text: &str) -> Vec<String> {
        let lexicon = self.lexicon;
        let mut constraints = Vec::new();

        if any_present(lexicon.short_cues, text) {
            constraints.push("Keep response concise and brief".to_string());
        } else if any_present(lexicon.detail_cues, text) {
            constraints.push("Provide detailed and comprehensive response".to_string());
        }

        if let Some(caps) = WORD_LIMIT.captures(text) {
            constraints.push(format!(
                "Limit response to approximately {} words",
                &caps[1]
            ));
        }

        if any_present(lexicon.speed_cues, text) {
            constraints.push("Prioritize speed and efficiency".to_string());
        }

        if any_present(lexicon.accuracy_cues, text) {
            constraints.push("Ensure high accuracy and precision".to_string());
        }

        if any_present(lexicon.simplicity_cues, text) {
            constraints.push("Use simple, easy-to-understand language".to_string());
        }

        constraints
    }

    /// Alphabetic words longer than three letters, minus stop words,
    /// deduplicated in first-occurrence order and capped at [`MAX_KEYWORDS`].
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for m in ALPHA_WORD.find_iter(text) {
            let word = m.as_str();
            if word.len() <= MIN_KEYWORD_LEN || self.lexicon.is_stop_word(word) {
                continue;
            }
            if keywords.iter().any(|k| k == word) {
                continue;
            }
            keywords.push(word.to_string());
            if keywords.len() == MAX_KEYWORDS {
                break;
            }
        }
        keywords
    }

    /// Basic cues are checked before advanced ones.
    pub fn detect_complexity(&self, text: &str) -> Complexity {
        if any_present(self.lexicon.basic_complexity, text) {
            Complexity::Basic
        } else if any_present(self.lexicon.advanced_complexity, text) {
            Complexity::Advanced
        } else {
            Complexity::Intermediate
        }
    }
}
