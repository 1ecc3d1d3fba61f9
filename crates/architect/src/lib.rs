//! Prompt architecture for promptwright.
//!
//! Two stages turn a free-text request into a structured prompt:
//!
//! 1. **Extract** — [`ContextExtractor`] classifies intent, category,
//!    audience, tone, and output format, and derives constraints, keywords,
//!    and complexity by keyword matching against the [`Lexicon`]
//! 2. **Assemble** — [`PromptAssembler`] turns that context plus a target
//!    [`ModelProfile`](promptwright_core::ModelProfile) into role, instruction,
//!    constraint, and quality-criteria sections and one composed document
//!
//! [`create_pipeline`] binds both stages to a target identifier.

pub mod assembler;
pub mod export;
pub mod extractor;
pub mod lexicon;
pub mod pipeline;
pub mod profiles;
pub mod samples;

pub use assembler::{PromptAssembler, title_case};
pub use export::PromptExport;
pub use extractor::{ContextExtractor, MAX_KEYWORDS};
pub use lexicon::Lexicon;
pub use pipeline::{Pipeline, create_pipeline};
pub use profiles::{DEFAULT_TARGET, ProfileTable};
pub use samples::{QUICK_EXAMPLES, quick_example};
