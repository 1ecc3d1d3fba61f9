//! # promptwright core
//!
//! Domain types and error definitions shared by every promptwright crate.
//! This crate holds no extraction or assembly logic: it defines the values
//! that flow between the context extractor, the prompt assembler, and the
//! presentation layer.
//!
//! ## Value flow
//!
//! raw text → [`ExtractedContext`] → (+ [`ModelProfile`]) → [`StructuredPrompt`]
//!
//! Every type here is a plain value: cloneable, comparable, serializable,
//! and never mutated after construction.

pub mod context;
pub mod error;
pub mod profile;
pub mod prompt;

// Re-export key types at crate root for ergonomics
pub use context::{Audience, Category, Complexity, ExtractedContext, Intent, OutputFormat, Tone};
pub use error::{Error, Result, TemplateError};
pub use profile::{DEFAULT_TARGET, ModelProfile};
pub use prompt::StructuredPrompt;
