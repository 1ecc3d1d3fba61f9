//! Prompt template catalog.
//!
//! A fixed set of ready-made prompt documents with `{variable}`
//! placeholders, plus example values for each. Independent of the
//! extractor and assembler: callers pick a template by id and fill it.
//!
//! Looking up an id that is not in the catalog is an error
//! ([`TemplateError::NotFound`]); there is no default template.

pub mod catalog;
pub mod fill;

pub use catalog::{PromptTemplate, TemplateLibrary};
pub use fill::{fill, placeholders};
pub use promptwright_core::TemplateError;
