//! The embedded template catalog.
//!
//! Templates ship inside the binary as `assets/catalog.toml` and are parsed
//! once, on first use. The catalog is validated at load: every placeholder
//! must be declared and every declared variable must have an example value.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use promptwright_core::TemplateError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fill::{fill, placeholders};

const CATALOG_TOML: &str = include_str!("../assets/catalog.toml");

static BUILTIN: LazyLock<Result<TemplateLibrary, TemplateError>> =
    LazyLock::new(|| TemplateLibrary::from_toml(CATALOG_TOML));

/// A named prompt document with `{variable}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Lookup key, e.g. `blog_post`.
    pub id: String,
    /// Display name.
    pub name: String,
    pub category: String,
    pub description: String,
    pub template: String,
    /// Declared placeholder names, in display order.
    pub variables: Vec<String>,
    /// A complete, realistic value for every declared variable.
    #[serde(default)]
    pub example_values: BTreeMap<String, String>,
}

impl PromptTemplate {
    /// Substitute `values` into this template. Missing values leave their
    /// placeholder in place.
    pub fn fill(&self, values: &BTreeMap<String, String>) -> String {
        fill(&self.template, values)
    }

    /// The template filled with its own example values.
    pub fn example(&self) -> String {
        self.fill(&self.example_values)
    }

    /// Declared variables that have no entry in `values`.
    pub fn missing_variables(&self, values: &BTreeMap<String, String>) -> Vec<&str> {
        self.variables
            .iter()
            .filter(|v| !values.contains_key(v.as_str()))
            .map(String::as_str)
            .collect()
    }

    fn validate(&self) -> Result<(), TemplateError> {
        let invalid = |reason: String| {
            TemplateError::InvalidCatalog(format!("template '{}': {reason}", self.id))
        };

        for name in placeholders(&self.template) {
            if !self.variables.contains(&name) {
                return Err(invalid(format!("placeholder '{{{name}}}' is not declared")));
            }
        }
        for variable in &self.variables {
            if !self.example_values.contains_key(variable) {
                return Err(invalid(format!("variable '{variable}' has no example value")));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    templates: Vec<PromptTemplate>,
}

/// Ordered collection of prompt templates.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: Vec<PromptTemplate>,
}

impl TemplateLibrary {
    /// The catalog embedded in this build.
    pub fn builtin() -> Result<&'static TemplateLibrary, TemplateError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Parse and validate a catalog in the embedded TOML layout.
    pub fn from_toml(source: &str) -> Result<Self, TemplateError> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| TemplateError::InvalidCatalog(e.to_string()))?;

        for (i, template) in file.templates.iter().enumerate() {
            if file.templates[..i].iter().any(|t| t.id == template.id) {
                return Err(TemplateError::InvalidCatalog(format!(
                    "duplicate template id '{}'",
                    template.id
                )));
            }
            template.validate()?;
        }

        debug!(templates = file.templates.len(), "Loaded template catalog");
        Ok(Self {
            templates: file.templates,
        })
    }

    /// Template ids in catalog order.
    pub fn list(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PromptTemplate> {
        self.templates.iter()
    }

    pub fn get(&self, id: &str) -> Result<&PromptTemplate, TemplateError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    pub fn by_category(&self, category: &str) -> Vec<&PromptTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for template in &self.templates {
            if !categories.contains(&template.category.as_str()) {
                categories.push(&template.category);
            }
        }
        categories
    }

    /// Fill the template named `id`.
    pub fn fill(&self, id: &str, values: &BTreeMap<String, String>) -> Result<String, TemplateError> {
        Ok(self.get(id)?.fill(values))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
