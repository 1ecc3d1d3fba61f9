//! Built-in target-model profiles.
//!
//! Each supported target identifier maps to the extra constraints the
//! assembler appends for that model. Unknown identifiers resolve to the
//! default target's profile. Config-supplied profiles can replace or extend
//! the built-ins once at startup; the table is read-only afterwards.

use std::sync::LazyLock;

pub use promptwright_core::DEFAULT_TARGET;
use promptwright_core::ModelProfile;
use tracing::warn;

static BUILTIN: LazyLock<ProfileTable> = LazyLock::new(ProfileTable::with_defaults);

/// Ordered profile table. The default target is always the first entry.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: Vec<ModelProfile>,
}

impl ProfileTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static ProfileTable {
        &BUILTIN
    }

    /// Create a table holding the built-in target profiles.
    pub fn with_defaults() -> Self {
        let profiles = vec![
            // ── Anthropic ──────────────────────────────────────────────
            ModelProfile::new(DEFAULT_TARGET)
                .with_constraint("Prioritize long-form reasoning and detailed explanations")
                .with_constraint(
                    "Follow instructions precisely and maintain structural consistency",
                )
                .with_constraint(
                    "Minimize hallucinations by grounding responses in provided context",
                ),
            ModelProfile::new("claude-3.5-haiku"),
            // ── OpenAI ─────────────────────────────────────────────────
            ModelProfile::new("gpt-4-turbo")
                .with_constraint("Balance creativity with accuracy")
                .with_constraint("Maintain coherent narrative flow"),
            ModelProfile::new("gpt-4o")
                .with_constraint("Balance creativity with accuracy")
                .with_constraint("Maintain coherent narrative flow"),
            // ── Google ─────────────────────────────────────────────────
            ModelProfile::new("gemini-pro"),
        ];

        Self { profiles }
    }

    /// Built-in table with `overrides` applied: a profile whose id already
    /// exists replaces it in place, a new id is appended.
    pub fn with_overrides(overrides: impl IntoIterator<Item = ModelProfile>) -> Self {
        let mut table = Self::with_defaults();
        for profile in overrides {
            match table.profiles.iter_mut().find(|p| p.id == profile.id) {
                Some(existing) => *existing = profile,
                None => table.profiles.push(profile),
            }
        }
        table
    }

    /// Exact lookup. Returns None for unknown identifiers.
    pub fn get(&self, id: &str) -> Option<&ModelProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Lookup with fallback to the default target's profile.
    pub fn resolve(&self, id: &str) -> &ModelProfile {
        match self.get(id) {
            Some(profile) => profile,
            None => {
                warn!(target_id = id, fallback = DEFAULT_TARGET, "Unknown target, using default profile");
                self.default_profile()
            }
        }
    }

    pub fn default_profile(&self) -> &ModelProfile {
        &self.profiles[0]
    }

    /// Target identifiers in table order.
    pub fn ids(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_targets_in_order() {
        let table = ProfileTable::builtin();
        assert_eq!(
            table.ids(),
            vec!["claude-3.5-sonnet", "claude-3.5-haiku", "gpt-4-turbo", "gpt-4o", "gemini-pro"]
        );
        assert_eq!(table.default_profile().id, DEFAULT_TARGET);
    }

    #[test]
    fn per_target_constraint_counts() {
        let table = ProfileTable::with_defaults();
        assert_eq!(table.get("claude-3.5-sonnet").unwrap().extra_constraints.len(), 3);
        assert_eq!(table.get("gpt-4-turbo").unwrap().extra_constraints.len(), 2);
        assert_eq!(table.get("gpt-4o").unwrap().extra_constraints.len(), 2);
        assert!(table.get("claude-3.5-haiku").unwrap().extra_constraints.is_empty());
        assert!(table.get("gemini-pro").unwrap().extra_constraints.is_empty());
    }

    #[test]
    fn unknown_target_resolves_to_default() {
        let table = ProfileTable::with_defaults();
        assert!(table.get("unknown-model-xyz").is_none());
        assert_eq!(table.resolve("unknown-model-xyz").id, DEFAULT_TARGET);
        assert_eq!(table.resolve("").id, DEFAULT_TARGET);
    }

    #[test]
    fn overrides_replace_and_extend() {
        let table = ProfileTable::with_overrides([
            ModelProfile::new("gemini-pro").with_constraint("Cite sources inline"),
            ModelProfile::new("local-llama").with_constraint("Keep answers under 300 words"),
        ]);
        assert_eq!(table.len(), 6);
        assert_eq!(
            table.get("gemini-pro").unwrap().extra_constraints,
            vec!["Cite sources inline".to_string()]
        );
        assert_eq!(table.ids().last(), Some(&"local-llama"));
        assert_eq!(table.default_profile().id, DEFAULT_TARGET);
    }
}
