use std::collections::BTreeSet;

/// Canonical, deduplicated form of a user's free-text skills.
///
/// Every token is lowercase, trimmed, and non-empty. Built fresh from the raw
/// strings on every request; the raw list is what gets persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Normalizes raw skill entries.
    ///
    /// For each entry: `_` and `-` become spaces, comma-separated sub-skills
    /// are split apart, and each part is trimmed and lowercased. Empty parts
    /// are dropped. Never fails; empty input yields an empty set.
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut tokens = BTreeSet::new();
        for entry in raw {
            let entry = entry.as_ref().replace(['_', '-'], " ");
            for part in entry.split(',') {
                let token = part.trim().to_lowercase();
                if !token.is_empty() {
                    tokens.insert(token);
                }
            }
        }
        Self(tokens)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    /// Tokens in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
